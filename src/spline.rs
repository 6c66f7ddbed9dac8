//! Cubic Hermite spline through an ordered list of 2D points.
//!
//! Tangents are slopes `dy/dx` derived Catmull-Rom style from each point's
//! neighbours, so the curve passes through every point with a continuous first
//! derivative in `x` at the interior ones, however unevenly the points are
//! spaced. The end slopes are one-sided, which makes a two-point spline
//! identical to a straight line. Collinear points reproduce their line.

use crate::ControlPoint;

/// A smooth interpolant through a sequence of control points.
///
/// Segments are addressed by the index of their left point: segment `i` runs
/// from `points[i]` to `points[i + 1]` and is parametrized by `t` in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use dynattr::{ControlPoint, Spline};
///
/// let spline = Spline::from_points([(0.0, 0.0), (1.0, 10.0), (2.0, 0.0)]);
/// assert_eq!(spline.evaluate(0, 1.0), 10.0);
/// assert_eq!(spline.interpolate_segment(1, 0.0), ControlPoint::new(1.0, 10.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    points: Vec<ControlPoint>,
    /// Slope `dy/dx` at each point
    tangents: Vec<f64>,
    /// Recompute tangents on every point change
    auto_calculate: bool,
}

impl Default for Spline {
    fn default() -> Self {
        Self::new()
    }
}

impl Spline {
    /// Creates an empty spline that recalculates its tangents automatically.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            tangents: Vec::new(),
            auto_calculate: true,
        }
    }

    /// Creates a spline through the given points, in the given order.
    pub fn from_points<P: Into<ControlPoint>>(points: impl IntoIterator<Item = P>) -> Self {
        let mut spline = Self::new();
        spline.points = points.into_iter().map(Into::into).collect();
        spline.recalc_tangents();
        spline
    }

    /// Appends a point to the end of the spline.
    pub fn add_point(&mut self, point: ControlPoint) {
        self.points.push(point);
        if self.auto_calculate {
            self.recalc_tangents();
        }
    }

    /// Replaces the point at `index`.
    ///
    /// Returns `false` if there is no point at that index.
    pub fn update_point(&mut self, index: usize, point: ControlPoint) -> bool {
        let Some(slot) = self.points.get_mut(index) else {
            return false;
        };
        *slot = point;
        if self.auto_calculate {
            self.recalc_tangents();
        }
        true
    }

    /// Returns the point at `index`, if any.
    pub fn point(&self, index: usize) -> Option<ControlPoint> {
        self.points.get(index).copied()
    }

    /// All points, in spline order.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Number of points in the spline.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Removes all points.
    pub fn clear(&mut self) {
        self.points.clear();
        self.tangents.clear();
    }

    /// Controls whether tangents are recomputed after each point change.
    ///
    /// Turning this off is useful when adding many points at once; call
    /// [`Spline::recalc_tangents`] when done.
    pub fn set_auto_calculate(&mut self, auto_calculate: bool) {
        self.auto_calculate = auto_calculate;
    }

    /// Recomputes the slope at every point.
    pub fn recalc_tangents(&mut self) {
        let n = self.points.len();
        self.tangents.clear();
        if n < 2 {
            self.tangents.resize(n, 0.0);
            return;
        }

        self.tangents.reserve(n);
        for i in 0..n {
            let before = self.points[i.saturating_sub(1)];
            let after = self.points[(i + 1).min(n - 1)];
            self.tangents.push(slope(before, after));
        }
    }

    /// Returns the point at parameter `t` on segment `index`.
    ///
    /// `t` is clamped to `[0, 1]`. An index at or past the last point yields
    /// the last point.
    pub fn interpolate_segment(&self, index: usize, t: f64) -> ControlPoint {
        let n = self.points.len();
        if n == 0 {
            return ControlPoint::ORIGIN;
        }
        if index + 1 >= n {
            return self.points[n - 1];
        }

        let t = t.clamp(0.0, 1.0);
        if t == 0.0 {
            return self.points[index];
        }
        if t == 1.0 {
            return self.points[index + 1];
        }

        let (p0, p1) = (self.points[index], self.points[index + 1]);

        // Tangents may be stale when auto calculation is off and points were
        // added since the last recalculation.
        let (m0, m1) = match (self.tangents.get(index), self.tangents.get(index + 1)) {
            (Some(&m0), Some(&m1)) => (m0, m1),
            _ => {
                let chord = slope(p0, p1);
                (chord, chord)
            }
        };

        let width = p1.x - p0.x;
        let t2 = t * t;
        let t3 = t2 * t;
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        ControlPoint::new(
            p0.x + width * t,
            h00 * p0.y + h10 * width * m0 + h01 * p1.y + h11 * width * m1,
        )
    }

    /// Returns the `y` value at parameter `t` on segment `index`.
    pub fn evaluate(&self, index: usize, t: f64) -> f64 {
        self.interpolate_segment(index, t).y
    }

    /// Returns the point at global parameter `t` in `[0, 1]` over the whole
    /// spline, with each segment taking an equal share of the range.
    pub fn interpolate(&self, t: f64) -> ControlPoint {
        let n = self.points.len();
        if n < 2 {
            return self.points.first().copied().unwrap_or(ControlPoint::ORIGIN);
        }

        let segments = (n - 1) as f64;
        let scaled = t.clamp(0.0, 1.0) * segments;
        let index = (scaled.floor() as usize).min(n - 2);
        self.interpolate_segment(index, scaled - index as f64)
    }
}

/// Slope of the chord between two points; flat when they share an `x`.
fn slope(a: ControlPoint, b: ControlPoint) -> f64 {
    let run = b.x - a.x;
    if run == 0.0 { 0.0 } else { (b.y - a.y) / run }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn peak() -> Spline {
        Spline::from_points([(0.0, 0.0), (1.0, 10.0), (2.0, 0.0)])
    }

    fn peak_with_manual_flag() -> Spline {
        let mut spline = peak();
        spline.set_auto_calculate(false);
        spline
    }

    #[test]
    fn test_empty_spline() {
        let spline = Spline::new();
        assert_eq!(spline.num_points(), 0);
        assert_eq!(spline.interpolate_segment(0, 0.5), ControlPoint::ORIGIN);
        assert_eq!(spline.interpolate(0.5), ControlPoint::ORIGIN);
    }

    #[test]
    fn test_single_point() {
        let spline = Spline::from_points([(3.0, 4.0)]);
        assert_eq!(spline.evaluate(0, 0.5), 4.0);
        assert_eq!(spline.interpolate(0.7), ControlPoint::new(3.0, 4.0));
    }

    #[test]
    fn test_two_points_is_linear() {
        let spline = Spline::from_points([(0.0, 0.0), (1.0, 10.0)]);
        for t in [0.0, 0.1, 0.25, 0.5, 0.8, 1.0] {
            let p = spline.interpolate_segment(0, t);
            assert!(approx_eq(p.x, t));
            assert!(approx_eq(p.y, 10.0 * t));
        }
    }

    #[test]
    fn test_passes_through_points() {
        let spline = peak();
        assert_eq!(spline.evaluate(0, 0.0), 0.0);
        assert_eq!(spline.evaluate(0, 1.0), 10.0);
        assert_eq!(spline.evaluate(1, 0.0), 10.0);
        assert_eq!(spline.evaluate(1, 1.0), 0.0);
    }

    #[test]
    fn test_interior_tangent_from_neighbours() {
        let spline = peak();
        // Neighbours of the peak are level, so its tangent is flat.
        assert_eq!(spline.tangents, vec![10.0, 0.0, -10.0]);
    }

    #[test]
    fn test_uneven_spacing_slope() {
        let spline = Spline::from_points([(0.0, 0.0), (1.0, 4.0), (4.0, 1.0)]);
        // Interior slope spans both neighbours: (1 - 0) / (4 - 0)
        assert_eq!(spline.tangents[1], 0.25);
    }

    #[test]
    fn test_first_derivative_continuity_in_x() {
        let spline = Spline::from_points([(0.0, 0.0), (1.0, 4.0), (4.0, 1.0)]);
        let h = 1e-6;
        // Segment 0 is one unit wide, segment 1 is three units wide.
        let left = (spline.evaluate(0, 1.0) - spline.evaluate(0, 1.0 - h)) / h;
        let right = (spline.evaluate(1, h / 3.0) - spline.evaluate(1, 0.0)) / h;
        assert!((left - 0.25).abs() < 1e-3, "left slope was {left}");
        assert!((right - 0.25).abs() < 1e-3, "right slope was {right}");
    }

    #[test]
    fn test_collinear_points_reproduce_line() {
        let spline = Spline::from_points([(0.0, 0.0), (1.0, 10.0), (3.0, 30.0)]);
        for t in [0.1, 0.5, 0.9] {
            let p = spline.interpolate_segment(0, t);
            assert!(approx_eq(p.y, 10.0 * p.x));
            let p = spline.interpolate_segment(1, t);
            assert!(approx_eq(p.y, 10.0 * p.x));
        }
    }

    #[test]
    fn test_duplicate_x_slope_is_flat() {
        let spline = Spline::from_points([(1.0, 2.0), (1.0, 5.0)]);
        assert_eq!(spline.tangents, vec![0.0, 0.0]);
        assert!(spline.evaluate(0, 0.5).is_finite());
    }

    #[test]
    fn test_smooth_differs_from_linear() {
        let spline = peak();
        // A flat tangent at the peak lifts the curve above the chord.
        assert!(spline.evaluate(0, 0.75) > 7.5);
    }

    #[test]
    fn test_t_clamped() {
        let spline = peak();
        assert_eq!(spline.evaluate(0, -1.0), 0.0);
        assert_eq!(spline.evaluate(0, 2.0), 10.0);
    }

    #[test]
    fn test_index_past_end() {
        let spline = peak();
        assert_eq!(spline.interpolate_segment(2, 0.5), ControlPoint::new(2.0, 0.0));
        assert_eq!(spline.interpolate_segment(10, 0.5), ControlPoint::new(2.0, 0.0));
    }

    #[test]
    fn test_global_interpolate() {
        let spline = peak();
        assert_eq!(spline.interpolate(0.0), ControlPoint::new(0.0, 0.0));
        assert_eq!(spline.interpolate(0.5), ControlPoint::new(1.0, 10.0));
        assert_eq!(spline.interpolate(1.0), ControlPoint::new(2.0, 0.0));
        assert!(approx_eq(
            spline.interpolate(0.25).y,
            spline.interpolate_segment(0, 0.5).y
        ));
    }

    #[test]
    fn test_update_point() {
        let mut spline = peak();
        assert!(spline.update_point(1, ControlPoint::new(1.0, 20.0)));
        assert_eq!(spline.evaluate(0, 1.0), 20.0);
        assert!(!spline.update_point(5, ControlPoint::ORIGIN));
    }

    #[test]
    fn test_manual_tangent_calculation() {
        let mut spline = Spline::new();
        spline.set_auto_calculate(false);
        spline.add_point(ControlPoint::new(0.0, 0.0));
        spline.add_point(ControlPoint::new(1.0, 10.0));
        spline.add_point(ControlPoint::new(2.0, 0.0));
        // Without tangents the segments fall back to straight chords.
        assert!(approx_eq(spline.evaluate(0, 0.75), 7.5));

        spline.recalc_tangents();
        assert_eq!(spline, peak_with_manual_flag());
    }

    #[test]
    fn test_clear() {
        let mut spline = peak();
        spline.clear();
        assert_eq!(spline.num_points(), 0);
        assert!(spline.point(0).is_none());
    }
}
