//! Curve-driven attribute implementation.
//!
//! A curved attribute holds a set of 2D control points and returns the value
//! of the curve through them at the queried `x`. The curve is either a chain of
//! straight segments or a smooth [`Spline`].
//!
//! Points are kept sorted by `x` at all times: every mutation sorts them again
//! (stably, so duplicates keep their insertion order) and rebuilds the spline.

use super::{Attribute, AttributeKind};
use crate::{ControlPoint, Spline};
use rand::Rng;

/// How values between two control points are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InterpolationType {
    /// Straight line between neighbouring points
    #[default]
    Linear,
    /// Smooth cubic curve through all points
    Spline,
}

/// An attribute whose value follows a curve through user-defined control points.
///
/// Queries outside the curve clamp to the first or last point. An empty curve
/// evaluates to `0.0`; a single point evaluates to its `y` everywhere.
///
/// # Examples
///
/// ```
/// use dynattr::{Attribute, CurvedAttribute, InterpolationType};
///
/// let mut alpha = CurvedAttribute::new();
/// alpha.add_control_point(1.0, 0.0);
/// alpha.add_control_point(0.0, 1.0);
/// assert_eq!(alpha.value(0.5), 0.5);
/// assert_eq!(alpha.value(2.0), 0.0);
///
/// let smooth = CurvedAttribute::from_points(
///     InterpolationType::Spline,
///     [(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)],
/// );
/// assert_eq!(smooth.value(0.5), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "CurveDef", into = "CurveDef"))]
pub struct CurvedAttribute {
    interpolation_type: InterpolationType,
    control_points: Vec<ControlPoint>,
    /// Span between the smallest and largest control point `x`
    range: f64,
    /// Only populated for spline interpolation
    spline: Spline,
    changed_externally: bool,
}

impl CurvedAttribute {
    /// Creates an empty curve with linear interpolation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty curve with the given interpolation.
    pub fn with_interpolation(interpolation_type: InterpolationType) -> Self {
        Self {
            interpolation_type,
            ..Self::default()
        }
    }

    /// Creates a curve through the given points, in any order.
    pub fn from_points<P: Into<ControlPoint>>(
        interpolation_type: InterpolationType,
        points: impl IntoIterator<Item = P>,
    ) -> Self {
        let mut curve = Self::with_interpolation(interpolation_type);
        curve.control_points = points.into_iter().map(Into::into).collect();
        curve.process_control_points();
        curve
    }

    /// Sets the interpolation type and rebuilds the curve to match.
    pub fn set_interpolation_type(&mut self, interpolation_type: InterpolationType) {
        self.interpolation_type = interpolation_type;
        self.changed_externally = true;
        self.process_control_points();
    }

    /// Gets the interpolation type.
    pub fn interpolation_type(&self) -> InterpolationType {
        self.interpolation_type
    }

    /// Adds a control point.
    ///
    /// Points may be added in any order; the curve is re-sorted immediately.
    pub fn add_control_point(&mut self, x: f64, y: f64) {
        self.control_points.push(ControlPoint::new(x, y));
        self.changed_externally = true;
        self.process_control_points();
    }

    /// The control points, sorted by ascending `x`.
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }

    /// Number of control points.
    pub fn num_control_points(&self) -> usize {
        self.control_points.len()
    }

    /// Removes every control point. The empty curve evaluates to `0.0`.
    pub fn remove_all_control_points(&mut self) {
        self.control_points.clear();
        self.changed_externally = true;
        self.process_control_points();
    }

    /// Span between the smallest and largest control point `x`.
    pub fn range(&self) -> f64 {
        self.range
    }

    /// The spline built from the control points.
    ///
    /// Empty unless the interpolation type is [`InterpolationType::Spline`].
    pub fn spline(&self) -> &Spline {
        &self.spline
    }

    /// Sorts the control points and rebuilds everything derived from them.
    ///
    /// Every mutating method already calls this, so calling it again is a
    /// no-op apart from the work done.
    pub fn process_control_points(&mut self) {
        self.control_points.sort_by(|a, b| a.x.total_cmp(&b.x));

        self.range = match (self.control_points.first(), self.control_points.last()) {
            (Some(first), Some(last)) => last.x - first.x,
            _ => 0.0,
        };

        self.spline.clear();
        if self.interpolation_type == InterpolationType::Spline {
            self.spline = Spline::from_points(self.control_points.iter().copied());
        }

        tracing::trace!(
            points = self.control_points.len(),
            range = self.range,
            interpolation = ?self.interpolation_type,
            "processed control points"
        );
    }

    /// Copies the interpolation type and control points into `target`.
    pub fn copy_to(&self, target: &mut Self) {
        target.interpolation_type = self.interpolation_type;
        target.control_points.clone_from(&self.control_points);
        target.range = self.range;
        target.spline.clone_from(&self.spline);
    }

    /// Index of the last control point with `x` at or below the query.
    ///
    /// Returns `None` if the query lies below the first point.
    fn nearest_lower(&self, x: f64) -> Option<usize> {
        self.control_points
            .partition_point(|p| p.x <= x)
            .checked_sub(1)
    }
}

impl Attribute for CurvedAttribute {
    fn kind(&self) -> AttributeKind {
        AttributeKind::Curved
    }

    fn sample<R: Rng + ?Sized>(&self, x: f64, _rng: &mut R) -> f64 {
        let points = &self.control_points;
        let (first, last) = match (points.first(), points.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };
        if points.len() == 1 {
            return first.y;
        }

        let Some(i) = self.nearest_lower(x) else {
            return first.y;
        };

        // Exact hit: the earliest of any duplicates wins.
        if points[i].x == x {
            let first_dup = points[..i].partition_point(|p| p.x < x);
            return points[first_dup].y;
        }
        if i + 1 >= points.len() {
            return last.y;
        }

        let (lower, upper) = (points[i], points[i + 1]);
        let t = (x - lower.x) / (upper.x - lower.x);
        match self.interpolation_type {
            InterpolationType::Linear => lower.y + (upper.y - lower.y) * t,
            InterpolationType::Spline => self.spline.evaluate(i, t),
        }
    }

    fn is_value_changed_externally(&self) -> bool {
        self.changed_externally
    }
}

/// Serialized form of a curve: only what the user supplied.
#[cfg(feature = "serde")]
#[derive(Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct CurveDef {
    interpolation: InterpolationType,
    control_points: Vec<ControlPoint>,
}

#[cfg(feature = "serde")]
impl From<CurveDef> for CurvedAttribute {
    fn from(def: CurveDef) -> Self {
        Self::from_points(def.interpolation, def.control_points)
    }
}

#[cfg(feature = "serde")]
impl From<CurvedAttribute> for CurveDef {
    fn from(curve: CurvedAttribute) -> Self {
        Self {
            interpolation: curve.interpolation_type,
            control_points: curve.control_points,
        }
    }
}
