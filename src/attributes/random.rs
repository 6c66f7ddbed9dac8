//! Random attribute implementation.

use super::{Attribute, AttributeKind};
use rand::Rng;

/// An attribute that returns a uniformly distributed value between two bounds.
///
/// A fresh value is drawn on every evaluation; nothing is memoized. The input
/// is ignored.
///
/// Bounds are not required to be ordered. When `min > max` the draw is taken
/// from `[max, min]`. When the bounds are equal, either one is NaN, or either
/// one is infinite, the lower bound is returned and no randomness is consumed.
/// Finite bounds whose span overflows `f64` are still drawn from.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RandomAttribute {
    min: f64,
    max: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    changed_externally: bool,
}

impl RandomAttribute {
    /// Creates a random attribute drawing from `[min, max]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynattr::{Attribute, RandomAttribute};
    /// use rand::SeedableRng;
    ///
    /// let lifetime = RandomAttribute::new(2.0, 4.0);
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let value = lifetime.sample(0.0, &mut rng);
    /// assert!((2.0..=4.0).contains(&value));
    /// ```
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            changed_externally: false,
        }
    }

    /// Gets the minimum value.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Gets the maximum value.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Sets the minimum value.
    pub fn set_min(&mut self, min: f64) {
        self.set_min_max(min, self.max);
    }

    /// Sets the maximum value.
    pub fn set_max(&mut self, max: f64) {
        self.set_min_max(self.min, max);
    }

    /// Sets both bounds at once.
    pub fn set_min_max(&mut self, min: f64, max: f64) {
        if min > max {
            tracing::debug!(
                min,
                max,
                "random attribute bounds inverted, draws use the swapped range"
            );
        }
        self.min = min;
        self.max = max;
        self.changed_externally = true;
    }

    /// Copies this attribute's bounds into `target`.
    pub fn copy_to(&self, target: &mut Self) {
        target.min = self.min;
        target.max = self.max;
    }

    /// The ordered draw range.
    fn bounds(&self) -> (f64, f64) {
        (self.min.min(self.max), self.min.max(self.max))
    }
}

impl Attribute for RandomAttribute {
    fn kind(&self) -> AttributeKind {
        AttributeKind::Random
    }

    fn sample<R: Rng + ?Sized>(&self, _x: f64, rng: &mut R) -> f64 {
        let (low, high) = self.bounds();
        if !(low < high && low.is_finite() && high.is_finite()) {
            return low;
        }

        // The inclusive sampler scales the span by 1 / (1 - EPSILON) and
        // rejects a result that overflows.
        if ((high - low) / (1.0 - f64::EPSILON)).is_finite() {
            rng.gen_range(low..=high)
        } else {
            let u: f64 = rng.gen_range(0.0..=1.0);
            (low * (1.0 - u) + high * u).clamp(low, high)
        }
    }

    fn is_value_changed_externally(&self) -> bool {
        self.changed_externally
    }
}
