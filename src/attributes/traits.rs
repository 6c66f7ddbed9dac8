//! Core trait definitions for dynamic attributes.

use rand::Rng;
use std::fmt;

/// Tag identifying which evaluation strategy an attribute uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AttributeKind {
    /// Constant value
    Fixed,
    /// Uniform random draw between two bounds
    Random,
    /// Value read off a curve through control points
    Curved,
    /// Periodic function of the input
    Oscillate,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttributeKind::Fixed => "fixed",
            AttributeKind::Random => "random",
            AttributeKind::Curved => "curved",
            AttributeKind::Oscillate => "oscillate",
        };
        f.write_str(name)
    }
}

/// Common interface for all dynamic attributes.
///
/// An attribute maps a scalar input (typically the normalized age of a
/// particle) to a scalar output. Callers query the value without knowing
/// whether it is fixed, random, curve driven or oscillating.
///
/// The trait provides:
/// - Evaluation with an explicit random source via `sample()`
/// - Evaluation with the thread-local random source via `value()`
/// - Batch evaluation via `process()`
pub trait Attribute {
    /// Returns the evaluation strategy of this attribute.
    fn kind(&self) -> AttributeKind;

    /// Evaluates the attribute at `x`, drawing any randomness from `rng`.
    ///
    /// Only random attributes consume the generator; every other strategy
    /// ignores it.
    fn sample<R: Rng + ?Sized>(&self, x: f64, rng: &mut R) -> f64;

    /// Returns true if one of the parameters was changed after construction.
    fn is_value_changed_externally(&self) -> bool;

    /// Evaluates the attribute at `x` using the thread-local random source.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynattr::{Attribute, FixedAttribute};
    ///
    /// let size = FixedAttribute::new(2.5);
    /// assert_eq!(size.value(0.0), 2.5);
    /// assert_eq!(size.value(0.75), 2.5);
    /// ```
    fn value(&self, x: f64) -> f64 {
        self.sample(x, &mut rand::thread_rng())
    }

    /// Evaluates the attribute for every input, writing into `buffer`.
    ///
    /// Only the overlapping length of the two slices is processed.
    fn process(&self, inputs: &[f64], buffer: &mut [f64]) {
        let mut rng = rand::thread_rng();
        for (out, &x) in buffer.iter_mut().zip(inputs) {
            *out = self.sample(x, &mut rng);
        }
    }
}
