//! Helpers for evaluating attributes that may not be configured.

use crate::{Attribute, DynamicAttribute};
use rand::Rng;

/// Evaluates `attribute` at `x`, or returns `default` if there is none.
///
/// # Examples
///
/// ```
/// use dynattr::{DynamicAttribute, helper::calculate};
///
/// let rotation: Option<DynamicAttribute> = None;
/// assert_eq!(calculate(rotation.as_ref(), 0.5, 1.0), 1.0);
///
/// let rotation: Option<DynamicAttribute> = Some(90.0.into());
/// assert_eq!(calculate(rotation.as_ref(), 0.5, 1.0), 90.0);
/// ```
pub fn calculate(attribute: Option<&DynamicAttribute>, x: f64, default: f64) -> f64 {
    attribute.map_or(default, |attr| attr.value(x))
}

/// Like [`calculate`], drawing any randomness from `rng`.
pub fn calculate_with_rng<R: Rng + ?Sized>(
    attribute: Option<&DynamicAttribute>,
    x: f64,
    default: f64,
    rng: &mut R,
) -> f64 {
    match attribute {
        Some(attr) => attr.sample(x, rng),
        None => default,
    }
}
