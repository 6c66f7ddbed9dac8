//! Dynamic attributes: values whose computation strategy is chosen at runtime.
//!
//! This module contains the four evaluation strategies and the
//! [`DynamicAttribute`] enum that holds any one of them.

mod curved;
mod fixed;
mod oscillate;
mod random;
mod traits;

pub use curved::{CurvedAttribute, InterpolationType};
pub use fixed::FixedAttribute;
pub use oscillate::{OscillateAttribute, OscillationType};
pub use random::RandomAttribute;
pub use traits::{Attribute, AttributeKind};

use crate::AttributeError;
use rand::Rng;

/// An attribute using any of the available evaluation strategies.
///
/// The owning object (an emitter or affector template, say) stores one of
/// these per parameter and queries it once per update without caring which
/// strategy is behind it. `Clone` is a deep copy, which is what per-particle
/// instancing of a template needs.
///
/// # Examples
///
/// ```
/// use dynattr::{Attribute, CurvedAttribute, DynamicAttribute, InterpolationType};
///
/// let size: DynamicAttribute = 2.0.into();
/// assert_eq!(size.value(0.3), 2.0);
///
/// let alpha = DynamicAttribute::Curved(CurvedAttribute::from_points(
///     InterpolationType::Linear,
///     [(0.0, 1.0), (1.0, 0.0)],
/// ));
/// assert_eq!(alpha.value(0.25), 0.75);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum DynamicAttribute {
    Fixed(FixedAttribute),
    Random(RandomAttribute),
    Curved(CurvedAttribute),
    Oscillate(OscillateAttribute),
}

impl Default for DynamicAttribute {
    fn default() -> Self {
        Self::Fixed(FixedAttribute::default())
    }
}

impl DynamicAttribute {
    /// Copies this attribute's parameters into `target`.
    ///
    /// Both attributes must use the same strategy. On mismatch the target is
    /// left untouched and an error is returned. The target's
    /// changed-externally flag is never modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynattr::{AttributeError, AttributeKind, DynamicAttribute, RandomAttribute};
    ///
    /// let source: DynamicAttribute = 4.0.into();
    /// let mut fixed: DynamicAttribute = 0.0.into();
    /// assert!(source.copy_to(&mut fixed).is_ok());
    /// assert_eq!(fixed, source);
    ///
    /// let mut random = DynamicAttribute::Random(RandomAttribute::new(0.0, 1.0));
    /// assert_eq!(
    ///     source.copy_to(&mut random),
    ///     Err(AttributeError::KindMismatch {
    ///         expected: AttributeKind::Fixed,
    ///         found: AttributeKind::Random,
    ///     })
    /// );
    /// ```
    pub fn copy_to(&self, target: &mut DynamicAttribute) -> Result<(), AttributeError> {
        match (self, target) {
            (Self::Fixed(source), Self::Fixed(target)) => source.copy_to(target),
            (Self::Random(source), Self::Random(target)) => source.copy_to(target),
            (Self::Curved(source), Self::Curved(target)) => source.copy_to(target),
            (Self::Oscillate(source), Self::Oscillate(target)) => source.copy_to(target),
            (source, target) => {
                tracing::debug!(
                    expected = %source.kind(),
                    found = %target.kind(),
                    "refusing to copy between attribute kinds"
                );
                return Err(AttributeError::KindMismatch {
                    expected: source.kind(),
                    found: target.kind(),
                });
            }
        }
        Ok(())
    }
}

impl Attribute for DynamicAttribute {
    fn kind(&self) -> AttributeKind {
        match self {
            Self::Fixed(attr) => attr.kind(),
            Self::Random(attr) => attr.kind(),
            Self::Curved(attr) => attr.kind(),
            Self::Oscillate(attr) => attr.kind(),
        }
    }

    fn sample<R: Rng + ?Sized>(&self, x: f64, rng: &mut R) -> f64 {
        match self {
            Self::Fixed(attr) => attr.sample(x, rng),
            Self::Random(attr) => attr.sample(x, rng),
            Self::Curved(attr) => attr.sample(x, rng),
            Self::Oscillate(attr) => attr.sample(x, rng),
        }
    }

    fn is_value_changed_externally(&self) -> bool {
        match self {
            Self::Fixed(attr) => attr.is_value_changed_externally(),
            Self::Random(attr) => attr.is_value_changed_externally(),
            Self::Curved(attr) => attr.is_value_changed_externally(),
            Self::Oscillate(attr) => attr.is_value_changed_externally(),
        }
    }
}

impl From<f64> for DynamicAttribute {
    fn from(value: f64) -> Self {
        Self::Fixed(FixedAttribute::new(value))
    }
}

impl From<FixedAttribute> for DynamicAttribute {
    fn from(attr: FixedAttribute) -> Self {
        Self::Fixed(attr)
    }
}

impl From<RandomAttribute> for DynamicAttribute {
    fn from(attr: RandomAttribute) -> Self {
        Self::Random(attr)
    }
}

impl From<CurvedAttribute> for DynamicAttribute {
    fn from(attr: CurvedAttribute) -> Self {
        Self::Curved(attr)
    }
}

impl From<OscillateAttribute> for DynamicAttribute {
    fn from(attr: OscillateAttribute) -> Self {
        Self::Oscillate(attr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn all_kinds() -> Vec<DynamicAttribute> {
        vec![
            FixedAttribute::new(1.0).into(),
            RandomAttribute::new(0.0, 1.0).into(),
            CurvedAttribute::from_points(InterpolationType::Spline, [(0.0, 0.0), (1.0, 1.0)])
                .into(),
            OscillateAttribute::new(OscillationType::Sine).into(),
        ]
    }

    #[test]
    fn test_kind_tags() {
        let kinds: Vec<AttributeKind> = all_kinds().iter().map(|a| a.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                AttributeKind::Fixed,
                AttributeKind::Random,
                AttributeKind::Curved,
                AttributeKind::Oscillate,
            ]
        );
    }

    #[test]
    fn test_dispatch_matches_variant() {
        let mut rng = StdRng::seed_from_u64(3);
        let curve =
            CurvedAttribute::from_points(InterpolationType::Linear, [(0.0, 2.0), (1.0, 4.0)]);
        let wrapped = DynamicAttribute::from(curve.clone());
        for x in [0.0, 0.2, 0.9] {
            assert_eq!(wrapped.sample(x, &mut rng), curve.sample(x, &mut rng));
        }
    }

    #[test]
    fn test_default_is_fixed_zero() {
        let attr = DynamicAttribute::default();
        assert_eq!(attr.kind(), AttributeKind::Fixed);
        assert_eq!(attr.value(0.5), 0.0);
    }

    #[test]
    fn test_copy_to_same_kind() {
        for source in all_kinds() {
            let mut target = match source.kind() {
                AttributeKind::Fixed => FixedAttribute::default().into(),
                AttributeKind::Random => RandomAttribute::default().into(),
                AttributeKind::Curved => CurvedAttribute::default().into(),
                AttributeKind::Oscillate => OscillateAttribute::default().into(),
            };
            assert!(source.copy_to(&mut target).is_ok());
            assert_eq!(target, source);
        }
    }

    #[test]
    fn test_copy_to_mismatch_leaves_target() {
        let kinds = all_kinds();
        for source in &kinds {
            for original in &kinds {
                if source.kind() == original.kind() {
                    continue;
                }
                let mut target = original.clone();
                let err = source.copy_to(&mut target).unwrap_err();
                assert_eq!(
                    err,
                    AttributeError::KindMismatch {
                        expected: source.kind(),
                        found: original.kind(),
                    }
                );
                assert_eq!(&target, original);
            }
        }
    }

    #[test]
    fn test_copy_to_preserves_target_flag() {
        let source: DynamicAttribute = 3.0.into();
        let mut changed = FixedAttribute::new(0.0);
        changed.set_value(1.0);
        let mut target = DynamicAttribute::from(changed);

        source.copy_to(&mut target).unwrap();
        assert_eq!(target.value(0.0), 3.0);
        assert!(target.is_value_changed_externally());
    }

    #[test]
    fn test_mismatch_error_message() {
        let err = AttributeError::KindMismatch {
            expected: AttributeKind::Curved,
            found: AttributeKind::Oscillate,
        };
        assert_eq!(
            err.to_string(),
            "cannot copy curved attribute into oscillate attribute"
        );
    }

    #[test]
    fn test_clone_evaluates_identically() {
        let mut rng = StdRng::seed_from_u64(11);
        for original in all_kinds() {
            let copy = original.clone();
            assert_eq!(copy, original);
            if original.kind() == AttributeKind::Random {
                continue;
            }
            for x in [0.0, 0.1, 0.5, 0.77, 1.0] {
                assert_eq!(copy.sample(x, &mut rng), original.sample(x, &mut rng));
            }
        }
    }
}
