//! Fixed (constant) attribute implementation.

use super::{Attribute, AttributeKind};
use rand::Rng;

/// An attribute that always returns the value it was given.
///
/// This is the simplest strategy. Its benefit over a plain `f64` field is
/// that it can sit anywhere a [`DynamicAttribute`](crate::DynamicAttribute)
/// is expected.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FixedAttribute {
    value: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    changed_externally: bool,
}

impl FixedAttribute {
    /// Creates a fixed attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynattr::{Attribute, FixedAttribute};
    ///
    /// let velocity = FixedAttribute::new(3.0);
    /// assert_eq!(velocity.value(0.5), 3.0);
    /// ```
    pub fn new(value: f64) -> Self {
        Self {
            value,
            changed_externally: false,
        }
    }

    /// Gets the fixed value.
    pub fn fixed_value(&self) -> f64 {
        self.value
    }

    /// Sets the fixed value.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.changed_externally = true;
    }

    /// Copies this attribute's value into `target`.
    pub fn copy_to(&self, target: &mut Self) {
        target.value = self.value;
    }
}

impl Attribute for FixedAttribute {
    fn kind(&self) -> AttributeKind {
        AttributeKind::Fixed
    }

    fn sample<R: Rng + ?Sized>(&self, _x: f64, _rng: &mut R) -> f64 {
        self.value
    }

    fn is_value_changed_externally(&self) -> bool {
        self.changed_externally
    }

    fn process(&self, inputs: &[f64], buffer: &mut [f64]) {
        let len = inputs.len().min(buffer.len());
        buffer[..len].fill(self.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let attr = FixedAttribute::new(4.0);
        assert_eq!(attr.fixed_value(), 4.0);
        assert_eq!(attr.kind(), AttributeKind::Fixed);
        assert!(!attr.is_value_changed_externally());
    }

    #[test]
    fn test_value_ignores_input() {
        let attr = FixedAttribute::new(-1.5);
        for x in [-100.0, -1.0, 0.0, 0.5, 1.0, 1e9] {
            assert_eq!(attr.value(x), -1.5);
        }
    }

    #[test]
    fn test_set_value_marks_changed() {
        let mut attr = FixedAttribute::new(1.0);
        attr.set_value(2.0);
        assert_eq!(attr.value(0.0), 2.0);
        assert!(attr.is_value_changed_externally());
    }

    #[test]
    fn test_copy_to() {
        let source = FixedAttribute::new(7.0);
        let mut target = FixedAttribute::default();
        source.copy_to(&mut target);
        assert_eq!(target.value(0.0), 7.0);
        assert!(!target.is_value_changed_externally());
    }

    #[test]
    fn test_process_buffer() {
        let attr = FixedAttribute::new(0.25);
        let inputs = [0.0, 0.5, 1.0];
        let mut buffer = [0.0; 4];
        attr.process(&inputs, &mut buffer);
        assert_eq!(buffer, [0.25, 0.25, 0.25, 0.0]);
    }
}
