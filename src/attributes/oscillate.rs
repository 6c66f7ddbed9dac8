//! Oscillating attribute implementation.

use super::{Attribute, AttributeKind};
use rand::Rng;
use std::f64::consts::TAU;

/// Waveform used by an [`OscillateAttribute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OscillationType {
    /// Smooth sine wave
    #[default]
    Sine,
    /// Square wave switching between `base + amplitude` and `base - amplitude`
    Square,
}

/// An attribute whose value oscillates periodically with its input.
///
/// The value is `base + amplitude * w(TAU * frequency * x + phase)` where `w`
/// is `sin` for [`OscillationType::Sine`] and the sign of `sin` for
/// [`OscillationType::Square`]. A square wave is high where the sine is zero.
///
/// # Examples
///
/// ```
/// use dynattr::{Attribute, OscillateAttribute, OscillationType};
///
/// let flicker = OscillateAttribute::new(OscillationType::Square)
///     .with_frequency(4.0)
///     .with_base(1.0)
///     .with_amplitude(0.5);
/// assert_eq!(flicker.value(0.1), 1.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OscillateAttribute {
    oscillation_type: OscillationType,
    /// Cycles per unit of input
    frequency: f64,
    /// Phase offset in radians
    phase: f64,
    /// Center line of the wave
    base: f64,
    amplitude: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    changed_externally: bool,
}

impl Default for OscillateAttribute {
    fn default() -> Self {
        Self::new(OscillationType::Sine)
    }
}

impl OscillateAttribute {
    /// Creates an oscillator with frequency 1, phase 0, base 0 and amplitude 1.
    pub fn new(oscillation_type: OscillationType) -> Self {
        Self {
            oscillation_type,
            frequency: 1.0,
            phase: 0.0,
            base: 0.0,
            amplitude: 1.0,
            changed_externally: false,
        }
    }

    /// Sets the frequency at construction time.
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the phase (radians) at construction time.
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Sets the base line at construction time.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = base;
        self
    }

    /// Sets the amplitude at construction time.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Gets the waveform.
    pub fn oscillation_type(&self) -> OscillationType {
        self.oscillation_type
    }

    /// Sets the waveform.
    pub fn set_oscillation_type(&mut self, oscillation_type: OscillationType) {
        self.oscillation_type = oscillation_type;
        self.changed_externally = true;
    }

    /// Gets the frequency in cycles per unit of input.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Sets the frequency in cycles per unit of input.
    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
        self.changed_externally = true;
    }

    /// Gets the phase offset in radians.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Sets the phase offset in radians.
    pub fn set_phase(&mut self, phase: f64) {
        self.phase = phase;
        self.changed_externally = true;
    }

    /// Gets the base line.
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Sets the base line.
    pub fn set_base(&mut self, base: f64) {
        self.base = base;
        self.changed_externally = true;
    }

    /// Gets the amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Sets the amplitude.
    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.amplitude = amplitude;
        self.changed_externally = true;
    }

    /// Copies the waveform and all wave parameters into `target`.
    pub fn copy_to(&self, target: &mut Self) {
        target.oscillation_type = self.oscillation_type;
        target.frequency = self.frequency;
        target.phase = self.phase;
        target.base = self.base;
        target.amplitude = self.amplitude;
    }
}

impl Attribute for OscillateAttribute {
    fn kind(&self) -> AttributeKind {
        AttributeKind::Oscillate
    }

    fn sample<R: Rng + ?Sized>(&self, x: f64, _rng: &mut R) -> f64 {
        let wave = (TAU * self.frequency * x + self.phase).sin();
        match self.oscillation_type {
            OscillationType::Sine => self.base + self.amplitude * wave,
            OscillationType::Square => {
                let sign = if wave >= 0.0 { 1.0 } else { -1.0 };
                self.base + self.amplitude * sign
            }
        }
    }

    fn is_value_changed_externally(&self) -> bool {
        self.changed_externally
    }
}
