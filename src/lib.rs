//! Dynamic attributes - runtime-selectable value strategies for particle systems.
//!
//! A dynamic attribute turns a scalar input, usually the normalized age of a
//! particle, into a scalar output. The strategy is chosen when the attribute
//! is configured: a fixed value, a random draw, a curve through control
//! points, or an oscillation. Callers only ever ask for the value.

pub mod attributes;
pub mod error;
pub mod helper;
pub mod point;
pub mod spline;

// Re-export commonly used types at the crate root
pub use attributes::{
    Attribute, AttributeKind, CurvedAttribute, DynamicAttribute, FixedAttribute,
    InterpolationType, OscillateAttribute, OscillationType, RandomAttribute,
};
pub use error::AttributeError;
pub use helper::calculate;
pub use point::ControlPoint;
pub use spline::Spline;

#[cfg(feature = "macros")]
pub use dynattr_macros::control_points;
