//! Error type for attribute operations.

use crate::AttributeKind;
use thiserror::Error;

/// Errors returned by fallible attribute operations.
///
/// Evaluation never fails; only operations that combine two attributes can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// Parameters of one strategy were copied into an attribute of another.
    #[error("cannot copy {expected} attribute into {found} attribute")]
    KindMismatch {
        expected: AttributeKind,
        found: AttributeKind,
    },
}
