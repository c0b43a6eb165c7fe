//! Errors for the few reflection operations that can fail at runtime.
//!
//! Structural mistakes (too many members, an index past the last member, a fold closure with the wrong accumulator
//! type, an uncomparable member in a diff) are compile errors and never reach this type. What remains is resolving a
//! hand-built member pointer and slicing rendered type names.

use thiserror::Error;

/// Errors produced by runtime reflection lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflectionError {
    #[error("`{member}` is not a member of `{class}`")]
    MemberNotFound {
        class: &'static str,
        member: &'static str,
    },

    #[error("calibration fixture `{fixture}` not found in renderer output `{rendered}`")]
    CalibrationFailed {
        renderer: &'static str,
        fixture: &'static str,
        rendered: &'static str,
    },

    #[error("renderer output `{rendered}` does not carry the calibrated anchors")]
    UnrecognizedSignature { rendered: &'static str },

    #[error("type `{rendered}` collides with the calibration fixture `{fixture}`")]
    AnchorCollision {
        rendered: &'static str,
        fixture: &'static str,
    },
}
