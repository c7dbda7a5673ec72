//! Framework error type.
//!
//! The dispatch core itself has no recoverable-error taxonomy — capacity
//! full, empty destinations, and boundary floors are all normal control flow.
//! These variants exist for the collaborator boundaries (traffic loading and
//! sim construction), which validate call floors before they reach the core.

use thiserror::Error;

use crate::Floor;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("floor {floor} outside building range [F1, {top}]")]
    FloorOutOfRange { floor: Floor, top: Floor },

    #[error("call starts and ends at {0}")]
    SameFloorCall(Floor),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
