use lift_core::{Floor, Tick};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("call at {tick}: floor {floor} outside building range [F1, {top}]")]
    CallOutOfRange { tick: Tick, floor: Floor, top: Floor },

    #[error("call at {tick}: starts and ends at {floor}")]
    SameFloorCall { tick: Tick, floor: Floor },
}

pub type SimResult<T> = Result<T, SimError>;
