use lift_core::{Floor, Tick};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrafficError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("row at {tick}: call starts and ends at {floor}")]
    SameFloorCall { tick: Tick, floor: Floor },

    #[error("traffic configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TrafficResult<T> = Result<T, TrafficError>;
