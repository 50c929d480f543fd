use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DieViewError {
    #[error("die value {0} is outside 1..=6")]
    OutOfRangeValue(u8),

    #[error("die size must be positive, got {0}")]
    InvalidDimension(f32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized color: {0:?}")]
pub struct ParseColorError(pub String);
