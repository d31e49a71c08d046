use alloc::string::String;

use thiserror::Error;

/// Failure of an explicit whole-content numeric read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error("empty field")]
    Empty,
    #[error("invalid integer literal {0:?}")]
    Integer(String),
    #[error("invalid real literal {0:?}")]
    Real(String),
}
