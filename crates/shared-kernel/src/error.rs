// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Errors raised while constructing value objects.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    #[error("Token budget must be greater than zero")]
    Zero,

    #[error("Token budget {limit} exceeds the supported maximum {max}")]
    TooLarge { limit: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, BudgetError>;
