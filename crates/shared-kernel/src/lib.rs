// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{BudgetError, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::{
    AggregateReport, Budget, DEFAULT_TOKEN_LIMIT, FileCount, FileName, TokenCount,
};
