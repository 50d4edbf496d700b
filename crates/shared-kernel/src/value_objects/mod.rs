// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod file_count;
pub mod report;

pub use counts::TokenCount;
pub use file_count::{FileCount, FileName};
pub use report::{AggregateReport, Budget, DEFAULT_TOKEN_LIMIT};
