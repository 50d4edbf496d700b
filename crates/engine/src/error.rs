use p8tokens_shared_kernel::BudgetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Directory walker thread panicked: {0}")]
    WalkerPanicked(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    #[error("Invalid budget: {0}")]
    Budget(#[from] BudgetError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(
        "Multiple files contain the following sections: {}. Only one of each is allowed.",
        .0.join(", ")
    )]
    SectionConflict(Vec<String>),

    #[error("No PICO-8 files selected")]
    NoSelection,
}

pub type Result<T> = std::result::Result<T, EngineError>;
