use std::io;

use thiserror::Error;

/// Failures surfaced by the feature tour.
#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("runtime error: {0}")]
    Runtime(#[from] io::Error),

    #[error("failed to build worker pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),

    #[error("fibonacci is undefined for negative input {0}")]
    NegativeFibonacci(i64),

    #[error("fibonacci({0}) does not fit in 128 bits")]
    FibonacciOverflow(u64),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ShowcaseError {
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
