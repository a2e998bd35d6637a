//! Error types for the bindquery crate
//!
//! This module contains all error types that can be returned by bindquery operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BindQueryError {
    #[error("Condition error: {0}")]
    Condition(#[from] query_resolver::ConditionError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
