//! Error types for parameter resolution
//!
//! Every failure is an input-validation failure detected before any
//! output is produced.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConditionError {
    #[error("Invalid configuration {key}: '{value}' must be one of: {allowed}")]
    InvalidConfig {
        key: &'static str,
        value: String,
        allowed: String,
    },

    #[error("Operator {operator} {reason}")]
    InvalidOperandForOperator {
        operator: &'static str,
        reason: &'static str,
    },

    #[error("Empty array value is not allowed in where condition (field '{0}')")]
    EmptyArrayValue(String),

    #[error("Value for BETWEEN operator must be an array with exactly two values, got {0}")]
    InvalidBetweenArity(usize),

    #[error("Sort direction must be one of ASC, DESC, got '{0}'")]
    InvalidSortDirection(String),

    #[error("Filter nesting exceeds the maximum depth of {max_depth}")]
    NestingTooDeep { max_depth: usize },

    #[error("Invalid specification: {0}")]
    InvalidSpec(String),
}
