//! Convenience re-exports for common query-resolver usage

// Specifications
pub use crate::spec::{FilterSpec, FilterValue, OrderSpec};

// Vocabulary
pub use crate::vocabulary::{Combinator, Operator};

// Compilers and their outputs
pub use crate::resolver::{
    compile_column, compile_limit, compile_order_by, compile_where, AggregateFunction,
    CompiledCondition, ConditionCompiler, QueryParams,
};

// Error types
pub use crate::errors::ConditionError;

// Common external dependencies that are frequently used
pub use serde_json::{json, Value};
