//! Parameter resolution
//!
//! Compilers turning filter, order, pagination and column inputs into the
//! parameter fragments a positional-parameter query backend understands.

pub mod aggregation;
pub mod condition;
pub mod ordering;
pub mod pagination;
pub mod params;


#[cfg(test)]
mod integration_tests;

pub use aggregation::{AggregateFunction, ColumnSpec};
pub use condition::{BindingTable, CompiledCondition, ConditionCompiler};
pub use ordering::{OrderCompiler, SortOrder};
pub use pagination::LimitSpec;
pub use params::QueryParams;

use crate::errors::ConditionError;
use crate::spec::{FilterSpec, OrderSpec};

/// Compile a filter spec with the default nesting limit
pub fn compile_where(
    spec: &FilterSpec,
    start_index: u32,
) -> Result<CompiledCondition, ConditionError> {
    ConditionCompiler::new().compile(spec, start_index)
}

/// Compile an order spec into ORDER BY terms
pub fn compile_order_by(spec: &OrderSpec) -> Result<String, ConditionError> {
    OrderCompiler::compile(spec)
}

/// Shape pagination parameters; `None` when `limit <= 0`
pub fn compile_limit(limit: i64, offset: i64) -> Option<LimitSpec> {
    LimitSpec::new(limit, offset)
}

pub fn compile_column(name: &str) -> ColumnSpec {
    ColumnSpec::new(name)
}
