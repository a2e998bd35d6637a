//! Query Resolver - filter and order compilation for positional-parameter backends
//!
//! This crate turns nested filter specifications into condition strings with
//! `?N` placeholders plus their bound values, and order specifications into
//! ORDER BY terms. It never touches a database.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod prelude;
pub mod resolver;
pub mod spec;
pub mod vocabulary;

pub use errors::ConditionError;
pub use resolver::{
    compile_column, compile_limit, compile_order_by, compile_where, AggregateFunction,
    BindingTable, ColumnSpec, CompiledCondition, ConditionCompiler, LimitSpec, OrderCompiler,
    QueryParams, SortOrder,
};
pub use spec::{FilterSpec, FilterValue, LevelConfig, OrderEntry, OrderSpec, SpecEntry};
pub use vocabulary::{validate_combinator, validate_operator, Combinator, Operator};
