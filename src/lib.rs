//! # bindquery
//!
//! Compiles declarative, nested filter and order specifications into the
//! condition text, bound values, ORDER BY terms and pagination parameters a
//! positional-parameter query backend consumes.
//!
//! ## Quick Start
//!
//! ```rust
//! use bindquery::prelude::*;
//!
//! fn main() -> Result<(), BindQueryError> {
//!     let resolver = QueryParameter::new();
//!
//!     let where_spec = FilterSpec::from_json(&json!({
//!         "status": ["active", "pending"],
//!         "0": { "@type": "OR", "@operator": "LIKE", "name": "Timo%", "email": "%@example.com" },
//!     }))?;
//!     let order_by = OrderSpec::from_json(&json!({ "created": "desc", "0": "id" }))?;
//!
//!     let params = resolver.find_where(&where_spec, &order_by, 10, 20)?;
//!
//!     assert_eq!(
//!         params.conditions.as_deref(),
//!         Some("[status] IN (?0, ?1) AND ([name] LIKE ?2 OR [email] LIKE ?3)")
//!     );
//!     assert_eq!(params.order.as_deref(), Some("[created] DESC, [id] ASC"));
//!     assert_eq!(params.limit, Some(10));
//!
//!     Ok(())
//! }
//! ```

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

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::{AggregateQuery, Parameter, QueryParameter};
pub use errors::BindQueryError;

// Re-export centralized config
pub use config::{AppConfig, ResolverConfig};

// Re-export internal crates
pub use config;
pub use query_resolver;
