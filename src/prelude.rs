//! Convenience re-exports for common bindquery usage
//!
//! # Example
//!
//! ```rust
//! use bindquery::prelude::*;
//!
//! let resolver = QueryParameter::new();
//! let params = resolver
//!     .find_by("email", "user@example.com", &OrderSpec::new(), 0, 0)
//!     .unwrap();
//! assert_eq!(params.conditions.as_deref(), Some("[email] = ?0"));
//! ```

// Core bindquery components
pub use crate::core::{AggregateQuery, Parameter, QueryParameter};
pub use crate::errors::BindQueryError;

// Re-export centralized config
pub use config::{AppConfig, ResolverConfig};

// Re-export commonly used resolver types
pub use query_resolver::prelude::*;
pub use query_resolver::{ColumnSpec, LimitSpec};
