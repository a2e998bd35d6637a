//! Filter and order specifications
//!
//! Typed forms of the loosely structured filter/order documents callers
//! hand to the resolver. Each entry is classified once, when a filter is
//! built or parsed.

pub mod filter_spec;
pub mod order_spec;
pub mod parsing;

pub use filter_spec::{FilterSpec, FilterValue, LevelConfig, SpecEntry};
pub use order_spec::{OrderEntry, OrderSpec};

/// Default maximum group nesting depth. The top level is depth 0.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Reserved key configuring the combinator of a level
pub const TYPE_KEY: &str = "@type";

/// Reserved key configuring the operator of a level
pub const OPERATOR_KEY: &str = "@operator";
