//! Merged query parameters
//!
//! Each compiler owns a disjoint set of keys, so merging never collides.

use crate::resolver::aggregation::ColumnSpec;
use crate::resolver::condition::{BindingTable, CompiledCondition};
use crate::resolver::pagination::LimitSpec;
use serde::Serialize;
use serde_json::Value;

/// Parameter object handed to the query-execution collaborator.
/// Absent parts are omitted when serialized.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct QueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind: Option<BindingTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `conditions` and `bind`, unless the condition is empty
    pub fn with_condition(mut self, condition: CompiledCondition) -> Self {
        if !condition.is_empty() {
            self.conditions = Some(condition.conditions);
            self.bind = Some(condition.bind);
        }
        self
    }

    /// Set `order`, unless it is empty
    pub fn with_order(mut self, order: String) -> Self {
        if !order.is_empty() {
            self.order = Some(order);
        }
        self
    }

    /// Set `limit` and `offset` when pagination is enabled
    pub fn with_limit(mut self, limit: Option<LimitSpec>) -> Self {
        if let Some(spec) = limit {
            self.limit = Some(spec.limit);
            self.offset = Some(spec.offset);
        }
        self
    }

    pub fn with_column(mut self, column: ColumnSpec) -> Self {
        self.column = Some(column.column);
        self
    }

    /// Merge two parameter sets key by key; keys already set here win
    pub fn merge(self, other: QueryParams) -> Self {
        Self {
            conditions: self.conditions.or(other.conditions),
            bind: self.bind.or(other.bind),
            order: self.order.or(other.order),
            limit: self.limit.or(other.limit),
            offset: self.offset.or(other.offset),
            column: self.column.or(other.column),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Render as a JSON object, e.g. for logging or a JSON-speaking collaborator
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
