//! LIMIT/OFFSET shaping

use serde::Serialize;

/// Pagination window handed to the query collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LimitSpec {
    pub limit: i64,
    pub offset: i64,
}

impl LimitSpec {
    /// Build a window. A limit of zero or less disables pagination.
    /// Values are passed through unchanged otherwise.
    pub fn new(limit: i64, offset: i64) -> Option<Self> {
        if limit <= 0 {
            return None;
        }

        Some(Self { limit, offset })
    }

    pub fn to_sql(&self) -> String {
        format!("LIMIT {} OFFSET {}", self.limit, self.offset)
    }
}
