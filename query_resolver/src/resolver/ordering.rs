//! ORDER BY compilation

use crate::errors::ConditionError;
use crate::spec::{OrderEntry, OrderSpec};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// Parse a direction token, ignoring case
    pub fn parse(direction: &str) -> Result<Self, ConditionError> {
        if direction.eq_ignore_ascii_case("ASC") {
            Ok(SortOrder::Asc)
        } else if direction.eq_ignore_ascii_case("DESC") {
            Ok(SortOrder::Desc)
        } else {
            Err(ConditionError::InvalidSortDirection(direction.to_string()))
        }
    }
}

pub struct OrderCompiler;

impl OrderCompiler {
    /// Build the ORDER BY terms, without the keyword. Empty for an empty spec.
    pub fn compile(spec: &OrderSpec) -> Result<String, ConditionError> {
        if spec.is_empty() {
            return Ok(String::new());
        }

        let order_items = spec
            .entries
            .iter()
            .map(|entry| match entry {
                OrderEntry::Positional(field) => {
                    Ok(format!("[{}] {}", field, SortOrder::Asc.to_sql()))
                }
                OrderEntry::Named { field, direction } => {
                    let order = SortOrder::parse(direction)?;
                    Ok(format!("[{}] {}", field, order.to_sql()))
                }
            })
            .collect::<Result<Vec<_>, ConditionError>>()?;

        let order = order_items.join(", ");
        crate::trace_log!("[ORDER] {}", order);
        Ok(order)
    }
}
