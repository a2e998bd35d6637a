//! Filter specification types

use crate::errors::ConditionError;
use crate::vocabulary::{Combinator, Operator};
use serde_json::Value;

/// Value a field entry is compared against
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Compiles to IS NULL
    Null,
    Scalar(Value),
    /// Operand of IN, NOT IN and BETWEEN
    List(Vec<Value>),
}

impl FilterValue {
    /// Classify a raw value. Null becomes IS NULL, arrays become list operands.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => FilterValue::Null,
            Value::Array(values) => FilterValue::List(values),
            other => FilterValue::Scalar(other),
        }
    }

    /// Reject object scalars and lists holding arrays or objects
    pub fn validate(&self, field: &str) -> Result<(), ConditionError> {
        match self {
            FilterValue::Null => Ok(()),
            FilterValue::Scalar(value) if value.is_array() || value.is_object() => {
                Err(ConditionError::InvalidSpec(format!(
                    "value of field '{}' must be null, a scalar or a list of scalars, got {}",
                    field,
                    kind_of(value)
                )))
            }
            FilterValue::Scalar(_) => Ok(()),
            FilterValue::List(values) => match values.iter().find(|v| v.is_array() || v.is_object()) {
                Some(nested) => Err(ConditionError::InvalidSpec(format!(
                    "list value of field '{}' may only hold scalars, got {}",
                    field,
                    kind_of(nested)
                ))),
                None => Ok(()),
            },
        }
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// How the field entries of one level are compared and joined.
/// Never inherited by nested groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelConfig {
    pub combinator: Combinator,
    pub operator: Operator,
}

/// Single entry of a filter level
#[derive(Debug, Clone, PartialEq)]
pub enum SpecEntry {
    Field(String, FilterValue),
    Group(FilterSpec),
}

/// Nested, order-preserving description of a boolean filter tree
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    pub config: LevelConfig,
    pub entries: Vec<SpecEntry>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an OR level
    pub fn any() -> Self {
        Self::new().with_combinator(Combinator::Or)
    }

    /// Set the `@type` of this level
    pub fn with_combinator(mut self, combinator: Combinator) -> Self {
        self.config.combinator = combinator;
        self
    }

    /// Set the `@operator` of this level
    pub fn with_operator(mut self, operator: Operator) -> Self {
        self.config.operator = operator;
        self
    }

    /// Add a field entry. Null becomes IS NULL, arrays become list operands.
    /// Objects and nested lists are kept as given and fail at compile time.
    pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        let value = FilterValue::from_value(value.into());
        self.entries.push(SpecEntry::Field(name.to_string(), value));
        self
    }

    /// Add an IS NULL entry
    pub fn is_null(mut self, name: &str) -> Self {
        self.entries
            .push(SpecEntry::Field(name.to_string(), FilterValue::Null));
        self
    }

    /// Add a list entry
    pub fn values(mut self, name: &str, values: Vec<Value>) -> Self {
        self.entries
            .push(SpecEntry::Field(name.to_string(), FilterValue::List(values)));
        self
    }

    /// Add a nested group
    pub fn group(mut self, group: FilterSpec) -> Self {
        self.entries.push(SpecEntry::Group(group));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Deepest group nesting below this level, 0 when there are no groups
    pub fn depth(&self) -> usize {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                SpecEntry::Group(group) => Some(group.depth() + 1),
                SpecEntry::Field(..) => None,
            })
            .max()
            .unwrap_or(0)
    }
}
