//! Parsing of JSON filter and order documents
//!
//! Objects must be deserialized with insertion order preserved, since entry
//! order decides the order of the compiled text.

use crate::errors::ConditionError;
use crate::spec::filter_spec::kind_of;
use crate::spec::{
    FilterSpec, FilterValue, OrderEntry, OrderSpec, SpecEntry, DEFAULT_MAX_DEPTH, OPERATOR_KEY,
    TYPE_KEY,
};
use crate::vocabulary::{validate_combinator, validate_operator};
use serde_json::{Map, Value};

impl FilterSpec {
    /// Parse a filter document using the default nesting limit
    pub fn from_json(value: &Value) -> Result<Self, ConditionError> {
        Self::from_json_with_depth(value, DEFAULT_MAX_DEPTH)
    }

    /// Parse a filter document, rejecting groups nested deeper than `max_depth`
    pub fn from_json_with_depth(value: &Value, max_depth: usize) -> Result<Self, ConditionError> {
        parse_level(value, 0, max_depth)
    }
}

impl OrderSpec {
    /// Parse an order document.
    ///
    /// Accepts an object mapping fields to directions, where digit-only keys
    /// carry the field name as their value, or an array of field names.
    pub fn from_json(value: &Value) -> Result<Self, ConditionError> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Array(fields) => fields
                .iter()
                .map(|field| order_string(field, "order field"))
                .collect::<Result<Vec<_>, _>>()
                .map(|fields| fields.into_iter().collect()),
            Value::Object(map) => {
                let mut spec = Self::new();
                for (key, entry) in map {
                    if is_positional(key) {
                        spec.entries
                            .push(OrderEntry::Positional(order_string(entry, "order field")?));
                    } else {
                        spec.entries.push(OrderEntry::Named {
                            field: key.clone(),
                            direction: order_string(entry, "sort direction")?,
                        });
                    }
                }
                Ok(spec)
            }
            other => Err(ConditionError::InvalidSpec(format!(
                "order specification must be an object or an array, got {}",
                kind_of(other)
            ))),
        }
    }
}

fn parse_level(value: &Value, depth: usize, max_depth: usize) -> Result<FilterSpec, ConditionError> {
    if depth > max_depth {
        return Err(ConditionError::NestingTooDeep { max_depth });
    }

    match value {
        Value::Null => Ok(FilterSpec::new()),
        Value::Object(map) => parse_object(map, depth, max_depth),
        // A bare list of filter objects is a level of positional groups
        Value::Array(groups) => {
            let mut spec = FilterSpec::new();
            for group in groups {
                if !group.is_object() {
                    return Err(ConditionError::InvalidSpec(format!(
                        "positional filter entry must be an object, got {}",
                        kind_of(group)
                    )));
                }
                spec.entries
                    .push(SpecEntry::Group(parse_level(group, depth + 1, max_depth)?));
            }
            Ok(spec)
        }
        other => Err(ConditionError::InvalidSpec(format!(
            "filter specification must be an object, got {}",
            kind_of(other)
        ))),
    }
}

fn parse_object(
    map: &Map<String, Value>,
    depth: usize,
    max_depth: usize,
) -> Result<FilterSpec, ConditionError> {
    let mut spec = FilterSpec::new();

    for (key, entry) in map {
        match key.as_str() {
            TYPE_KEY => spec.config.combinator = validate_combinator(&config_token(entry))?,
            OPERATOR_KEY => spec.config.operator = validate_operator(&config_token(entry))?,
            _ => spec.entries.push(parse_entry(key, entry, depth, max_depth)?),
        }
    }

    Ok(spec)
}

fn parse_entry(
    key: &str,
    entry: &Value,
    depth: usize,
    max_depth: usize,
) -> Result<SpecEntry, ConditionError> {
    match entry {
        // Any nested object is a group, whatever its key
        Value::Object(_) => Ok(SpecEntry::Group(parse_level(entry, depth + 1, max_depth)?)),
        _ if is_positional(key) => Err(ConditionError::InvalidSpec(format!(
            "positional filter entry '{}' must be an object, got {}",
            key,
            kind_of(entry)
        ))),
        _ => {
            let value = FilterValue::from_value(entry.clone());
            value.validate(key)?;
            Ok(SpecEntry::Field(key.to_string(), value))
        }
    }
}

/// Non-string tokens are validated in their JSON form, so they always fail
fn config_token(value: &Value) -> String {
    value
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

fn order_string(value: &Value, what: &str) -> Result<String, ConditionError> {
    value.as_str().map(str::to_string).ok_or_else(|| {
        ConditionError::InvalidSpec(format!("{} must be a string, got {}", what, kind_of(value)))
    })
}

/// Digit-only keys stand for unnamed entries
fn is_positional(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}
