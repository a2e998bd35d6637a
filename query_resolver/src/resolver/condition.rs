//! Condition compilation
//!
//! Turns a [`FilterSpec`] into a condition string with `?N` placeholders and
//! the table of values bound to them.

use crate::errors::ConditionError;
use crate::spec::{FilterSpec, FilterValue, LevelConfig, SpecEntry, DEFAULT_MAX_DEPTH};
use crate::vocabulary::Operator;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Bound values keyed by placeholder index
pub type BindingTable = BTreeMap<u32, Value>;

/// Compiled WHERE condition and its bindings
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CompiledCondition {
    pub conditions: String,
    pub bind: BindingTable,
}

impl CompiledCondition {
    /// True when nothing was compiled, e.g. for an empty spec
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// Compiles filter specs. Holds no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct ConditionCompiler {
    max_depth: usize,
}

impl Default for ConditionCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl ConditionCompiler {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limit how deep groups may be nested. The top level is depth 0.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Compile `spec`, numbering placeholders from `start_index`
    pub fn compile(
        &self,
        spec: &FilterSpec,
        start_index: u32,
    ) -> Result<CompiledCondition, ConditionError> {
        let mut cursor = start_index;
        self.compile_with_cursor(spec, &mut cursor)
    }

    /// Compile `spec`, numbering placeholders from `*cursor`.
    ///
    /// On success the cursor is left at the next free index; on failure it is
    /// untouched.
    pub fn compile_with_cursor(
        &self,
        spec: &FilterSpec,
        cursor: &mut u32,
    ) -> Result<CompiledCondition, ConditionError> {
        let mut next_index = *cursor;
        let mut bind = BindingTable::new();

        let conditions = match self.build_level_sql(spec, 0, &mut next_index, &mut bind) {
            Ok(conditions) => conditions,
            Err(err) => {
                crate::debug_log!("[WHERE] compile failed: {}", err);
                return Err(err);
            }
        };

        crate::trace_log!("[WHERE] {} ({} bound values)", conditions, bind.len());

        *cursor = next_index;
        Ok(CompiledCondition { conditions, bind })
    }

    fn build_level_sql(
        &self,
        spec: &FilterSpec,
        depth: usize,
        cursor: &mut u32,
        bind: &mut BindingTable,
    ) -> Result<String, ConditionError> {
        if depth > self.max_depth {
            return Err(ConditionError::NestingTooDeep {
                max_depth: self.max_depth,
            });
        }

        if spec.is_empty() {
            return Ok(String::new());
        }

        let LevelConfig {
            combinator,
            operator,
        } = spec.config;

        let mut fragments = Vec::with_capacity(spec.len());
        for entry in &spec.entries {
            match entry {
                SpecEntry::Field(field, value) => {
                    fragments.push(Self::build_field_sql(field, value, operator, cursor, bind)?);
                }
                SpecEntry::Group(group) => {
                    let nested = self.build_level_sql(group, depth + 1, cursor, bind)?;
                    if !nested.is_empty() {
                        fragments.push(format!("({})", nested));
                    }
                }
            }
        }

        Ok(fragments.join(&format!(" {} ", combinator.to_sql())))
    }

    fn build_field_sql(
        field: &str,
        value: &FilterValue,
        operator: Operator,
        cursor: &mut u32,
        bind: &mut BindingTable,
    ) -> Result<String, ConditionError> {
        value.validate(field)?;
        match value {
            FilterValue::Null => Ok(format!("[{}] IS NULL", field)),
            FilterValue::Scalar(value) => {
                operator.check_scalar()?;
                let param = Self::bind_value(value, cursor, bind)?;
                Ok(format!("[{}] {} {}", field, operator.to_sql(), param))
            }
            FilterValue::List(values) => {
                if values.is_empty() {
                    return Err(ConditionError::EmptyArrayValue(field.to_string()));
                }
                operator.check_list(values.len())?;

                let placeholders = values
                    .iter()
                    .map(|value| Self::bind_value(value, cursor, bind))
                    .collect::<Result<Vec<_>, _>>()?;

                match operator {
                    Operator::Between => Ok(format!(
                        "[{}] BETWEEN {} AND {}",
                        field, placeholders[0], placeholders[1]
                    )),
                    Operator::Ne => Ok(format!("[{}] NOT IN ({})", field, placeholders.join(", "))),
                    _ => Ok(format!("[{}] IN ({})", field, placeholders.join(", "))),
                }
            }
        }
    }

    fn bind_value(
        value: &Value,
        cursor: &mut u32,
        bind: &mut BindingTable,
    ) -> Result<String, ConditionError> {
        let index = *cursor;
        *cursor = index
            .checked_add(1)
            .ok_or_else(|| ConditionError::InvalidSpec("binding index overflow".to_string()))?;
        bind.insert(index, value.clone());
        Ok(format!("?{}", index))
    }
}
