//! Core bindquery functionality
//!
//! This module contains the resolver contract and its default implementation,
//! which combines condition, order, pagination and column compilation into the
//! parameter sets a query-execution layer consumes.

use config::{AppConfig, ResolverConfig};
use query_resolver::{
    AggregateFunction, ColumnSpec, CompiledCondition, ConditionCompiler, ConditionError,
    FilterSpec, LimitSpec, OrderCompiler, OrderSpec, QueryParams,
};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::errors::BindQueryError;

/// Resolves repository-level arguments into query parameters
pub trait Parameter {
    /// Compile a filter spec, numbering placeholders from `start_index`
    fn compile_where(
        &self,
        spec: &FilterSpec,
        start_index: u32,
    ) -> Result<CompiledCondition, ConditionError>;

    /// Compile an order spec into ORDER BY terms
    fn compile_order_by(&self, spec: &OrderSpec) -> Result<String, ConditionError>;

    /// Shape pagination; `None` disables it
    fn compile_limit(&self, limit: i64, offset: i64) -> Option<LimitSpec>;

    /// Select the column an aggregation targets
    fn compile_column(&self, column_name: &str) -> ColumnSpec;
}

/// Aggregation request: which function, over which parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateQuery {
    pub function: AggregateFunction,
    #[serde(flatten)]
    pub params: QueryParams,
}

/// Default resolver, configured by [`ResolverConfig`]
#[derive(Debug, Clone)]
pub struct QueryParameter {
    config: ResolverConfig,
    compiler: ConditionCompiler,
}

impl Default for QueryParameter {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryParameter {
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        let compiler = ConditionCompiler::new().with_max_depth(config.max_nesting_depth);
        Self { config, compiler }
    }

    /// Create a resolver from the configuration found via [`AppConfig::load`]
    pub fn load() -> Result<Self, BindQueryError> {
        let app_config = AppConfig::load()?;
        crate::debug_log!("Loaded resolver config: {:?}", app_config.resolver);
        Ok(Self::with_config(app_config.resolver))
    }

    /// Create a resolver from a TOML configuration file
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self, BindQueryError> {
        let app_config = AppConfig::from_file(path)?;
        Ok(Self::with_config(app_config.resolver))
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Parameters for querying every record matching `where_spec`
    pub fn find_where(
        &self,
        where_spec: &FilterSpec,
        order_by: &OrderSpec,
        limit: i64,
        offset: i64,
    ) -> Result<QueryParams, ConditionError> {
        Ok(QueryParams::new()
            .with_condition(self.compile_where(where_spec, 0)?)
            .with_order(self.compile_order_by(order_by)?)
            .with_limit(self.compile_limit(limit, offset)))
    }

    /// Parameters for querying the first record matching `where_spec`
    pub fn find_first_where(
        &self,
        where_spec: &FilterSpec,
        order_by: &OrderSpec,
    ) -> Result<QueryParams, ConditionError> {
        self.find_where(where_spec, order_by, 0, 0)
    }

    /// Parameters for querying records whose `field` equals `value`.
    /// A list value matches any of its elements; null matches IS NULL.
    pub fn find_by(
        &self,
        field: &str,
        value: impl Into<Value>,
        order_by: &OrderSpec,
        limit: i64,
        offset: i64,
    ) -> Result<QueryParams, ConditionError> {
        let where_spec = FilterSpec::new().field(field, value);
        self.find_where(&where_spec, order_by, limit, offset)
    }

    /// Parameters for querying the first record whose `field` equals `value`
    pub fn find_first_by(
        &self,
        field: &str,
        value: impl Into<Value>,
        order_by: &OrderSpec,
    ) -> Result<QueryParams, ConditionError> {
        let where_spec = FilterSpec::new().field(field, value);
        self.find_first_where(&where_spec, order_by)
    }

    /// Parameters for querying a record by its id field
    pub fn find_first(&self, id: impl Into<Value>) -> Result<QueryParams, ConditionError> {
        self.find_first_by(&self.config.id_field, id, &OrderSpec::new())
    }

    /// Parameters for a count/sum/average/minimum/maximum over `column`
    pub fn aggregate(
        &self,
        function: AggregateFunction,
        column: &str,
        where_spec: &FilterSpec,
    ) -> Result<AggregateQuery, ConditionError> {
        let params = QueryParams::new()
            .with_condition(self.compile_where(where_spec, 0)?)
            .with_column(self.compile_column(column));

        Ok(AggregateQuery { function, params })
    }

    /// Resolve a JSON request with optional `where`, `order`, `limit`,
    /// `offset` and `column` keys
    pub fn resolve_json(&self, request: &Value) -> Result<QueryParams, ConditionError> {
        let request = request.as_object().ok_or_else(|| {
            ConditionError::InvalidSpec("request must be a JSON object".to_string())
        })?;

        let where_spec = match request.get("where") {
            Some(doc) => FilterSpec::from_json_with_depth(doc, self.config.max_nesting_depth)?,
            None => FilterSpec::new(),
        };
        let order_by = match request.get("order") {
            Some(doc) => OrderSpec::from_json(doc)?,
            None => OrderSpec::new(),
        };
        let limit = integer_field(request.get("limit"), "limit")?;
        let offset = integer_field(request.get("offset"), "offset")?;

        let mut params = self.find_where(&where_spec, &order_by, limit, offset)?;
        if let Some(column) = request.get("column") {
            let column = column.as_str().ok_or_else(|| {
                ConditionError::InvalidSpec("column must be a string".to_string())
            })?;
            params = params.with_column(self.compile_column(column));
        }

        crate::trace_log!("Resolved request: {:?}", params);
        Ok(params)
    }
}

impl Parameter for QueryParameter {
    fn compile_where(
        &self,
        spec: &FilterSpec,
        start_index: u32,
    ) -> Result<CompiledCondition, ConditionError> {
        self.compiler.compile(spec, start_index)
    }

    fn compile_order_by(&self, spec: &OrderSpec) -> Result<String, ConditionError> {
        OrderCompiler::compile(spec)
    }

    fn compile_limit(&self, limit: i64, offset: i64) -> Option<LimitSpec> {
        query_resolver::compile_limit(limit, offset)
    }

    fn compile_column(&self, column_name: &str) -> ColumnSpec {
        query_resolver::compile_column(column_name)
    }
}

fn integer_field(value: Option<&Value>, name: &str) -> Result<i64, ConditionError> {
    match value {
        None | Some(Value::Null) => Ok(0),
        Some(value) => value.as_i64().ok_or_else(|| {
            ConditionError::InvalidSpec(format!("{} must be an integer", name))
        }),
    }
}
