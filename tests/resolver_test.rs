//! Integration tests for the parameter resolver facade
//!
//! Exercises the public API the way a repository layer would: building
//! filter/order specs, resolving them and inspecting the merged parameters.

use bindquery::prelude::*;

#[test]
fn test_find_where_merges_all_parts() {
    let resolver = QueryParameter::new();

    let where_spec = FilterSpec::from_json(&json!({
        "test2": ["zero", "one", "two"],
        "test3": "three",
    }))
    .unwrap();
    let order_by = OrderSpec::from_json(&json!({ "f1": "ASC", "f2": "desc", "0": "f3" })).unwrap();

    let params = resolver.find_where(&where_spec, &order_by, 10, 5).unwrap();

    assert_eq!(
        params.to_json().unwrap(),
        json!({
            "conditions": "[test2] IN (?0, ?1, ?2) AND [test3] = ?3",
            "bind": { "0": "zero", "1": "one", "2": "two", "3": "three" },
            "order": "[f1] ASC, [f2] DESC, [f3] ASC",
            "limit": 10,
            "offset": 5,
        })
    );
}

#[test]
fn test_find_where_with_nothing_yields_empty_parameters() {
    let resolver = QueryParameter::new();
    let params = resolver
        .find_where(&FilterSpec::new(), &OrderSpec::new(), 0, 5)
        .unwrap();

    assert!(params.is_empty());
    assert_eq!(params.to_json().unwrap(), json!({}));
}

#[test]
fn test_find_by_single_field() {
    let resolver = QueryParameter::new();

    let params = resolver
        .find_by("email", "user@example.com", &OrderSpec::new().desc("created"), 0, 0)
        .unwrap();
    assert_eq!(params.conditions.as_deref(), Some("[email] = ?0"));
    assert_eq!(params.order.as_deref(), Some("[created] DESC"));
    assert_eq!(params.limit, None);

    let params = resolver
        .find_by("deleted_at", Value::Null, &OrderSpec::new(), 0, 0)
        .unwrap();
    assert_eq!(params.conditions.as_deref(), Some("[deleted_at] IS NULL"));
    assert!(params.bind.is_none());

    let params = resolver
        .find_by("id", json!([1, 2]), &OrderSpec::new(), 0, 0)
        .unwrap();
    assert_eq!(params.conditions.as_deref(), Some("[id] IN (?0, ?1)"));
}

#[test]
fn test_find_first_by_field_and_order() {
    let resolver = QueryParameter::new();

    let params = resolver
        .find_first_by("status", json!(["new", "open"]), &OrderSpec::new().desc("created"))
        .unwrap();
    assert_eq!(params.conditions.as_deref(), Some("[status] IN (?0, ?1)"));
    assert_eq!(params.order.as_deref(), Some("[created] DESC"));
    assert_eq!(params.limit, None);
    assert_eq!(params.offset, None);

    assert_eq!(
        resolver.find_first(3).unwrap(),
        resolver.find_first_by("id", 3, &OrderSpec::new()).unwrap()
    );
}

#[test]
fn test_find_by_rejects_non_scalar_values() {
    let resolver = QueryParameter::new();

    assert!(matches!(
        resolver.find_by("a", json!({ "x": 1 }), &OrderSpec::new(), 0, 0),
        Err(ConditionError::InvalidSpec(_))
    ));
    assert!(matches!(
        resolver.find_first_by("b", json!([[1, 2]]), &OrderSpec::new()),
        Err(ConditionError::InvalidSpec(_))
    ));
    assert!(matches!(
        resolver.find_first(json!({ "id": 1 })),
        Err(ConditionError::InvalidSpec(_))
    ));
}

#[test]
fn test_find_first_uses_configured_id_field() {
    let resolver = QueryParameter::new();
    let params = resolver.find_first(7).unwrap();
    assert_eq!(params.conditions.as_deref(), Some("[id] = ?0"));

    let resolver = QueryParameter::with_config(ResolverConfig::new(32, "uuid".to_string()));
    let params = resolver.find_first("a1b2").unwrap();
    assert_eq!(params.conditions.as_deref(), Some("[uuid] = ?0"));
    assert_eq!(params.bind.unwrap().get(&0), Some(&json!("a1b2")));
}

#[test]
fn test_aggregate_parameters() {
    let resolver = QueryParameter::new();
    let query = resolver
        .aggregate(
            AggregateFunction::Sum,
            "amount",
            &FilterSpec::new().with_operator(Operator::Gte).field("amount", 100),
        )
        .unwrap();

    assert_eq!(query.function, AggregateFunction::Sum);
    assert_eq!(
        serde_json::to_value(&query).unwrap(),
        json!({
            "function": "sum",
            "conditions": "[amount] >= ?0",
            "bind": { "0": 100 },
            "column": "amount",
        })
    );
}

#[test]
fn test_parameter_trait_object() {
    let resolver: Box<dyn Parameter> = Box::new(QueryParameter::new());

    let compiled = resolver
        .compile_where(&FilterSpec::new().field("a", 1), 4)
        .unwrap();
    assert_eq!(compiled.conditions, "[a] = ?4");
    assert_eq!(resolver.compile_order_by(&OrderSpec::new()).unwrap(), "");
    assert!(resolver.compile_limit(0, 5).is_none());
    assert_eq!(resolver.compile_column("testColumn").column, "testColumn");
}

#[test]
fn test_resolve_json_request() {
    let resolver = QueryParameter::new();
    let params = resolver
        .resolve_json(&json!({
            "where": {
                "id": ["a", "b"],
                "0": { "@type": "OR", "x": 1, "y": 2 },
            },
            "order": ["name"],
            "limit": 25,
            "column": "total",
        }))
        .unwrap();

    assert_eq!(
        params.conditions.as_deref(),
        Some("[id] IN (?0, ?1) AND ([x] = ?2 OR [y] = ?3)")
    );
    assert_eq!(params.order.as_deref(), Some("[name] ASC"));
    assert_eq!(params.limit, Some(25));
    assert_eq!(params.offset, Some(0));
    assert_eq!(params.column.as_deref(), Some("total"));
}

#[test]
fn test_resolve_json_rejects_bad_requests() {
    let resolver = QueryParameter::new();

    assert!(matches!(
        resolver.resolve_json(&json!(["not", "an", "object"])),
        Err(ConditionError::InvalidSpec(_))
    ));
    assert!(matches!(
        resolver.resolve_json(&json!({ "limit": "ten" })),
        Err(ConditionError::InvalidSpec(_))
    ));
    assert!(matches!(
        resolver.resolve_json(&json!({ "order": { "f": "SIDEWAYS" } })),
        Err(ConditionError::InvalidSortDirection(_))
    ));
    assert!(matches!(
        resolver.resolve_json(&json!({ "where": { "@operator": "BETWEEN", "id": [1] } })),
        Err(ConditionError::InvalidBetweenArity(1))
    ));
}

#[test]
fn test_configured_depth_limit() {
    let resolver = QueryParameter::with_config(ResolverConfig::new(2, "id".to_string()));

    let within = json!({ "where": { "0": { "0": { "a": 1 } } } });
    assert!(resolver.resolve_json(&within).is_ok());

    let beyond = json!({ "where": { "0": { "0": { "0": { "a": 1 } } } } });
    assert_eq!(
        resolver.resolve_json(&beyond).unwrap_err(),
        ConditionError::NestingTooDeep { max_depth: 2 }
    );
}

#[test]
fn test_resolver_from_config_file() {
    let path = std::env::temp_dir().join(format!("bindquery-test-{}.toml", std::process::id()));
    std::fs::write(&path, "[resolver]\nmax_nesting_depth = 1\nid_field = \"code\"\n").unwrap();

    let resolver = QueryParameter::from_config_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(resolver.config().max_nesting_depth, 1);
    assert_eq!(
        resolver.find_first("X1").unwrap().conditions.as_deref(),
        Some("[code] = ?0")
    );

    let nested = FilterSpec::new().group(FilterSpec::new().group(FilterSpec::new().field("a", 1)));
    assert!(matches!(
        resolver.compile_where(&nested, 0),
        Err(ConditionError::NestingTooDeep { max_depth: 1 })
    ));
}

#[test]
fn test_invalid_config_file_is_reported() {
    let err = QueryParameter::from_config_file("/nonexistent/bindquery.toml").unwrap_err();
    assert!(matches!(err, BindQueryError::Config(_)));
}
