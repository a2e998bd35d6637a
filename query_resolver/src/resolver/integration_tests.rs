//! Resolver stress tests
//!
//! Large and deeply nested inputs, and compiles running in parallel.

#[cfg(test)]
mod integration_tests {
    use crate::resolver::{compile_order_by, compile_where, ConditionCompiler};
    use crate::spec::{FilterSpec, OrderSpec};
    use serde_json::{json, Value};
    use std::time::Instant;

    // ========================================
    // Performance Edge Cases
    // ========================================

    #[test]
    fn test_performance_many_conditions() {
        let start = Instant::now();

        let mut spec = FilterSpec::new();
        for i in 0..1000 {
            spec = spec.field(&format!("field_{}", i), i);
        }

        let compiled = compile_where(&spec, 0).unwrap();
        let duration = start.elapsed();

        assert!(duration.as_millis() < 100);
        assert_eq!(compiled.bind.len(), 1000);
        assert!(compiled.conditions.ends_with("[field_999] = ?999"));
    }

    #[test]
    fn test_performance_large_in_clause() {
        let start = Instant::now();

        let values: Vec<Value> = (0..1000).map(|i| json!(i)).collect();
        let spec = FilterSpec::new().values("id", values);

        let compiled = compile_where(&spec, 0).unwrap();
        let duration = start.elapsed();

        assert!(duration.as_millis() < 50);
        assert!(compiled.conditions.starts_with("[id] IN (?0, ?1, "));
        assert!(compiled.conditions.ends_with("?999)"));
        assert_eq!(compiled.bind.len(), 1000);
    }

    #[test]
    fn test_deep_nesting_alternating_combinators() {
        let mut spec = FilterSpec::new().field("base", "value");
        for i in 0..32 {
            let level = if i % 2 == 0 {
                FilterSpec::any()
            } else {
                FilterSpec::new()
            };
            spec = level.field(&format!("level_{}", i), i).group(spec);
        }

        let compiled = compile_where(&spec, 0).unwrap();

        // Outermost level binds first, the base field last
        assert!(compiled.conditions.starts_with("[level_31] = ?0 AND ([level_30] = ?1 OR"));
        assert_eq!(compiled.bind.len(), 33);
        assert_eq!(compiled.bind.get(&32), Some(&json!("value")));
    }

    #[test]
    fn test_raised_depth_limit() {
        let mut doc = json!({ "leaf": 1 });
        for _ in 0..100 {
            doc = json!([doc]);
        }

        assert!(FilterSpec::from_json(&doc).is_err());

        let spec = FilterSpec::from_json_with_depth(&doc, 100).unwrap();
        let compiled = ConditionCompiler::new()
            .with_max_depth(100)
            .compile(&spec, 0)
            .unwrap();
        assert_eq!(compiled.bind.len(), 1);
    }

    // ========================================
    // Concurrency
    // ========================================

    #[test]
    fn test_parallel_compiles_are_independent() {
        let spec = FilterSpec::from_json(&json!({
            "status": ["active", "pending"],
            "0": { "@type": "OR", "@operator": "LIKE", "name": "A%", "email": "%@example.com" },
        }))
        .unwrap();
        let order = OrderSpec::new().desc("created").field("id");

        let expected = compile_where(&spec, 0).unwrap();
        let (spec, order) = (&spec, &order);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(move || {
                        (0..100)
                            .map(|_| {
                                (
                                    compile_where(spec, 0).unwrap(),
                                    compile_order_by(order).unwrap(),
                                )
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            for handle in handles {
                for (compiled, order_sql) in handle.join().unwrap() {
                    assert_eq!(compiled, expected);
                    assert_eq!(order_sql, "[created] DESC, [id] ASC");
                }
            }
        });
    }
}
