//! # Resolve Request Example
//!
//! Reads a JSON request from the file given as the first argument (or a
//! built-in sample) and prints the resolved query parameters:
//!
//! ```json
//! {
//!   "where": { "status": ["active", "pending"], "0": { "@type": "OR", "age": 30 } },
//!   "order": { "created": "desc", "0": "id" },
//!   "limit": 10,
//!   "offset": 20
//! }
//! ```
//!
//! Run with `cargo run --example resolve_request -- request.json`.

use anyhow::Context;
use bindquery::prelude::*;

fn sample_request() -> Value {
    json!({
        "where": {
            "deleted_at": null,
            "status": ["active", "pending"],
            "0": {
                "@type": "OR",
                "@operator": "LIKE",
                "name": "Timo%",
                "email": "%@example.com",
            },
            "1": { "@operator": "BETWEEN", "created": ["2019-01-01", "2019-01-31"] },
        },
        "order": { "created": "desc", "0": "id" },
        "limit": 10,
        "offset": 20,
    })
}

fn main() -> anyhow::Result<()> {
    println!("🔎 bindquery Resolve Request Example");
    println!("====================================");

    let request = match std::env::args().nth(1) {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read request file {}", path))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Request file {} is not valid JSON", path))?
        }
        None => sample_request(),
    };

    let resolver = match QueryParameter::load() {
        Ok(resolver) => resolver,
        Err(err) => {
            println!("⚠️  No usable config ({}), using defaults", err);
            QueryParameter::new()
        }
    };
    println!("\n⚙️  Max nesting depth: {}", resolver.config().max_nesting_depth);

    println!("\n📥 Request:");
    println!("{}", serde_json::to_string_pretty(&request)?);

    let params = resolver
        .resolve_json(&request)
        .context("Failed to resolve request")?;

    println!("\n📤 Parameters:");
    println!("{}", serde_json::to_string_pretty(&params.to_json()?)?);

    let aggregate = resolver.aggregate(
        AggregateFunction::Count,
        "id",
        &FilterSpec::new().field("status", "active"),
    )?;
    println!(
        "\n🧮 {}({}) WHERE {}",
        aggregate.function.to_sql(),
        aggregate.params.column.as_deref().unwrap_or("*"),
        aggregate.params.conditions.as_deref().unwrap_or("TRUE"),
    );

    Ok(())
}
