use serde_json::Value;

/// Print just the computed value.
pub fn print_minimal(value: &Value) {
    let computed = value
        .get("result")
        .and_then(|r| r.get("computed_value"))
        .unwrap_or(value);

    match computed {
        Value::String(s) => println!("{}", s),
        other => println!("{}", other),
    }
}
