use serde_json::{Map, Value, json};

/// Wrap a plain JSON value in Firestore's typed value envelope
pub fn encode(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => match n.as_i64() {
            // integers travel as strings
            Some(i) => json!({ "integerValue": i.to_string() }),
            None => json!({ "doubleValue": n.as_f64() }),
        },
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => json!({
            "arrayValue": { "values": items.iter().map(encode).collect::<Vec<_>>() }
        }),
        Value::Object(map) => json!({ "mapValue": { "fields": encode_fields(map) } }),
    }
}

pub fn encode_fields(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (key.clone(), encode(value)))
        .collect()
}

/// Document body for a plain JSON object
pub fn document(value: &Value) -> Value {
    match value {
        Value::Object(map) => json!({ "fields": encode_fields(map) }),
        other => json!({ "fields": { "value": encode(other) } }),
    }
}

/// Read a string field out of a Firestore document
pub fn string_field<'a>(document: &'a Value, field: &str) -> Option<&'a str> {
    document["fields"][field]["stringValue"].as_str()
}
