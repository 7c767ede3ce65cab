//! Factory functions for backend rows.
//!
//! Rows are built as raw JSON so tests can also describe shapes the typed models would never
//! produce, such as object-shaped joins or dangling manufacturer references.

use serde_json::{json, Value};

/// Create a make row as returned by the backend
pub fn mock_make(id: i64, name: &str, abrv: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "abrv": abrv,
    })
}

/// Create a model row as selected without its manufacturer
pub fn mock_model_row(id: i64, make_id: i64, name: &str, abrv: &str) -> Value {
    json!({
        "id": id,
        "make_id": make_id,
        "name": name,
        "abrv": abrv,
    })
}

/// Create a model row with its manufacturer embedded as a one-element array
///
/// # Arguments
/// - `make_name` - Manufacturer name, `None` embeds an empty array like a dangling reference
pub fn mock_model(id: i64, make_id: i64, name: &str, abrv: &str, make_name: Option<&str>) -> Value {
    let join = match make_name {
        Some(make_name) => json!([{ "name": make_name }]),
        None => json!([]),
    };

    with_join(mock_model_row(id, make_id, name, abrv), join)
}

/// Create a model row with its manufacturer embedded as a single object
///
/// # Arguments
/// - `make_name` - Manufacturer name, `None` embeds `null` like a dangling reference
pub fn mock_model_object_join(
    id: i64,
    make_id: i64,
    name: &str,
    abrv: &str,
    make_name: Option<&str>,
) -> Value {
    let join = match make_name {
        Some(make_name) => json!({ "name": make_name }),
        None => Value::Null,
    };

    with_join(mock_model_row(id, make_id, name, abrv), join)
}

/// PostgREST error body
pub fn mock_error(message: &str) -> Value {
    json!({
        "message": message,
        "code": "XX000",
        "details": null,
        "hint": null,
    })
}

fn with_join(mut row: Value, join: Value) -> Value {
    if let Value::Object(fields) = &mut row {
        fields.insert("VehicleMake".to_string(), join);
    }

    row
}
