//! Custom-property stylesheet serialization
//!
//! The merged theme document flattens into one declaration per leaf
//! value, the property name being the dash-joined path of keys, all
//! wrapped in a single `:root` block.

use serde_json::Value;

/// Render a merged theme document as a `:root` custom-property block.
pub fn to_custom_properties(document: &Value) -> String {
    let mut declarations = Vec::new();
    flatten(document, String::new(), &mut declarations);

    let mut sheet = String::from(":root {\n");
    for (name, value) in &declarations {
        sheet.push_str("  --");
        sheet.push_str(name);
        sheet.push_str(": ");
        sheet.push_str(value);
        sheet.push_str(";\n");
    }
    sheet.push_str("}\n");

    sheet
}

fn flatten(node: &Value, path: String, out: &mut Vec<(String, String)>) {
    match node {
        Value::Object(fields) => {
            for (key, child) in fields {
                flatten(child, join(&path, key), out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten(child, join(&path, &index.to_string()), out);
            }
        }
        Value::String(text) => out.push((path, text.clone())),
        Value::Number(number) => out.push((path, number.to_string())),
        _ => {}
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}-{key}")
    }
}
