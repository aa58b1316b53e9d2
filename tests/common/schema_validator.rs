use jsonschema::{Draft, JSONSchema};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load a JSON schema from a file
pub fn load_schema(schema_path: &Path) -> JSONSchema {
    let schema_content = fs::read_to_string(schema_path)
        .unwrap_or_else(|_| panic!("Failed to read schema file: {}", schema_path.display()));

    let schema_json: Value = serde_json::from_str(&schema_content)
        .unwrap_or_else(|_| panic!("Failed to parse schema JSON: {}", schema_path.display()));

    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema_json)
        .expect("Failed to compile schema")
}

/// Validate a JSON value against a schema
pub fn validate_against_schema(data: &Value, schema: &JSONSchema) -> Result<(), Vec<String>> {
    match schema.validate(data) {
        Ok(_) => Ok(()),
        Err(errors) => {
            let error_messages: Vec<String> = errors
                .map(|e| format!("{} at {}", e, e.instance_path))
                .collect();
            Err(error_messages)
        }
    }
}

/// Load schema from tests/schemas directory
pub fn load_test_schema(schema_name: &str) -> JSONSchema {
    let schema_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/schemas")
        .join(format!("{schema_name}.json"));
    load_schema(&schema_path)
}

/// Serialize `response` and panic with every violation if it does not match
pub fn assert_matches_schema<T: Serialize>(response: &T, schema_name: &str) -> Value {
    let json = serde_json::to_value(response).expect("response serializes");
    let schema = load_test_schema(schema_name);

    if let Err(errors) = validate_against_schema(&json, &schema) {
        eprintln!("✗ {} schema validation failed:", schema_name);
        for error in &errors {
            eprintln!("  - {}", error);
        }
        eprintln!(
            "\nActual response:\n{}",
            serde_json::to_string_pretty(&json).unwrap()
        );
        panic!("Schema validation failed with {} errors", errors.len());
    }

    json
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_schema_validation() {
        let schema_json = json!({
            "type": "object",
            "properties": {
                "id": {"type": "string"},
                "name": {"type": "string"}
            },
            "required": ["id"]
        });

        let schema = JSONSchema::compile(&schema_json).expect("Invalid schema");

        // Valid data
        let valid_data = json!({"id": "123", "name": "Test"});
        assert!(validate_against_schema(&valid_data, &schema).is_ok());

        // Invalid data (missing required field)
        let invalid_data = json!({"name": "Test"});
        assert!(validate_against_schema(&invalid_data, &schema).is_err());
    }
}
