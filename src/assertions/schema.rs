use jsonschema::Draft;
use serde_json::Value;

use crate::reporting::step;

/// Validates `instance` against a Draft 2020-12 schema, format checks
/// included (date strings in particular). Panics listing every violation.
pub fn validate_json_schema(instance: &Value, schema: &Value) {
    step("Validating JSON schema");

    let validator = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .should_validate_formats(true)
        .build(schema)
        .unwrap_or_else(|error| panic!("Invalid JSON schema document: {error}"));

    let violations: Vec<String> = validator
        .iter_errors(instance)
        .map(|error| format!("{error} (at instance path \"{}\")", error.instance_path))
        .collect();

    assert!(
        violations.is_empty(),
        "JSON schema validation failed:\n{}",
        violations.join("\n")
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::operations::{operation_json_schema, operations_json_schema};
    use serde_json::json;
    use std::panic::catch_unwind;

    fn valid_operation() -> Value {
        json!({
            "id": 1,
            "debit": -42.5,
            "credit": null,
            "category": "taxi",
            "description": "cab ride",
            "transactionDate": "2024-05-01"
        })
    }

    #[test]
    fn accepts_valid_operation() {
        validate_json_schema(&valid_operation(), &operation_json_schema());
    }

    #[test]
    fn accepts_string_id_and_string_amounts() {
        let mut instance = valid_operation();
        instance["id"] = json!("op-1");
        instance["debit"] = json!("-42.50");
        validate_json_schema(&instance, &operation_json_schema());
    }

    #[test]
    fn rejects_missing_id() {
        let mut instance = valid_operation();
        instance.as_object_mut().unwrap().remove("id");
        let result = catch_unwind(|| validate_json_schema(&instance, &operation_json_schema()));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_malformed_date() {
        let mut instance = valid_operation();
        instance["transactionDate"] = json!("05/01/2024");
        let result = catch_unwind(|| validate_json_schema(&instance, &operation_json_schema()));
        assert!(result.is_err());
    }

    #[test]
    fn collection_schema_accepts_array_of_operations() {
        let instance = json!([valid_operation(), valid_operation()]);
        validate_json_schema(&instance, &operations_json_schema());
    }

    #[test]
    fn collection_schema_rejects_bare_object() {
        let result =
            catch_unwind(|| validate_json_schema(&valid_operation(), &operations_json_schema()));
        assert!(result.is_err());
    }
}
