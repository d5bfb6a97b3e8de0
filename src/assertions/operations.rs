use crate::assertions::base::assert_equal;
use crate::reporting::step;
use crate::schema::{CreateOperationRequest, Operation, UpdateOperationRequest};

/// Field-by-field equality of two operations.
pub fn assert_operation(actual: &Operation, expected: &Operation) {
    step("Check operation");

    assert_equal(&actual.id, &expected.id, "id");
    assert_equal(&actual.debit, &expected.debit, "debit");
    assert_equal(&actual.credit, &expected.credit, "credit");
    assert_equal(&actual.category, &expected.category, "category");
    assert_equal(&actual.description, &expected.description, "description");
    assert_equal(
        &actual.transaction_date,
        &expected.transaction_date,
        "transaction_date",
    );
}

/// A created operation must echo every field of its originating request.
pub fn assert_create_operation(actual: &Operation, request: &CreateOperationRequest) {
    step("Check created operation");

    assert_equal(&actual.debit, &request.debit, "debit");
    assert_equal(&actual.credit, &request.credit, "credit");
    assert_equal(&actual.category, &request.category, "category");
    assert_equal(&actual.description, &request.description, "description");
    assert_equal(
        &actual.transaction_date,
        &request.transaction_date,
        "transaction_date",
    );
}

/// Compares only the fields the update request actually set; unset fields
/// are skipped so partial updates can be checked against the same helper.
pub fn assert_update_operation(actual: &Operation, request: &UpdateOperationRequest) {
    step("Check updated operation");

    if let Some(debit) = &request.debit {
        assert_equal(&actual.debit, &Some(debit.clone()), "debit");
    }
    if let Some(credit) = &request.credit {
        assert_equal(&actual.credit, &Some(credit.clone()), "credit");
    }
    if let Some(category) = &request.category {
        assert_equal(&actual.category, category, "category");
    }
    if let Some(description) = &request.description {
        assert_equal(&actual.description, description, "description");
    }
    if let Some(transaction_date) = &request.transaction_date {
        assert_equal(
            &actual.transaction_date,
            transaction_date,
            "transaction_date",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Amount, OperationId};
    use chrono::NaiveDate;
    use std::panic::catch_unwind;

    fn operation() -> Operation {
        Operation {
            id: OperationId::Number(1),
            debit: Some(Amount::Number(-42.5)),
            credit: None,
            category: "taxi".to_string(),
            description: "cab ride".to_string(),
            transaction_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    #[test]
    fn identical_operations_pass() {
        assert_operation(&operation(), &operation());
    }

    #[test]
    fn differing_category_fails() {
        let mut other = operation();
        other.category = "fuel".to_string();
        let result = catch_unwind(|| assert_operation(&operation(), &other));
        assert!(result.is_err());
    }

    #[test]
    fn created_operation_matches_its_request() {
        let actual = operation();
        let request = CreateOperationRequest {
            debit: actual.debit.clone(),
            credit: actual.credit.clone(),
            category: actual.category.clone(),
            description: actual.description.clone(),
            transaction_date: actual.transaction_date,
        };
        assert_create_operation(&actual, &request);
    }

    #[test]
    fn partial_update_skips_unset_fields() {
        let actual = operation();
        // Only category is set; the mismatching description must be ignored.
        let request = UpdateOperationRequest {
            category: Some("taxi".to_string()),
            ..UpdateOperationRequest::empty()
        };
        assert_update_operation(&actual, &request);
    }

    #[test]
    fn partial_update_still_checks_set_fields() {
        let actual = operation();
        let request = UpdateOperationRequest {
            category: Some("fuel".to_string()),
            ..UpdateOperationRequest::empty()
        };
        let result = catch_unwind(|| assert_update_operation(&actual, &request));
        assert!(result.is_err());
    }
}
