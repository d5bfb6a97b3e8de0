use std::fmt::Debug;

use reqwest::StatusCode;

use crate::reporting::step;

/// Status-code equality; the panic message names both values.
pub fn assert_status_code(actual: StatusCode, expected: StatusCode) {
    step(format!(
        "Check that response status code equals to {}",
        expected.as_u16()
    ));

    assert_eq!(
        actual,
        expected,
        "Incorrect response status code. Expected status code: {}. Actual status code: {}",
        expected.as_u16(),
        actual.as_u16()
    );
}

/// Named equality check used for field-by-field comparisons.
pub fn assert_equal<T: PartialEq + Debug>(actual: &T, expected: &T, name: &str) {
    step(format!("Check that \"{name}\" equals to {expected:?}"));

    assert_eq!(
        actual, expected,
        "Incorrect value: \"{name}\". Expected value: {expected:?}. Actual value: {actual:?}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::catch_unwind;

    #[test]
    fn status_code_match_passes() {
        assert_status_code(StatusCode::OK, StatusCode::OK);
    }

    #[test]
    fn status_code_mismatch_names_both_values() {
        let result = catch_unwind(|| assert_status_code(StatusCode::NOT_FOUND, StatusCode::OK));
        let panic = result.unwrap_err();
        let message = panic.downcast_ref::<String>().unwrap();
        assert!(message.contains("Expected status code: 200"), "{message}");
        assert!(message.contains("Actual status code: 404"), "{message}");
    }

    #[test]
    fn equal_values_pass() {
        assert_equal(&"fuel", &"fuel", "category");
    }

    #[test]
    fn unequal_values_name_the_field() {
        let result = catch_unwind(|| assert_equal(&"food", &"fuel", "category"));
        let panic = result.unwrap_err();
        let message = panic.downcast_ref::<String>().unwrap();
        assert!(message.contains("\"category\""), "{message}");
        assert!(message.contains("Expected value: \"fuel\""), "{message}");
    }
}
