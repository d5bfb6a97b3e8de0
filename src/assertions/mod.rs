pub mod base;
pub mod operations;
pub mod schema;

pub use base::{assert_equal, assert_status_code};
pub use operations::{assert_create_operation, assert_operation, assert_update_operation};
pub use schema::validate_json_schema;
