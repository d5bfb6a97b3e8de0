pub mod http;
pub mod operations;

pub use http::HttpClient;
pub use operations::{operations_client, OperationsClient};
