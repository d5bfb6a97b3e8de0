use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Once;

use anyhow::Result;
use futures::FutureExt;
use tracing_subscriber::EnvFilter;

use crate::clients::operations::OperationsClient;
use crate::clients::operations_client as build_operations_client;
use crate::config;
use crate::error::ClientError;
use crate::schema::Operation;

static INIT: Once = Once::new();

/// Process-wide test bootstrap: load `.env` and install the log subscriber.
/// Safe to call from every test.
pub fn init() {
    INIT.call_once(|| {
        dotenvy::dotenv().ok();
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// One operations client per test, built from ambient configuration.
pub fn operations_client() -> Result<OperationsClient, ClientError> {
    build_operations_client(config::config())
}

/// Scoped test-data lifecycle: creates an operation, hands it to the test
/// body, and issues the delete on every exit path including a panicking
/// assertion. A teardown transport failure surfaces as its own error and can
/// mask the body's outcome.
pub async fn with_function_operation<F, Fut>(client: &OperationsClient, test: F) -> Result<()>
where
    F: FnOnce(Operation) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let operation = client.create_operation().await?;
    let operation_id = operation.id.clone();

    let outcome = AssertUnwindSafe(test(operation)).catch_unwind().await;

    client.delete_operation_api(&operation_id).await?;

    match outcome {
        Ok(result) => result,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}
