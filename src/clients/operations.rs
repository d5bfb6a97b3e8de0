use reqwest::Response;

use crate::clients::http::HttpClient;
use crate::config::AppConfig;
use crate::error::ClientError;
use crate::reporting::step;
use crate::routes::ApiRoute;
use crate::schema::{CreateOperationRequest, Operation, OperationId, UpdateOperationRequest};

/// Named API calls for the operations resource. Returns raw responses;
/// status checks belong to the assertions layer.
pub struct OperationsClient {
    client: HttpClient,
}

impl OperationsClient {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn get_operations_api(&self) -> Result<Response, ClientError> {
        step("Get list of operations");
        self.client.get(ApiRoute::Operations.as_str(), None).await
    }

    pub async fn get_operation_api(
        &self,
        operation_id: &OperationId,
    ) -> Result<Response, ClientError> {
        step(format!("Get operation by id {operation_id}"));
        self.client
            .get(&format!("{}/{}", ApiRoute::Operations, operation_id), None)
            .await
    }

    pub async fn create_operation_api(
        &self,
        operation: &CreateOperationRequest,
    ) -> Result<Response, ClientError> {
        step("Create operation");
        let body = serde_json::to_value(operation)?;
        self.client
            .post(ApiRoute::Operations.as_str(), Some(&body), None, None)
            .await
    }

    pub async fn update_operation_api(
        &self,
        operation_id: &OperationId,
        operation: &UpdateOperationRequest,
    ) -> Result<Response, ClientError> {
        step(format!("Update operation by id {operation_id}"));
        // Unset fields are dropped by the request's serializer, so a partial
        // update never sends explicit nulls.
        let body = serde_json::to_value(operation)?;
        self.client
            .patch(&format!("{}/{}", ApiRoute::Operations, operation_id), &body)
            .await
    }

    pub async fn delete_operation_api(
        &self,
        operation_id: &OperationId,
    ) -> Result<Response, ClientError> {
        step(format!("Delete operation by id {operation_id}"));
        self.client
            .delete(&format!("{}/{}", ApiRoute::Operations, operation_id))
            .await
    }

    /// Create a fully randomized operation and decode the response body.
    /// No status check happens here: a non-2xx body simply fails to decode
    /// as an `Operation`.
    pub async fn create_operation(&self) -> Result<Operation, ClientError> {
        let request = CreateOperationRequest::default();
        let response = self.create_operation_api(&request).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

pub fn operations_client(config: &AppConfig) -> Result<OperationsClient, ClientError> {
    Ok(OperationsClient::new(HttpClient::new(&config.fake_bank)?))
}
