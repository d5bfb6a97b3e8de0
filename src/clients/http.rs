use std::time::Duration;

use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde_json::Value;
use tracing::info;

use crate::config::HttpClientConfig;
use crate::error::ClientError;

/// Thin facade over `reqwest::Client` that logs every request and response.
/// Adds no retries and no status-based error translation; transport failures
/// propagate as-is.
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    pub fn new(config: &HttpClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let base_url = Url::parse(&config.base_url)?;
        Ok(Self { client, base_url })
    }

    pub async fn get(
        &self,
        path: &str,
        params: Option<&[(&str, &str)]>,
    ) -> Result<Response, ClientError> {
        let mut url = self.url(path)?;
        if let Some(params) = params {
            url.query_pairs_mut().extend_pairs(params);
        }
        self.send(self.client.get(url)).await
    }

    pub async fn post(
        &self,
        path: &str,
        json: Option<&Value>,
        form: Option<&[(&str, &str)]>,
        files: Option<Form>,
    ) -> Result<Response, ClientError> {
        let mut request = self.client.post(self.url(path)?);
        if let Some(json) = json {
            request = request.json(json);
        }
        if let Some(form) = form {
            request = request.form(form);
        }
        if let Some(files) = files {
            request = request.multipart(files);
        }
        self.send(request).await
    }

    pub async fn patch(&self, path: &str, json: &Value) -> Result<Response, ClientError> {
        self.send(self.client.patch(self.url(path)?).json(json)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Response, ClientError> {
        self.send(self.client.delete(self.url(path)?)).await
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    // Request/response logging lives here so every verb reports uniformly.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let request = request.build()?;
        info!(
            target: "http_client",
            "Make {} request to {}",
            request.method(),
            request.url()
        );

        let response = self.client.execute(request).await?;
        info!(
            target: "http_client",
            "Got response {} {} from {}",
            response.status().as_u16(),
            response.status().canonical_reason().unwrap_or("Unknown"),
            response.url()
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::ApiRoute;

    fn client() -> HttpClient {
        HttpClient::new(&HttpClientConfig {
            base_url: "http://localhost:8003".to_string(),
            timeout_secs: 30,
        })
        .unwrap()
    }

    #[test]
    fn joins_route_paths_against_base_url() {
        let url = client().url(ApiRoute::Operations.as_str()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8003/fakebank/accounts");
    }

    #[test]
    fn rejects_invalid_base_url() {
        let result = HttpClient::new(&HttpClientConfig {
            base_url: "not a url".to_string(),
            timeout_secs: 30,
        });
        assert!(matches!(result, Err(ClientError::BaseUrl(_))));
    }
}
