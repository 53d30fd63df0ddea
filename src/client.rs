use crate::error::{AuResult, AuricleError};
use crate::protocol::{
    EvaluateAmazonRequest, EvaluateRequest, EvaluationResponse, HealthResponse,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::info;

/// Thin client for the external scoring service. One request/response
/// exchange per evaluation; no retry, no queuing.
pub struct EvaluatorClient {
    http: Client,
    base_url: String,
}

impl EvaluatorClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> AuResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> AuResult<HealthResponse> {
        let resp = self
            .http
            .get(format!("{}/", self.base_url))
            .send()
            .await?;
        Self::read_json(resp).await
    }

    /// Score manually entered candidates against the finalized use-case vector.
    pub async fn evaluate(&self, request: &EvaluateRequest) -> AuResult<EvaluationResponse> {
        info!(
            "Evaluating {} candidates across {} use cases",
            request.headphones.len(),
            request.use_cases.len()
        );
        let resp = self
            .http
            .post(format!("{}/evaluate", self.base_url))
            .json(request)
            .send()
            .await?;
        Self::read_json(resp).await
    }

    /// URL-import variant: the backend fetches the product specs itself.
    pub async fn evaluate_amazon(
        &self,
        request: &EvaluateAmazonRequest,
    ) -> AuResult<EvaluationResponse> {
        info!("Evaluating {} imported products", request.amazon_urls.len());
        let resp = self
            .http
            .post(format!("{}/evaluate-amazon", self.base_url))
            .json(request)
            .send()
            .await?;
        Self::read_json(resp).await
    }

    async fn read_json<T: DeserializeOwned>(resp: Response) -> AuResult<T> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuricleError::Backend(format!("{}: {}", status, body)));
        }
        Ok(resp.json().await?)
    }
}
