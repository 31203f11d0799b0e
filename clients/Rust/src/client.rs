use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DecisionCalcError, Result};
use crate::types::{
    BepRequest, BepResponse, EoqRequest, EoqResponse, ErrorBody, LpRequest, LpResponse,
    QueueRequest, QueueResponse,
};

/// HTTP client for the decision-calc REST API
#[derive(Debug, Clone)]
pub struct DecisionCalcClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl DecisionCalcClient {
    /// Create a new API client
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the API (e.g., "http://localhost:9000")
    ///
    /// # Example
    ///
    /// ```no_run
    /// use decision_calc_sdk::DecisionCalcClient;
    ///
    /// let client = DecisionCalcClient::new("http://localhost:9000").unwrap();
    /// ```
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())
            .map_err(|e| DecisionCalcError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            client: Client::new(),
            base_url,
            api_key: None,
        })
    }

    /// Create a new API client with a custom reqwest client
    ///
    /// This allows you to configure timeouts, proxies, etc.
    pub fn with_client(base_url: impl AsRef<str>, client: Client) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())
            .map_err(|e| DecisionCalcError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            api_key: None,
        })
    }

    /// Set the API key for authentication
    ///
    /// Use this when the server was started with the API_KEY environment
    /// variable set.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Check the health of the API server
    pub async fn health_check(&self) -> Result<bool> {
        let url = self
            .base_url
            .join("/health")
            .map_err(|e| DecisionCalcError::InvalidUrl(e.to_string()))?;

        let response = self.client.get(url).send().await?;
        Ok(response.status().is_success())
    }

    /// Solve a two-variable maximization under two ≤ constraints
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use decision_calc_sdk::{DecisionCalcClient, LpRequestBuilder};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = DecisionCalcClient::new("http://localhost:9000")?;
    ///
    /// let request = LpRequestBuilder::new()
    ///     .objective(3.0, 5.0)
    ///     .constraint(1.0, 2.0, 6.0)
    ///     .constraint(3.0, 2.0, 12.0)
    ///     .build()?;
    ///
    /// let response = client.solve_lp(request).await?;
    /// println!("optimum: ({}, {}) Z = {}", response.x, response.y, response.z);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn solve_lp(&self, request: LpRequest) -> Result<LpResponse> {
        self.post_json("/solve/lp", &request).await
    }

    /// Compute the economic order quantity and its cost curve
    pub async fn solve_eoq(&self, request: EoqRequest) -> Result<EoqResponse> {
        self.post_json("/solve/eoq", &request).await
    }

    /// Compute steady-state M/M/1 queue metrics
    ///
    /// An arrival rate at or above the service rate comes back as
    /// `DecisionCalcError::Solve` with reason `UnstableSystem`.
    pub async fn solve_queue(&self, request: QueueRequest) -> Result<QueueResponse> {
        self.post_json("/solve/queue", &request).await
    }

    /// Compute the break-even point and its revenue/cost curves
    pub async fn solve_bep(&self, request: BepRequest) -> Result<BepResponse> {
        self.post_json("/solve/bep", &request).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| DecisionCalcError::InvalidUrl(e.to_string()))?;

        let mut req_builder = self.client.post(url).json(body);

        // Add API key header if set
        if let Some(ref api_key) = self.api_key {
            req_builder = req_builder.header("X-API-Key", api_key);
        }

        let response = req_builder.send().await?;
        let status = response.status();

        // 422 carries the calculator's tagged failure body
        if status.as_u16() == 422 {
            let error_body: ErrorBody = response
                .json()
                .await
                .map_err(|e| DecisionCalcError::ParseError(e.to_string()))?;
            return Err(DecisionCalcError::Solve {
                reason: error_body.reason,
                details: error_body.details,
            });
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status.as_u16() {
                401 | 403 => DecisionCalcError::AuthenticationFailed,
                _ => DecisionCalcError::ApiError(error_text),
            });
        }

        response
            .json()
            .await
            .map_err(|e| DecisionCalcError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = DecisionCalcClient::new("http://localhost:9000");
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_api_key() {
        let client = DecisionCalcClient::new("http://localhost:9000")
            .unwrap()
            .with_api_key("test-key");
        assert_eq!(client.api_key, Some("test-key".to_string()));
    }

    #[test]
    fn test_invalid_url() {
        let client = DecisionCalcClient::new("not a valid url");
        assert!(client.is_err());
    }
}
