use std::time::Duration;

use async_trait::async_trait;
use common::Language;
use tracing::debug;

use crate::CodeExecutor;
use crate::config::ExecutorConfig;
use crate::error::ExecutorError;
use crate::models::{ExecuteRequest, ExecuteResponse};

/// HTTP client for a Piston-compatible code execution API.
#[derive(Debug, Clone)]
pub struct PistonClient {
    http: reqwest::Client,
    url: String,
}

impl PistonClient {
    pub fn new(config: &ExecutorConfig) -> Result<Self, ExecutorError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ExecutorError::Client(e.to_string()))?;

        Ok(Self {
            http,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl CodeExecutor for PistonClient {
    async fn execute(
        &self,
        language: Language,
        source: &str,
    ) -> Result<ExecuteResponse, ExecutorError> {
        let request = ExecuteRequest::single_file(language, source);
        debug!(
            language = %request.language,
            version = %request.version,
            "Dispatching execution request"
        );

        let response = self.http.post(&self.url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExecutorError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<ExecuteResponse>()
            .await
            .map_err(|e| ExecutorError::InvalidResponse(e.to_string()))
    }
}
