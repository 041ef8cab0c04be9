//! Avatar service HTTP client.

use std::time::{Duration, Instant};

use base64::Engine;
use futures::StreamExt;
use reqwest::Client;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::error::{AvatarError, AvatarResult};
use crate::types::{CreateTalkRequest, CreateTalkResponse, TalkStatusResponse};

/// Configuration for the avatar client.
#[derive(Debug, Clone)]
pub struct AvatarClientConfig {
    /// Base URL of the avatar service
    pub base_url: String,
    /// API credential in `email:key` format
    pub api_key: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Delay between status polls
    pub poll_interval: Duration,
    /// Overall generation deadline
    pub deadline: Duration,
    /// Max retries for the create request
    pub max_retries: u32,
}

impl Default for AvatarClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.d-id.com".to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(30),
            poll_interval: Duration::from_secs(5),
            deadline: Duration::from_secs(300),
            max_retries: 2,
        }
    }
}

impl AvatarClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("DID_API_URL")
                .unwrap_or_else(|_| "https://api.d-id.com".to_string()),
            api_key: std::env::var("DID_API_KEY").unwrap_or_default(),
            timeout: Duration::from_secs(
                std::env::var("DID_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            poll_interval: Duration::from_secs(
                std::env::var("DID_POLL_INTERVAL")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            deadline: Duration::from_secs(
                std::env::var("DID_DEADLINE")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(300),
            ),
            max_retries: std::env::var("DID_RETRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
        }
    }
}

/// Client for the avatar video service.
pub struct AvatarClient {
    http: Client,
    config: AvatarClientConfig,
}

impl AvatarClient {
    /// Create a new avatar client.
    pub fn new(config: AvatarClientConfig) -> AvatarResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(AvatarError::Network)?;

        Ok(Self { http, config })
    }

    /// Basic authorization header from the `email:key` credential.
    ///
    /// Validated here rather than at construction, so a missing credential
    /// surfaces as a generation error instead of a startup failure.
    fn auth_header(&self) -> AvatarResult<String> {
        if !self.config.api_key.contains(':') {
            return Err(AvatarError::InvalidCredential);
        }
        let encoded = base64::engine::general_purpose::STANDARD
            .encode(self.config.api_key.as_bytes());
        Ok(format!("Basic {encoded}"))
    }

    /// Create from environment variables.
    pub fn from_env() -> AvatarResult<Self> {
        Self::new(AvatarClientConfig::from_env())
    }

    /// Create a talk and return its id.
    pub async fn create_talk(&self, request: &CreateTalkRequest) -> AvatarResult<String> {
        let auth = self.auth_header()?;
        let url = format!("{}/talks", self.config.base_url);
        debug!("Creating talk at {}", url);

        let response = self
            .with_retry(|| async {
                self.http
                    .post(&url)
                    .header(reqwest::header::AUTHORIZATION, &auth)
                    .json(request)
                    .send()
                    .await
                    .map_err(AvatarError::Network)
            })
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AvatarError::RequestFailed(format!(
                "Avatar service returned {status}: {body}"
            )));
        }

        let created: CreateTalkResponse = response.json().await?;
        match created.id {
            Some(id) => {
                info!("Talk created with id {}", id);
                Ok(id)
            }
            None => Err(AvatarError::RequestFailed(format!(
                "Talk creation failed: {}",
                created.error_detail()
            ))),
        }
    }

    /// Fetch the current status of a talk.
    pub async fn talk_status(&self, talk_id: &str) -> AvatarResult<TalkStatusResponse> {
        let auth = self.auth_header()?;
        let url = format!("{}/talks/{}", self.config.base_url, talk_id);

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, &auth)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AvatarError::RequestFailed(format!(
                "Avatar service returned {status}: {body}"
            )));
        }

        Ok(response.json().await?)
    }

    /// Create a talk and poll it to completion. Returns the result URL.
    pub async fn generate(&self, script: &str, source_url: &str) -> AvatarResult<String> {
        let request = CreateTalkRequest::text(script, source_url);
        let talk_id = self.create_talk(&request).await?;

        let started = Instant::now();
        loop {
            if started.elapsed() >= self.config.deadline {
                return Err(AvatarError::Timeout(self.config.deadline.as_secs()));
            }

            let status = self.talk_status(&talk_id).await?;
            debug!("Talk {} status: {}", talk_id, status.status);

            match status.status.as_str() {
                "done" => {
                    return status.result_url.ok_or_else(|| {
                        AvatarError::InvalidResponse(
                            "Talk finished but no result URL found".to_string(),
                        )
                    });
                }
                "error" => {
                    return Err(AvatarError::GenerationFailed(status.error_detail()));
                }
                "created" | "started" => {
                    tokio::time::sleep(self.config.poll_interval).await;
                }
                other => {
                    return Err(AvatarError::UnexpectedStatus(other.to_string()));
                }
            }
        }
    }

    /// Stream the finished video into `dest` chunk by chunk, without
    /// buffering the whole file in memory. Returns the byte count.
    pub async fn download_result<W>(&self, result_url: &str, dest: &mut W) -> AvatarResult<u64>
    where
        W: AsyncWrite + Unpin,
    {
        let response = self.http.get(result_url).send().await?;
        if !response.status().is_success() {
            return Err(AvatarError::RequestFailed(format!(
                "Video download returned {}",
                response.status()
            )));
        }

        let mut stream = response.bytes_stream();
        let mut written = 0u64;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            dest.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        dest.flush().await?;
        Ok(written)
    }

    /// Execute the create request with retry on network errors.
    async fn with_retry<F, Fut, T>(&self, operation: F) -> AvatarResult<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = AvatarResult<T>>,
    {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    let delay = Duration::from_millis(500 * 2u64.pow(attempt));
                    warn!(
                        "Avatar request failed (attempt {}), retrying in {:?}: {}",
                        attempt + 1,
                        delay,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or(AvatarError::RequestFailed("Unknown error".to_string())))
    }
}
