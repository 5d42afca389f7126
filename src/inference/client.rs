use super::{
    prompt::build_prompt,
    types::{GenerationRequest, parse_generated_text},
};
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info, warn};

#[async_trait]
pub trait TutorClient: Send + Sync {
    /// Produces a tutoring reply for `message` in `language` about `topic`.
    async fn generate(&self, message: &str, language: &str, topic: &str) -> Result<String>;
}

/// Outcome of a single POST to the inference endpoint.
enum Attempt {
    Generated(String),
    ModelLoading(String),
}

/// Client for the Hugging Face text-generation inference API.
pub struct HuggingFaceClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    max_retries: u32,
    retry_delay: Duration,
    deadline: Option<Duration>,
}

impl HuggingFaceClient {
    pub fn new(config: InferenceConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint(),
            api_key: config.api_key,
            max_retries: config.max_retries,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
            deadline: config.deadline_ms.map(Duration::from_millis),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Generates a reply, retrying up to `max_retries` times while the model
    /// is still loading.
    ///
    /// At most `1 + max_retries` requests are sent. Every other failure is
    /// returned immediately. When a deadline is configured it bounds the whole
    /// call, retry delays included.
    pub async fn generate_with_retries(
        &self,
        message: &str,
        language: &str,
        topic: &str,
        max_retries: u32,
    ) -> Result<String> {
        let prompt = build_prompt(language, topic, message);
        let attempts = self.run_attempts(&prompt, max_retries);

        match self.deadline {
            Some(deadline) => tokio::time::timeout(deadline, attempts)
                .await
                .map_err(|_| Error::DeadlineExceeded(deadline))?,
            None => attempts.await,
        }
    }

    async fn run_attempts(&self, prompt: &str, max_retries: u32) -> Result<String> {
        let mut remaining = max_retries;
        let mut attempt: u32 = 1;

        loop {
            match self.send(prompt, attempt).await? {
                Attempt::Generated(text) => return Ok(text),
                Attempt::ModelLoading(_) if remaining > 0 => {
                    info!(
                        "Model is loading, retrying in {:?} ({} retries left)",
                        self.retry_delay, remaining
                    );
                    tokio::time::sleep(self.retry_delay).await;
                    remaining -= 1;
                    attempt += 1;
                }
                Attempt::ModelLoading(body) => {
                    warn!("Model still loading after {} attempts", attempt);
                    return Err(Error::ModelLoading {
                        attempts: attempt,
                        body,
                    });
                }
            }
        }
    }

    async fn send(&self, prompt: &str, attempt: u32) -> Result<Attempt> {
        debug!("Sending inference request to {} (attempt {})", self.endpoint, attempt);

        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&GenerationRequest { inputs: prompt });
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        info!(
            status = status.as_u16(),
            body = %body,
            "Received inference API response"
        );

        if status == StatusCode::SERVICE_UNAVAILABLE {
            return Ok(Attempt::ModelLoading(body));
        }

        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        parse_generated_text(&body).map(Attempt::Generated)
    }
}

#[async_trait]
impl TutorClient for HuggingFaceClient {
    async fn generate(&self, message: &str, language: &str, topic: &str) -> Result<String> {
        self.generate_with_retries(message, language, topic, self.max_retries)
            .await
    }
}
