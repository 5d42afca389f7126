use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Model still loading after {attempts} attempts: {body}")]
    ModelLoading { attempts: u32, body: String },

    #[error("API request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Invalid response format from inference API: {body}")]
    MalformedResponse { body: String },

    #[error("Inference deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
