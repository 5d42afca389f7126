use async_trait::async_trait;
use lingo_tutor::{Error, Result, inference::TutorClient};
use std::sync::{Arc, Mutex};

/// A recorded `generate` call: (message, language, topic).
pub type RecordedCall = (String, String, String);

/// Mock tutor client that records calls and returns a canned outcome
#[derive(Debug, Clone)]
pub struct MockTutorClient {
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    pub reply: Option<String>,
    pub error: Option<String>,
}

impl MockTutorClient {
    pub fn with_reply(reply: &str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            reply: Some(reply.to_string()),
            error: None,
        }
    }

    pub fn with_error(error: &str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            reply: None,
            error: Some(error.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TutorClient for MockTutorClient {
    async fn generate(&self, message: &str, language: &str, topic: &str) -> Result<String> {
        self.calls.lock().unwrap().push((
            message.to_string(),
            language.to_string(),
            topic.to_string(),
        ));

        if let Some(ref error) = self.error {
            return Err(Error::Upstream {
                status: 500,
                body: error.clone(),
            });
        }

        self.reply.clone().ok_or_else(|| Error::MalformedResponse {
            body: "[]".to_string(),
        })
    }
}
