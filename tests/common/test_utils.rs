use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use lingo_tutor::{
    config::{InferenceConfig, TutorConfig},
    inference::TutorClient,
    server::{AppState, router},
};
use serde_json::{Value, json};
use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};
use tower::ServiceExt; // for `oneshot`
use wiremock::MockServer;

pub const TEST_MODEL: &str = "test-org/test-model";
pub const TEST_MODEL_PATH: &str = "/models/test-org/test-model";
pub const TEST_API_KEY: &str = "test-api-key";

/// Inference config pointing at a wiremock server, with a short retry delay
pub fn inference_config(server: &MockServer) -> InferenceConfig {
    InferenceConfig {
        base_url: format!("{}/models", server.uri()),
        model: TEST_MODEL.to_string(),
        api_key: Some(TEST_API_KEY.to_string()),
        max_retries: 3,
        retry_delay_ms: 50,
        deadline_ms: None,
    }
}

/// Successful text-generation body
pub fn generation_body(text: &str) -> Value {
    json!([{ "generated_text": text }])
}

/// Body the provider sends while the model is warming up
pub fn loading_body() -> Value {
    json!({
        "error": "Model test-org/test-model is currently loading",
        "estimated_time": 20.0
    })
}

pub fn create_test_app(client: Arc<dyn TutorClient>) -> Router {
    router(AppState {
        client,
        tutor: Arc::new(TutorConfig::default()),
    })
}

/// POSTs `body` to the tutor endpoint and returns the status and JSON body
pub async fn post_tutor(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/tutor")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    send(app, request).await
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

/// In-memory log sink for asserting on emitted tracing records
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Installs a plain-text `info`-level subscriber for the current thread
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(self.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
