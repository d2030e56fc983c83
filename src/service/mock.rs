use crate::error::ClientError;
use crate::models::ParseError;
use crate::service::traits::AnalysisService;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Debug)]
enum MockMode {
    Success(Value),
    Status(u16),
    Transport,
    MalformedBody,
}

/// Canned stand-in for the detection service. Counts calls so tests can
/// assert that rejected or ignored submissions never reach the network.
pub struct MockAnalysisService {
    mode: MockMode,
    calls: AtomicUsize,
}

impl MockAnalysisService {
    pub fn success(payload: Value) -> Self {
        Self::with_mode(MockMode::Success(payload))
    }

    pub fn status(code: u16) -> Self {
        Self::with_mode(MockMode::Status(code))
    }

    pub fn transport_failure() -> Self {
        Self::with_mode(MockMode::Transport)
    }

    pub fn malformed_body() -> Self {
        Self::with_mode(MockMode::MalformedBody)
    }

    fn with_mode(mode: MockMode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisService for MockAnalysisService {
    async fn analyze(&self, _claim_or_url: &str) -> Result<Value, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.mode {
            MockMode::Success(payload) => Ok(payload.clone()),
            MockMode::Status(code) => Err(ClientError::Service(*code)),
            MockMode::Transport => Err(ClientError::Transport(
                "connection refused".to_string(),
            )),
            MockMode::MalformedBody => Err(ClientError::Parse(ParseError::MalformedBody(
                "expected value at line 1 column 1".to_string(),
            ))),
        }
    }
}
