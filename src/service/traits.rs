use crate::error::ClientError;
use async_trait::async_trait;
use serde_json::Value;

/// Seam to the external detection service. Implementations return the
/// raw success payload; the session is responsible for parsing it.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, claim_or_url: &str) -> Result<Value, ClientError>;
}
