use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::ParseError;
use crate::service::traits::AnalysisService;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use url::Url;

// The field is named `url` even for free-text claims; the service
// contract predates claim input and kept the name.
#[derive(Serialize)]
struct DetectRequest<'a> {
    url: &'a str,
}

pub struct HttpAnalysisService {
    client: Client,
    endpoint: Url,
}

impl HttpAnalysisService {
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder().user_agent("claimlens/0.1");
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, claim_or_url: &str) -> Result<Value, ClientError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&DetectRequest { url: claim_or_url })
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Service(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ClientError::Parse(ParseError::MalformedBody(e.to_string())))
    }
}
