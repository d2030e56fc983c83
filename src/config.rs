use crate::render::Theme;
use anyhow::Context;
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/detect";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub endpoint: Url,
    /// Bounded-latency knob for the service boundary; the session
    /// itself never times out a pending request.
    pub timeout: Option<Duration>,
    pub theme: Theme,
}

impl ClientConfig {
    /// Reads `DETECT_ENDPOINT`, `DETECT_TIMEOUT_SECS` and
    /// `CLAIMLENS_THEME` from the environment, with hard defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = env::var("DETECT_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let endpoint =
            Url::parse(&raw).with_context(|| format!("invalid DETECT_ENDPOINT: {raw}"))?;

        let timeout = match env::var("DETECT_TIMEOUT_SECS") {
            Ok(value) => {
                let secs: u64 = value
                    .parse()
                    .with_context(|| format!("invalid DETECT_TIMEOUT_SECS: {value}"))?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        let theme = env::var("CLAIMLENS_THEME")
            .map(|value| Theme::from_name(&value))
            .unwrap_or_default();

        Ok(Self {
            endpoint,
            timeout,
            theme,
        })
    }
}
