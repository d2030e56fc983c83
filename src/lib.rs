pub mod config;
pub mod error;
pub mod models;
pub mod rationale;
pub mod render;
pub mod report;
pub mod service;
pub mod session;

pub use config::ClientConfig;
pub use error::ClientError;
pub use models::{AnalysisResult, EvidenceItem, ParseError, Verdict};
pub use session::{AnalysisSession, SessionState, SubmitOutcome};
