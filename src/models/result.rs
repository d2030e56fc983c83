use crate::models::{EvidenceItem, Verdict};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const TRUST_SCORE_MAX: i64 = 100;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("response missing required field '{0}'")]
    MissingField(&'static str),
    #[error("trust_score must be an integer percentage, got {0}")]
    InvalidScore(String),
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

/// One completed analysis as returned by the detection service.
/// Immutable once parsed; a session replaces it wholesale on resubmit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub claim: String,
    pub final_label: Verdict,
    pub trust_score: u8,
    pub ml_label: Verdict,
    pub gemini_label: Verdict,
    pub openrouter_label: Verdict,
    pub summary: String,
    pub evidence: Vec<EvidenceItem>,
}

/// Validates a raw response payload into an [`AnalysisResult`].
///
/// Pure and deterministic. `claim`, `final_label` and `evidence` are
/// required; `trust_score` must be a JSON integer. Out-of-range scores
/// are clamped into `[0, 100]` (same input always clamps the same way),
/// while non-integer scores are rejected. Unrecognized label strings
/// are kept as [`Verdict::Unknown`] so schema drift on the service side
/// never turns into a client crash.
pub fn parse(raw: &Value) -> Result<AnalysisResult, ParseError> {
    let claim = raw
        .get("claim")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ParseError::MissingField("claim"))?
        .to_string();

    let final_label = match raw.get("final_label") {
        None => return Err(ParseError::MissingField("final_label")),
        Some(value) => label_of(value),
    };

    let score = raw
        .get("trust_score")
        .and_then(Value::as_i64)
        .ok_or_else(|| ParseError::InvalidScore(score_repr(raw.get("trust_score"))))?;
    let trust_score = score.clamp(0, TRUST_SCORE_MAX) as u8;

    let evidence = raw
        .get("evidence")
        .and_then(Value::as_array)
        .ok_or(ParseError::MissingField("evidence"))?
        .iter()
        .map(|item| EvidenceItem {
            title: str_field(item, "title"),
            snippet: str_field(item, "snippet"),
            link: str_field(item, "link"),
        })
        .collect();

    Ok(AnalysisResult {
        claim,
        final_label,
        trust_score,
        ml_label: engine_label(raw, "ml_label"),
        gemini_label: engine_label(raw, "gemini_label"),
        openrouter_label: engine_label(raw, "openrouter_label"),
        summary: str_field(raw, "summary"),
        evidence,
    })
}

fn label_of(value: &Value) -> Verdict {
    value
        .as_str()
        .map(Verdict::from_label)
        .unwrap_or(Verdict::Unknown)
}

fn engine_label(raw: &Value, key: &str) -> Verdict {
    raw.get(key).map(label_of).unwrap_or(Verdict::Unknown)
}

fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn score_repr(value: Option<&Value>) -> String {
    match value {
        None => "nothing".to_string(),
        Some(v) => v.to_string(),
    }
}
