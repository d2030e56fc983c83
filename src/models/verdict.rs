use serde::{Deserialize, Serialize};
use std::fmt;

/// Truthfulness label attached to a claim, both by the individual
/// engines and as the final ensemble outcome. `Unknown` absorbs any
/// label string the service sends that the client does not recognize.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Real,
    Misinformation,
    Uncertain,
    Unknown,
}

impl Verdict {
    pub fn from_label(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "REAL" => Verdict::Real,
            "MISINFORMATION" => Verdict::Misinformation,
            "UNCERTAIN" => Verdict::Uncertain,
            _ => Verdict::Unknown,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Verdict::Real => "REAL",
            Verdict::Misinformation => "MISINFORMATION",
            Verdict::Uncertain => "UNCERTAIN",
            Verdict::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}
