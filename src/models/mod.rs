pub mod evidence;
pub mod result;
pub mod verdict;

pub use evidence::EvidenceItem;
pub use result::{parse, AnalysisResult, ParseError, TRUST_SCORE_MAX};
pub use verdict::Verdict;
