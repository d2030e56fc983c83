use serde::{Deserialize, Serialize};

/// A cited source supporting the verdict. The service may return
/// duplicates; they are kept and rendered as-is, in response order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub title: String,
    pub snippet: String,
    pub link: String,
}
