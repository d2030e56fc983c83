use crate::models::AnalysisResult;

/// Composes the "why this verdict" text from the three engine votes and
/// the final label. Fixed template, byte-identical for identical input.
pub fn explain(result: &AnalysisResult) -> String {
    format!(
        "The claim \"{claim}\" was reviewed by three independent reasoning engines:\n\
         \n\
         - The ML (MNLI) engine classified the claim as: {ml}.\n\
         - The Gemini model classified the claim as: {gemini}.\n\
         - LLaMA cross-validation classified the claim as: {openrouter}.\n\
         \n\
         The final verdict \"{final_label}\" was selected by ensemble voting and \
         reflects the agreement of the engines on this outcome.",
        claim = result.claim,
        ml = result.ml_label.as_label(),
        gemini = result.gemini_label.as_label(),
        openrouter = result.openrouter_label.as_label(),
        final_label = result.final_label.as_label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Verdict;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            claim: "vaccines cause autism".to_string(),
            final_label: Verdict::Misinformation,
            trust_score: 92,
            ml_label: Verdict::Misinformation,
            gemini_label: Verdict::Misinformation,
            openrouter_label: Verdict::Uncertain,
            summary: String::new(),
            evidence: Vec::new(),
        }
    }

    #[test]
    fn mentions_every_engine_vote_and_the_final_verdict() {
        let text = explain(&sample_result());
        assert!(text.contains("vaccines cause autism"));
        assert!(text.contains("ML (MNLI) engine classified the claim as: MISINFORMATION"));
        assert!(text.contains("Gemini model classified the claim as: MISINFORMATION"));
        assert!(text.contains("LLaMA cross-validation classified the claim as: UNCERTAIN"));
        assert!(text.contains("final verdict \"MISINFORMATION\""));
        assert!(text.contains("ensemble voting"));
    }

    #[test]
    fn output_is_byte_identical_across_calls() {
        let result = sample_result();
        assert_eq!(explain(&result), explain(&result));
    }

    #[test]
    fn unknown_votes_use_the_closed_vocabulary() {
        let mut result = sample_result();
        result.gemini_label = Verdict::Unknown;
        assert!(explain(&result).contains("Gemini model classified the claim as: UNKNOWN"));
    }
}
