use crate::models::{AnalysisResult, Verdict};

const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_name(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// Explicit rendering state handed to the terminal adapter; there is no
/// process-wide theme singleton.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderContext {
    pub theme: Theme,
}

impl RenderContext {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// ANSI style for a verdict label. Unknown verdicts get neutral
    /// styling rather than an error.
    pub fn verdict_style(&self, verdict: Verdict) -> &'static str {
        match (self.theme, verdict) {
            (Theme::Light, Verdict::Real) => "\x1b[32m",
            (Theme::Light, Verdict::Misinformation) => "\x1b[31m",
            (Theme::Light, Verdict::Uncertain) => "\x1b[33m",
            (Theme::Light, Verdict::Unknown) => "\x1b[37m",
            (Theme::Dark, Verdict::Real) => "\x1b[92m",
            (Theme::Dark, Verdict::Misinformation) => "\x1b[91m",
            (Theme::Dark, Verdict::Uncertain) => "\x1b[93m",
            (Theme::Dark, Verdict::Unknown) => "\x1b[97m",
        }
    }

    pub fn verdict_marker(&self, verdict: Verdict) -> &'static str {
        match verdict {
            Verdict::Real => "[+]",
            Verdict::Misinformation => "[x]",
            Verdict::Uncertain => "[?]",
            Verdict::Unknown => "[ ]",
        }
    }
}

/// Terminal rendering of a resolved analysis: verdict block, summary,
/// rationale and the evidence list in response order.
pub fn render_result(ctx: &RenderContext, result: &AnalysisResult, rationale: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}Final Verdict: {}{} (trust score {}%)\n",
        ctx.verdict_marker(result.final_label),
        ctx.verdict_style(result.final_label),
        result.final_label.as_label(),
        RESET,
        result.trust_score,
    ));
    out.push_str(&format!("Claim: {}\n", result.claim));

    if !result.summary.is_empty() {
        out.push_str(&format!("\nEvidence Summary:\n{}\n", result.summary));
    }

    out.push_str(&format!("\nWhy this verdict?\n{rationale}\n"));

    if !result.evidence.is_empty() {
        out.push_str("\nEvidence Sources:\n");
        for (idx, item) in result.evidence.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n     {}\n", idx + 1, item.title, item.link));
            if !item.snippet.is_empty() {
                out.push_str(&format!("     {}\n", item.snippet));
            }
        }
    }
    out
}
