use crate::models::AnalysisResult;

// A4 portrait in points. Coordinates measure down from the top-left
// corner, matching the legacy report renderer; the PDF writer flips y.
pub const PAGE_WIDTH: f64 = 595.0;
pub const PAGE_HEIGHT: f64 = 842.0;

const MARGIN_X: f64 = 40.0;
const INDENT_X: f64 = 60.0;
const BOTTOM_LIMIT: f64 = 800.0;

const TITLE_Y: f64 = 50.0;
const CLAIM_Y: f64 = 100.0;
const VERDICT_Y: f64 = 130.0;
const TRUST_Y: f64 = 160.0;
const DECISIONS_HEADER_Y: f64 = 200.0;
const ML_Y: f64 = 220.0;
const GEMINI_Y: f64 = 240.0;
const LLAMA_Y: f64 = 260.0;
const SUMMARY_HEADER_Y: f64 = 310.0;
const SUMMARY_BODY_Y: f64 = 330.0;
const SUMMARY_LINE_STEP: f64 = 15.0;
const SUMMARY_MAX_LINES: usize = 7;
const EVIDENCE_HEADER_Y: f64 = 450.0;
const EVIDENCE_FIRST_Y: f64 = 470.0;
const EVIDENCE_ITEM_STEP: f64 = 40.0;
const EVIDENCE_LINK_OFFSET: f64 = 15.0;
const CONTINUATION_TOP_Y: f64 = 50.0;

const TITLE_SIZE: f64 = 22.0;
const HEADER_SIZE: f64 = 14.0;
const BODY_SIZE: f64 = 12.0;
const SMALL_SIZE: f64 = 11.0;

const CONTENT_WIDTH: f64 = 520.0;

#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub blocks: Vec<TextBlock>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    pub pages: Vec<Page>,
}

/// Places every report field at its fixed offset. The scalar fields and
/// the summary keep the legacy single-page positions; the summary is
/// clipped to its region with a trailing ellipsis, while the evidence
/// list flows onto continuation pages once it would cross the bottom
/// margin. Pure function of the result.
pub fn lay_out(result: &AnalysisResult) -> Document {
    let mut page = Page::default();

    page.blocks.push(block(MARGIN_X, TITLE_Y, TITLE_SIZE, "Fact-Check Report"));
    page.blocks.push(block(
        MARGIN_X,
        CLAIM_Y,
        BODY_SIZE,
        format!("Claim: {}", result.claim),
    ));
    page.blocks.push(block(
        MARGIN_X,
        VERDICT_Y,
        BODY_SIZE,
        format!("Final Verdict: {}", result.final_label.as_label()),
    ));
    page.blocks.push(block(
        MARGIN_X,
        TRUST_Y,
        BODY_SIZE,
        format!("Trust Score: {}%", result.trust_score),
    ));

    page.blocks.push(block(MARGIN_X, DECISIONS_HEADER_Y, BODY_SIZE, "Model Decisions:"));
    page.blocks.push(block(
        INDENT_X,
        ML_Y,
        BODY_SIZE,
        format!("- ML (MNLI): {}", result.ml_label.as_label()),
    ));
    page.blocks.push(block(
        INDENT_X,
        GEMINI_Y,
        BODY_SIZE,
        format!("- Gemini: {}", result.gemini_label.as_label()),
    ));
    page.blocks.push(block(
        INDENT_X,
        LLAMA_Y,
        BODY_SIZE,
        format!("- LLaMA: {}", result.openrouter_label.as_label()),
    ));

    page.blocks.push(block(MARGIN_X, SUMMARY_HEADER_Y, HEADER_SIZE, "Summary:"));
    for (idx, line) in summary_lines(&result.summary).into_iter().enumerate() {
        page.blocks.push(block(
            MARGIN_X,
            SUMMARY_BODY_Y + idx as f64 * SUMMARY_LINE_STEP,
            SMALL_SIZE,
            line,
        ));
    }

    page.blocks.push(block(MARGIN_X, EVIDENCE_HEADER_Y, HEADER_SIZE, "Evidence Sources:"));

    let mut pages = Vec::new();
    let mut y = EVIDENCE_FIRST_Y;
    for (idx, item) in result.evidence.iter().enumerate() {
        if y + EVIDENCE_LINK_OFFSET > BOTTOM_LIMIT {
            pages.push(std::mem::take(&mut page));
            y = CONTINUATION_TOP_Y;
        }
        page.blocks.push(block(
            MARGIN_X,
            y,
            SMALL_SIZE,
            format!("{}. {}", idx + 1, item.title),
        ));
        page.blocks
            .push(block(MARGIN_X, y + EVIDENCE_LINK_OFFSET, SMALL_SIZE, item.link.clone()));
        y += EVIDENCE_ITEM_STEP;
    }
    pages.push(page);

    Document {
        width: PAGE_WIDTH,
        height: PAGE_HEIGHT,
        pages,
    }
}

fn block(x: f64, y: f64, size: f64, text: impl Into<String>) -> TextBlock {
    TextBlock {
        x,
        y,
        size,
        text: text.into(),
    }
}

fn summary_lines(summary: &str) -> Vec<String> {
    let mut lines = wrap(summary, chars_per_line(SMALL_SIZE));
    if lines.len() > SUMMARY_MAX_LINES {
        lines.truncate(SUMMARY_MAX_LINES);
        if let Some(last) = lines.last_mut() {
            last.push_str(" ...");
        }
    }
    lines
}

// Character budget approximating the metric wrap of the legacy
// renderer: average glyph width of half the font size.
fn chars_per_line(size: f64) -> usize {
    (CONTENT_WIDTH / (size * 0.5)) as usize
}

/// Greedy word wrap at a fixed character budget. Runs of whitespace
/// collapse to single spaces; words longer than the budget are
/// hard-split so no line ever exceeds it.
pub(crate) fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        for piece in split_long_word(word, max_chars) {
            let piece_len = piece.chars().count();
            if current_len == 0 {
                current = piece;
                current_len = piece_len;
            } else if current_len + 1 + piece_len <= max_chars {
                current.push(' ');
                current.push_str(&piece);
                current_len += 1 + piece_len;
            } else {
                lines.push(std::mem::take(&mut current));
                current = piece;
                current_len = piece_len;
            }
        }
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

fn split_long_word(word: &str, max_chars: usize) -> Vec<String> {
    if word.chars().count() <= max_chars {
        return vec![word.to_string()];
    }
    let chars: Vec<char> = word.chars().collect();
    chars
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
