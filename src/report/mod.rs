pub mod layout;
pub mod pdf;

pub use layout::{lay_out, Document, Page, TextBlock};

use crate::models::AnalysisResult;
use anyhow::Context;
use std::fs;
use std::path::Path;

pub const DEFAULT_REPORT_FILENAME: &str = "FactCheck_Report.pdf";

/// Lays out and renders the report in one step. Exporting the same
/// result twice yields byte-identical documents.
pub fn export(result: &AnalysisResult) -> Vec<u8> {
    pdf::render(&layout::lay_out(result))
}

pub fn save(result: &AnalysisResult, path: &Path) -> anyhow::Result<()> {
    fs::write(path, export(result))
        .with_context(|| format!("failed to write report to {}", path.display()))
}
