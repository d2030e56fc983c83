use crate::report::layout::{Document, Page};

/// Serializes a laid-out [`Document`] into a PDF 1.4 byte stream.
///
/// The writer emits uncompressed content streams and the built-in
/// Helvetica font only, and stamps no dates or generated identifiers,
/// so the same Document always renders to the same bytes.
pub fn render(document: &Document) -> Vec<u8> {
    let page_count = document.pages.len();

    // Objects: 1 catalog, 2 page tree, 3 font, then a page object and a
    // content stream per page.
    let mut bodies: Vec<String> = Vec::with_capacity(3 + page_count * 2);
    bodies.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());

    let kids = (0..page_count)
        .map(|i| format!("{} 0 R", 4 + 2 * i))
        .collect::<Vec<_>>()
        .join(" ");
    bodies.push(format!(
        "<< /Type /Pages /Kids [{kids}] /Count {page_count} >>"
    ));
    bodies.push(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    );

    for (i, page) in document.pages.iter().enumerate() {
        let content = content_stream(page, document.height);
        bodies.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            coord(document.width),
            coord(document.height),
            5 + 2 * i,
        ));
        bodies.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ));
    }

    let mut out: Vec<u8> = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(bodies.len());
    for (i, body) in bodies.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", bodies.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            bodies.len() + 1
        )
        .as_bytes(),
    );
    out
}

fn content_stream(page: &Page, page_height: f64) -> String {
    let mut ops = Vec::with_capacity(page.blocks.len());
    for block in &page.blocks {
        // Layout y grows downward; PDF user space grows upward.
        let baseline = page_height - block.y;
        ops.push(format!(
            "BT\n/F1 {} Tf\n{} {} Td\n({}) Tj\nET",
            coord(block.size),
            coord(block.x),
            coord(baseline),
            escape_text(&block.text),
        ));
    }
    ops.join("\n")
}

fn coord(value: f64) -> String {
    format!("{value:.2}")
}

// Escapes a string for a PDF literal. Latin-1 code points become octal
// escapes; anything beyond Latin-1 degrades to '?' since the base-14
// Helvetica font cannot address it.
pub(crate) fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\\' => out.push_str("\\\\"),
            ' '..='~' => out.push(c),
            _ => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\{code:03o}"));
                } else {
                    out.push('?');
                }
            }
        }
    }
    out
}
