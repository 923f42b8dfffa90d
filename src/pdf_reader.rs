use anyhow::{Context, Result};
use lopdf::Document;
use std::path::Path;
use tracing::{debug, warn};

/// Extract plain text from a PDF, page by page in document order.
///
/// Each page's text is followed by exactly one newline. A page whose
/// extraction yields no text contributes an empty segment so page
/// boundaries stay aligned with the source; it is neither skipped nor
/// treated as an error. Structural load failures propagate.
pub fn extract_text(path: &Path) -> Result<String> {
    let doc = Document::load(path)
        .with_context(|| format!("Failed to open PDF: {}", path.display()))?;

    let pages = doc.get_pages();
    let mut text = String::new();

    for page_number in pages.keys() {
        let page_text = doc.extract_text(&[*page_number]).unwrap_or_default();
        if page_text.trim().is_empty() {
            warn!("page {} of {} has no extractable text", page_number, path.display());
        }
        text.push_str(page_text.trim_end());
        text.push('\n');
    }

    debug!(
        "extracted {} pages ({} chars) from {}",
        pages.len(),
        text.len(),
        path.display()
    );
    Ok(text)
}
