use anyhow::{Context, Result};
use ego_tree::NodeRef;
use scraper::{Html, Node};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Extract the visible text of an HTML document, one text node per
/// line. Markup is discarded; `<script>` and `<style>` subtrees are
/// dropped entirely.
pub fn extract_text(path: &Path) -> Result<String> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("Failed to read HTML: {}", path.display()))?;

    let document = Html::parse_document(&html);
    let mut parts = Vec::new();
    collect_text(document.tree.root(), &mut parts);

    debug!(
        "extracted {} text nodes from {}",
        parts.len(),
        path.display()
    );
    Ok(parts.join("\n"))
}

fn collect_text(node: NodeRef<'_, Node>, parts: &mut Vec<String>) {
    for child in node.children() {
        match child.value() {
            Node::Element(element) => {
                if matches!(element.name(), "script" | "style") {
                    continue;
                }
                collect_text(child, parts);
            }
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed.to_string());
                }
            }
            _ => {}
        }
    }
}
