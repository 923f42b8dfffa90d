use anyhow::{Context, Result};
use docx_rust::document::{BodyContent, Paragraph, ParagraphContent, Run, RunContent};
use docx_rust::DocxFile;
use std::path::Path;
use tracing::debug;

/// Extract plain text from a DOCX file, one line per paragraph in
/// document order. Tables, images, and styling are ignored; empty
/// paragraphs still contribute their line.
pub fn extract_text(path: &Path) -> Result<String> {
    let file = DocxFile::from_file(path)
        .map_err(|e| anyhow::anyhow!("{}", e))
        .with_context(|| format!("Failed to open DOCX: {}", path.display()))?;
    let docx = file
        .parse()
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Failed to parse DOCX content")?;

    let mut paragraphs = Vec::new();
    for content in &docx.document.body.content {
        if let BodyContent::Paragraph(para) = content {
            paragraphs.push(paragraph_text(para));
        }
    }

    debug!(
        "extracted {} paragraphs from {}",
        paragraphs.len(),
        path.display()
    );
    Ok(paragraphs.join("\n"))
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();

    for pc in &para.content {
        match pc {
            ParagraphContent::Run(run) => collect_run_text(run, &mut text),
            ParagraphContent::Link(link) => {
                if let Some(ref run) = link.content {
                    collect_run_text(run, &mut text);
                }
            }
            _ => {}
        }
    }

    text
}

fn collect_run_text(run: &Run, text: &mut String) {
    for rc in &run.content {
        match rc {
            RunContent::Text(t) => text.push_str(&t.text),
            RunContent::Break(_) => text.push('\n'),
            RunContent::Tab(_) => text.push('\t'),
            _ => {}
        }
    }
}
