use clap::Parser;
use std::path::PathBuf;

/// Convert a DOCX, PDF, or HTML document into a single-chapter EPUB
#[derive(Parser, Debug)]
#[command(name = "doc2epub", version, about)]
pub struct Cli {
    /// Path to the input document (.docx, .pdf, .html, .htm)
    pub input: PathBuf,

    /// Book title for the EPUB metadata
    #[arg(short, long)]
    pub title: String,

    /// Book author for the EPUB metadata
    #[arg(short, long)]
    pub author: String,

    /// Output format (only "epub" is supported)
    #[arg(short, long, default_value = "epub")]
    pub format: String,
}
