use thiserror::Error;

/// Failures the conversion pipeline raises itself, before any document
/// I/O happens. Everything else (unreadable input, corrupt PDF, write
/// failure) propagates from the responsible stage via `anyhow`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// Input extension is not one of docx, pdf, html, htm.
    #[error("unsupported input format: .{0}")]
    UnsupportedFormat(String),

    /// Requested output format is not the one supported value.
    #[error("unsupported output format: {0}")]
    UnsupportedOutputFormat(String),
}
