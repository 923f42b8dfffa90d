use crate::error::ConvertError;
use std::path::Path;

/// Input formats the extractor knows how to read. Adding a format is a
/// one-place change: a new variant here plus its extraction module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Docx,
    Pdf,
    Html,
}

impl InputFormat {
    /// Resolve the format from the path's extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self, ConvertError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "docx" => Ok(Self::Docx),
            "pdf" => Ok(Self::Pdf),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(ConvertError::UnsupportedFormat(ext)),
        }
    }
}

/// Output formats the packager can produce. EPUB is currently the only
/// one implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Epub,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Result<Self, ConvertError> {
        match name {
            "epub" => Ok(Self::Epub),
            other => Err(ConvertError::UnsupportedOutputFormat(other.to_string())),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Epub => "epub",
        }
    }
}
