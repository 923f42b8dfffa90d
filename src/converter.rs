use crate::cleaner;
use crate::cli::Cli;
use crate::epub_writer;
use crate::format::{InputFormat, OutputFormat};
use crate::{docx_reader, html_reader, pdf_reader};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn convert(cli: &Cli) -> Result<()> {
    let output_path = run(&cli.input, &cli.title, &cli.author, &cli.format)?;
    println!("{}", output_path.display());
    Ok(())
}

/// Convert one document into an e-book package and return the output
/// path. Each call is an independent, stateless transaction.
///
/// The output path is the input path with its extension replaced by the
/// e-book extension; an existing file there is overwritten.
pub fn run(input: &Path, title: &str, author: &str, output_format: &str) -> Result<PathBuf> {
    let input_format = InputFormat::from_path(input)?;
    let output_format = OutputFormat::from_name(output_format)?;

    let raw = match input_format {
        InputFormat::Docx => docx_reader::extract_text(input)?,
        InputFormat::Pdf => pdf_reader::extract_text(input)?,
        InputFormat::Html => html_reader::extract_text(input)?,
    };
    debug!(
        "extracted {} chars from {}",
        raw.len(),
        input.display()
    );

    let cleaned = cleaner::clean(&raw);

    let output_path = input.with_extension(output_format.extension());
    match output_format {
        OutputFormat::Epub => epub_writer::write_epub(title, author, &cleaned, &output_path)?,
    }

    Ok(output_path)
}
