//! Input validation and output path derivation.

use crate::error::ConvertError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const PDF_EXTENSION: &str = "pdf";
pub const MARKDOWN_SUFFIX: &str = ".md";
pub const LOG_EXTENSION: &str = "json";

pub fn validate_input(input: &Path) -> Result<(), ConvertError> {
    if !input.exists() {
        return Err(ConvertError::NotFound {
            path: input.to_path_buf(),
        });
    }

    if !input.is_file() {
        return Err(ConvertError::InvalidInput {
            path: input.to_path_buf(),
            reason: "not a regular file".into(),
        });
    }

    match input.extension().and_then(|s| s.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case(PDF_EXTENSION) => Ok(()),
        Some(ext) => Err(ConvertError::InvalidInput {
            path: input.to_path_buf(),
            reason: format!("unsupported extension .{ext}"),
        }),
        None => Err(ConvertError::InvalidInput {
            path: input.to_path_buf(),
            reason: "missing .pdf extension".into(),
        }),
    }
}

/// `doc.pdf` -> `doc.pdf.md`; the original extension is kept.
pub fn markdown_output_path(input: &Path) -> PathBuf {
    let mut raw: OsString = input.as_os_str().to_owned();
    raw.push(MARKDOWN_SUFFIX);
    PathBuf::from(raw)
}

/// `doc.pdf` -> `doc.json`. Not affected by an explicit Markdown output path.
pub fn log_output_path(input: &Path) -> PathBuf {
    input.with_extension(LOG_EXTENSION)
}

pub fn resolve_markdown_path(input: &Path, explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| markdown_output_path(input))
}

pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
