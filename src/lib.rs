//! Convert PDFs to Markdown through Docling and record a JSON processing log
//! next to each input.

pub mod cli;
pub mod config;
pub mod converter;
pub mod engine;
pub mod error;
pub mod log_entry;
pub mod metadata;
pub mod paths;
pub mod timer;
pub mod util;

pub use converter::{ConversionRequest, Converter};
pub use error::ConvertError;
