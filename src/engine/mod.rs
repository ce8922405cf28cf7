pub mod document;
pub mod python;
pub mod types;

use anyhow::Result;

pub use document::{DocElement, DocumentModel, JsonDocument};
pub use types::{ConvertIn, ConvertOut, RunnerOut};

/// A PDF conversion backend. One call per request; errors are terminal.
pub trait Engine {
    fn name(&self) -> &str;
    fn convert(&self, req: &ConvertIn) -> Result<ConvertOut>;
}
