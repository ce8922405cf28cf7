use super::document::DocumentModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertIn {
    pub input_pdf: String,
    pub do_ocr: bool,
    pub ocr_langs: Vec<String>,
}

/// What the engine hands back for one document.
pub struct ConvertOut {
    pub status: String,
    pub document: Box<dyn DocumentModel>,
    pub engine_version: Option<String>,
    pub runtime_version: Option<String>,
}

impl ConvertOut {
    /// Accepts `success` as well as enum renderings like `ConversionStatus.SUCCESS`.
    pub fn is_success(&self) -> bool {
        let status = self.status.trim();
        let tail = status.rsplit('.').next().unwrap_or(status);
        tail.eq_ignore_ascii_case("success")
    }
}

impl std::fmt::Debug for ConvertOut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConvertOut")
            .field("status", &self.status)
            .field("engine_version", &self.engine_version)
            .field("runtime_version", &self.runtime_version)
            .finish_non_exhaustive()
    }
}

/// Wire shape printed by `docling_runner.py`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerOut {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub markdown: Option<String>,
    #[serde(default)]
    pub document: serde_json::Value,
    #[serde(default)]
    pub docling_version: Option<String>,
    #[serde(default)]
    pub python_version: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
