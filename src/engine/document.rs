//! Read-only view over the document model an engine returns.
//!
//! Engines are free to leave any attribute out. Accessors report absence as
//! `None` and malformed data as `Err`; callers in [`crate::metadata`] turn
//! both into neutral defaults.

use anyhow::{Result, anyhow};
use serde_json::Value;

/// One content element of a converted document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocElement {
    /// 0-based page index.
    pub page: Option<u32>,
    pub text: Option<String>,
    /// Free-form provenance, e.g. `"ocr"` or `"pdf_backend"`.
    pub source: Option<String>,
}

pub trait DocumentModel {
    fn export_to_markdown(&self) -> Result<String>;

    /// Length of the model's explicit page collection, if it has one.
    fn page_collection_len(&self) -> Result<Option<usize>> {
        Ok(None)
    }

    fn elements(&self) -> Result<Vec<DocElement>> {
        Ok(Vec::new())
    }
}

/// Document model decoded from the bridge script's JSON output.
#[derive(Debug, Clone, Default)]
pub struct JsonDocument {
    markdown: Option<String>,
    body: Value,
}

impl JsonDocument {
    pub fn new(markdown: Option<String>, body: Value) -> Self {
        Self { markdown, body }
    }
}

impl DocumentModel for JsonDocument {
    fn export_to_markdown(&self) -> Result<String> {
        self.markdown
            .clone()
            .ok_or_else(|| anyhow!("document has no markdown export"))
    }

    fn page_collection_len(&self) -> Result<Option<usize>> {
        match self.body.get("pages") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(pages)) => Ok(Some(pages.len())),
            Some(Value::Object(pages)) => Ok(Some(pages.len())),
            Some(Value::Number(n)) => n
                .as_u64()
                .map(|n| Some(n as usize))
                .ok_or_else(|| anyhow!("pages is not a non-negative integer: {n}")),
            Some(other) => Err(anyhow!("pages has unexpected type: {other}")),
        }
    }

    fn elements(&self) -> Result<Vec<DocElement>> {
        let raw = self
            .body
            .get("elements")
            .or_else(|| self.body.get("main_text"));
        match raw {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items.iter().map(element_from_json).collect()),
            Some(other) => Err(anyhow!("elements is not an array: {other}")),
        }
    }
}

fn element_from_json(v: &Value) -> DocElement {
    DocElement {
        page: v
            .get("page")
            .and_then(Value::as_u64)
            .and_then(|p| u32::try_from(p).ok()),
        text: v.get("text").and_then(Value::as_str).map(str::to_string),
        source: match v.get("source") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        },
    }
}
