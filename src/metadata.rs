//! Best-effort facts about a converted document.
//!
//! Nothing here fails: a model that lacks an attribute, or returns garbage for
//! it, yields `None`, `false` or `0`.

use crate::{
    engine::{DocElement, DocumentModel},
    util::{hash_file, round_to},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub file_size_bytes: Option<u64>,
    pub file_sha256: Option<String>,
    pub page_count: Option<u32>,
    pub has_ocr_content: bool,
    pub estimated_text_pages: u32,
    pub conversion_status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProcessingSpeed {
    pub seconds_per_page: Option<f64>,
    pub pages_per_minute: Option<f64>,
    pub pages_per_second: Option<f64>,
}

pub fn extract(doc: &dyn DocumentModel, input: &Path, status: &str) -> DocumentMetadata {
    let file_size_bytes = std::fs::metadata(input).ok().map(|m| m.len());
    let file_sha256 = match hash_file(input) {
        Ok(h) => Some(h),
        Err(err) => {
            debug!("hashing {} failed: {err:#}", input.display());
            None
        }
    };

    DocumentMetadata {
        file_size_bytes,
        file_sha256,
        page_count: page_count(doc),
        has_ocr_content: has_ocr_content(doc),
        estimated_text_pages: estimated_text_pages(doc),
        conversion_status: status.to_string(),
    }
}

pub fn page_count(doc: &dyn DocumentModel) -> Option<u32> {
    if let Ok(Some(n)) = doc.page_collection_len() {
        if n > 0 {
            return u32::try_from(n).ok();
        }
    }

    elements(doc)
        .iter()
        .filter_map(|e| e.page)
        .max()
        .map(|max| max.saturating_add(1)) // 0-based indices
}

/// Heuristic: some element's provenance mentions OCR.
pub fn has_ocr_content(doc: &dyn DocumentModel) -> bool {
    elements(doc).iter().any(|e| {
        e.source
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains("ocr"))
    })
}

pub fn estimated_text_pages(doc: &dyn DocumentModel) -> u32 {
    let pages: BTreeSet<u32> = elements(doc)
        .iter()
        .filter(|e| e.text.as_deref().is_some_and(|t| !t.trim().is_empty()))
        .filter_map(|e| e.page)
        .collect();
    pages.len() as u32
}

pub fn processing_speed(page_count: Option<u32>, duration_seconds: f64) -> ProcessingSpeed {
    let pages = match page_count {
        Some(p) if p > 0 && duration_seconds > 0.0 => f64::from(p),
        _ => return ProcessingSpeed::default(),
    };

    ProcessingSpeed {
        seconds_per_page: Some(round_to(duration_seconds / pages, 2)),
        pages_per_minute: Some(round_to(pages / duration_seconds * 60.0, 2)),
        pages_per_second: Some(round_to(pages / duration_seconds, 4)),
    }
}

fn elements(doc: &dyn DocumentModel) -> Vec<DocElement> {
    doc.elements().unwrap_or_else(|err| {
        debug!("document elements unavailable: {err:#}");
        Vec::new()
    })
}
