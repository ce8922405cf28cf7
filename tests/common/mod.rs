#![allow(dead_code)]

use anyhow::{Result, anyhow};
use pdf_to_md::engine::{ConvertIn, ConvertOut, Engine, JsonDocument};
use serde_json::{Value, json};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

/// Deterministic stand-in for Docling.
pub struct MockEngine {
    calls: Cell<usize>,
    last_request: RefCell<Option<ConvertIn>>,
    status: String,
    markdown: Option<String>,
    document: Value,
    fail: Option<String>,
}

impl MockEngine {
    pub fn ok(markdown: &str) -> Self {
        Self {
            calls: Cell::new(0),
            last_request: RefCell::new(None),
            status: "success".into(),
            markdown: Some(markdown.into()),
            document: json!({
                "pages": [{}, {}, {}],
                "elements": [
                    {"page": 0, "text": "Title", "source": "pdf_backend"},
                    {"page": 1, "text": "Body", "source": "EasyOCR"},
                    {"page": 2, "text": "   "}
                ]
            }),
            fail: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail: Some(msg.into()),
            ..Self::ok("")
        }
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_document(mut self, document: Value) -> Self {
        self.document = document;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_request(&self) -> Option<ConvertIn> {
        self.last_request.borrow().clone()
    }
}

impl Engine for MockEngine {
    fn name(&self) -> &str {
        "mock"
    }

    fn convert(&self, req: &ConvertIn) -> Result<ConvertOut> {
        self.calls.set(self.calls.get() + 1);
        *self.last_request.borrow_mut() = Some(req.clone());
        if let Some(msg) = &self.fail {
            return Err(anyhow!(msg.clone()));
        }
        Ok(ConvertOut {
            status: self.status.clone(),
            document: Box::new(JsonDocument::new(
                self.markdown.clone(),
                self.document.clone(),
            )),
            engine_version: Some("2.0.0-mock".into()),
            runtime_version: None,
        })
    }
}

pub fn write_pdf(dir: &Path, name: &str) -> PathBuf {
    let p = dir.join(name);
    std::fs::write(&p, b"%PDF-1.4\n% fixture\n").expect("write fixture pdf");
    p
}
