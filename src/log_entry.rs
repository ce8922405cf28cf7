//! The per-conversion processing record and its JSON persistence.

use crate::{
    error::ConvertError,
    metadata::{DocumentMetadata, ProcessingSpeed, processing_speed},
    paths::ensure_parent_dir,
    timer::ProcessingTiming,
    util::{rfc3339, round_to},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub processing_details: ProcessingDetails,
    pub document_metadata: DocumentMetadata,
    pub processing_speed: ProcessingSpeed,
    pub utility_parameters: UtilityParameters,
    pub system_info: SystemInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingDetails {
    pub processing_time_seconds: f64,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityParameters {
    pub input_file: String,
    pub output_file: String,
    pub ocr_languages: Vec<String>,
    pub verbose_mode: bool,
    pub command_line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub utility_version: String,
    pub docling_version: String,
    pub runtime_version: String,
    pub platform: String,
    pub architecture: String,
}

impl SystemInfo {
    pub fn collect(engine_version: Option<&str>, runtime_version: Option<&str>) -> Self {
        Self {
            utility_version: env!("CARGO_PKG_VERSION").to_string(),
            docling_version: engine_version.unwrap_or(UNKNOWN).to_string(),
            runtime_version: runtime_version.unwrap_or(UNKNOWN).to_string(),
            platform: format!("{}-{}", std::env::consts::OS, std::env::consts::FAMILY),
            architecture: std::env::consts::ARCH.to_string(),
        }
    }
}

/// Builds the record. No I/O.
pub fn assemble(
    timing: &ProcessingTiming,
    document_metadata: DocumentMetadata,
    utility_parameters: UtilityParameters,
    system_info: SystemInfo,
) -> LogEntry {
    let processing_speed = processing_speed(document_metadata.page_count, timing.duration_seconds);
    LogEntry {
        processing_details: ProcessingDetails {
            processing_time_seconds: round_to(timing.duration_seconds, 3),
            start_time: Some(rfc3339(timing.start_time)),
            end_time: Some(rfc3339(timing.end_time)),
        },
        document_metadata,
        processing_speed,
        utility_parameters,
        system_info,
    }
}

pub fn to_json(entry: &LogEntry) -> serde_json::Result<String> {
    let mut raw = serde_json::to_string_pretty(entry)?;
    raw.push('\n');
    Ok(raw)
}

pub fn write_log(entry: &LogEntry, path: &Path) -> Result<(), ConvertError> {
    let raw = to_json(entry).map_err(|e| ConvertError::write(path, e.into()))?;
    ensure_parent_dir(path).map_err(|e| ConvertError::write(path, e))?;
    std::fs::write(path, raw).map_err(|e| ConvertError::write(path, e))
}
