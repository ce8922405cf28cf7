use crate::{
    config::Config,
    engine::{ConvertIn, ConvertOut, Engine},
    error::ConvertError,
    log_entry::{self, SystemInfo, UtilityParameters},
    metadata,
    paths::{self, ensure_parent_dir, validate_input},
    timer::{ProcessingTimer, ProcessingTiming},
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const DEFAULT_OCR_LANGUAGE: &str = "en";

/// Everything one conversion needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub input: PathBuf,
    /// Overrides `<input>.md`. Never moves the JSON log.
    pub output: Option<PathBuf>,
    pub ocr_languages: Vec<String>,
    pub do_ocr: bool,
    pub verbose: bool,
    pub enable_logging: bool,
    pub command_line: String,
}

impl ConversionRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            ocr_languages: vec![DEFAULT_OCR_LANGUAGE.to_string()],
            do_ocr: true,
            verbose: false,
            enable_logging: true,
            command_line: String::new(),
        }
    }

    pub fn from_config(input: impl Into<PathBuf>, cfg: &Config) -> Self {
        let mut req = Self::new(input).with_ocr_languages(cfg.ocr.langs.clone());
        req.do_ocr = cfg.ocr.enabled;
        req.enable_logging = cfg.processing_log.enabled;
        req
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Blank entries are dropped; an empty list falls back to the default language.
    pub fn with_ocr_languages<I, S>(mut self, langs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let langs: Vec<String> = langs
            .into_iter()
            .map(|l| l.as_ref().trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        self.ocr_languages = if langs.is_empty() {
            vec![DEFAULT_OCR_LANGUAGE.to_string()]
        } else {
            langs
        };
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_logging(mut self, enable_logging: bool) -> Self {
        self.enable_logging = enable_logging;
        self
    }

    pub fn with_command_line(mut self, command_line: impl Into<String>) -> Self {
        self.command_line = command_line.into();
        self
    }

    pub fn markdown_path(&self) -> PathBuf {
        paths::resolve_markdown_path(&self.input, self.output.as_deref())
    }

    pub fn log_path(&self) -> PathBuf {
        paths::log_output_path(&self.input)
    }
}

/// Engine output after the status check and Markdown export.
#[derive(Debug)]
pub struct ConversionOutcome {
    pub markdown: String,
    pub engine: ConvertOut,
}

pub struct Converter<E: Engine> {
    engine: E,
}

impl<E: Engine> Converter<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn convert(&self, req: &ConversionRequest) -> Result<String, ConvertError> {
        validate_input(&req.input)?;
        let outcome = self.run_engine(req)?;
        Ok(outcome.markdown)
    }

    /// Converts and writes the processing log. A failed log write is reported
    /// and otherwise ignored.
    pub fn convert_and_log(
        &self,
        req: &ConversionRequest,
    ) -> Result<(String, PathBuf), ConvertError> {
        validate_input(&req.input)?;

        let timer = ProcessingTimer::start();
        let outcome = self.run_engine(req)?;
        let timing = timer.stop();

        let output_path = req.markdown_path();
        let log_path = req.log_path();
        match self.write_processing_log(req, &outcome, &timing, &output_path, &log_path) {
            Ok(()) => info!("processing log written: {}", log_path.display()),
            Err(err) => warn!("{err}"),
        }

        Ok((outcome.markdown, output_path))
    }

    pub fn convert_and_save(&self, req: &ConversionRequest) -> Result<PathBuf, ConvertError> {
        let (markdown, output_path) = if req.enable_logging {
            self.convert_and_log(req)?
        } else {
            (self.convert(req)?, req.markdown_path())
        };

        save_markdown(&markdown, &output_path)?;
        info!(
            "markdown written: {} ({} bytes)",
            output_path.display(),
            markdown.len()
        );
        Ok(output_path)
    }

    fn run_engine(&self, req: &ConversionRequest) -> Result<ConversionOutcome, ConvertError> {
        info!(
            "engine={} input={} do_ocr={} langs={:?}",
            self.engine.name(),
            req.input.display(),
            req.do_ocr,
            req.ocr_languages
        );

        let input = ConvertIn {
            input_pdf: req.input.display().to_string(),
            do_ocr: req.do_ocr,
            ocr_langs: req.ocr_languages.clone(),
        };

        let out = self
            .engine
            .convert(&input)
            .map_err(|e| ConvertError::conversion(&req.input, e))?;

        if !out.is_success() {
            return Err(ConvertError::conversion(
                &req.input,
                format!("engine reported status {}", out.status),
            ));
        }

        let markdown = out
            .document
            .export_to_markdown()
            .map_err(|e| ConvertError::conversion(&req.input, e))?;

        debug!(status = %out.status, markdown_bytes = markdown.len(), "engine done");
        Ok(ConversionOutcome {
            markdown,
            engine: out,
        })
    }

    fn write_processing_log(
        &self,
        req: &ConversionRequest,
        outcome: &ConversionOutcome,
        timing: &ProcessingTiming,
        output_path: &Path,
        log_path: &Path,
    ) -> Result<(), ConvertError> {
        let document_metadata = metadata::extract(
            &*outcome.engine.document,
            &req.input,
            &outcome.engine.status,
        );
        let entry = log_entry::assemble(
            timing,
            document_metadata,
            UtilityParameters {
                input_file: req.input.display().to_string(),
                output_file: output_path.display().to_string(),
                ocr_languages: req.ocr_languages.clone(),
                verbose_mode: req.verbose,
                command_line: req.command_line.clone(),
            },
            SystemInfo::collect(
                outcome.engine.engine_version.as_deref(),
                outcome.engine.runtime_version.as_deref(),
            ),
        );

        log_entry::write_log(&entry, log_path).map_err(|e| ConvertError::LoggingFailure {
            path: log_path.to_path_buf(),
            source: Box::new(e),
        })
    }
}

pub fn save_markdown(content: &str, path: &Path) -> Result<(), ConvertError> {
    ensure_parent_dir(path).map_err(|e| ConvertError::write(path, e))?;
    std::fs::write(path, content).map_err(|e| ConvertError::write(path, e))
}
