use crate::{
    config::Config,
    converter::{ConversionRequest, Converter},
    engine::python::PythonEngine,
    error::ConvertError,
    paths::validate_input,
    util::ensure_dir,
};
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "pdf-to-md", version)]
#[command(about = "Convert a PDF to Markdown using Docling with OCR")]
pub struct Args {
    /// PDF to convert. Markdown is written next to it as <file>.pdf.md,
    /// the processing log as <file>.json.
    pub pdf_path: PathBuf,

    /// Write Markdown here instead of <file>.pdf.md.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Comma-separated OCR languages, e.g. "en,de".
    #[arg(long, value_delimiter = ',')]
    pub ocr_languages: Vec<String>,

    #[arg(short, long)]
    pub verbose: bool,

    /// Skip the JSON processing log.
    #[arg(long)]
    pub disable_logging: bool,

    /// Path to config TOML. If omitted, uses ./pdf-to-md.toml if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace/debug/info/warn/error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn dispatch(args: Args) -> Result<()> {
    let cfg = Config::resolve(args.config.as_deref())?;
    let log_path = resolve_log_path(&cfg);
    let _guard = init_logging(&args, &cfg, log_path.as_deref())?;

    let req = build_request(&args, &cfg, recorded_command_line());
    debug!(?req, "conversion request");

    // Input problems are reported before the engine bridge is touched.
    validate_input(&req.input)?;
    let engine = PythonEngine::new(&cfg)?;
    let converter = Converter::new(engine);
    let output_path = converter.convert_and_save(&req)?;

    println!("Successfully converted PDF to Markdown: {}", output_path.display());
    let json_path = req.log_path();
    if req.enable_logging && json_path.exists() {
        println!("Processing details saved to: {}", json_path.display());
    }
    info!("done input={}", req.input.display());
    Ok(())
}

pub fn build_request(args: &Args, cfg: &Config, command_line: String) -> ConversionRequest {
    let mut req = ConversionRequest::from_config(&args.pdf_path, cfg)
        .with_verbose(args.verbose)
        .with_command_line(command_line);
    if !args.ocr_languages.is_empty() {
        req = req.with_ocr_languages(&args.ocr_languages);
    }
    if args.disable_logging {
        req = req.with_logging(false);
    }
    if let Some(out) = &args.output {
        req = req.with_output(out);
    }
    req
}

/// Prints `err` to stderr with its category prefix. In verbose mode an
/// unexpected error also gets its cause chain and a stack trace; the trace is
/// taken here when the error did not capture one (`RUST_BACKTRACE` unset).
pub fn report_error(err: &anyhow::Error, verbose: bool) {
    match err.downcast_ref::<ConvertError>() {
        Some(e) => eprintln!("{}: {e}", e.prefix()),
        None => {
            eprintln!("Unexpected error: {err:#}");
            if verbose {
                eprintln!("{err:?}");
                if err.backtrace().status() != BacktraceStatus::Captured {
                    eprintln!("{}", Backtrace::force_capture());
                }
            }
        }
    }
}

fn recorded_command_line() -> String {
    std::env::args().collect::<Vec<_>>().join(" ")
}

fn init_logging(args: &Args, cfg: &Config, file_path: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match args.log_level.as_deref() {
        Some(level) => level,
        None if args.verbose => "debug",
        None => cfg.logging.level.as_str(),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = if cfg.logging.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    };

    let (file_layer, guard) = if let Some(path) = file_path {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        ensure_dir(parent)?;
        let file = std::fs::File::create(path)
            .with_context(|| format!("create log file: {}", path.display()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(guard)
}

fn resolve_log_path(cfg: &Config) -> Option<PathBuf> {
    if cfg.logging.file_path.is_empty() {
        None
    } else {
        Some(PathBuf::from(&cfg.logging.file_path))
    }
}
