use super::{Engine, JsonDocument, types::*};
use crate::config::Config;
use anyhow::{Context, Result, anyhow};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

const RUNNER_SCRIPT: &str = "docling_runner.py";

/// Docling reached through a Python child process speaking JSON on stdio.
pub struct PythonEngine {
    cfg: Config,
    scripts_dir: PathBuf,
    python_exe: PathBuf,
}

impl PythonEngine {
    pub fn new(cfg: &Config) -> Result<Self> {
        let scripts_dir = PathBuf::from(&cfg.engine.scripts_dir);
        if cfg.engine.pin_scripts_dir {
            let cwd = std::env::current_dir().with_context(|| "current_dir")?;
            let canon = scripts_dir
                .canonicalize()
                .with_context(|| format!("canonicalize scripts_dir: {}", scripts_dir.display()))?;
            if !canon.starts_with(&cwd) {
                return Err(anyhow!(
                    "scripts_dir is outside cwd while pin_scripts_dir=true: {}",
                    canon.display()
                ));
            }
        }
        let runner = scripts_dir.join(RUNNER_SCRIPT);
        if !runner.exists() {
            return Err(anyhow!("missing script: {}", runner.display()));
        }
        let python_exe = resolve_python_exe(&cfg.engine.python_exe)?;
        Ok(Self {
            cfg: cfg.clone(),
            scripts_dir,
            python_exe,
        })
    }

    fn run_json<I: serde::Serialize, O: for<'de> serde::Deserialize<'de>>(
        &self,
        script: &Path,
        input: &I,
    ) -> Result<O> {
        debug!("python run {} exe={}", script.display(), self.python_exe.display());
        let mut cmd = Command::new(&self.python_exe);
        cmd.arg(script);
        cmd.stdin(Stdio::piped());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        for (k, v) in &self.cfg.engine.env {
            cmd.env(k, v);
        }

        let mut child = cmd
            .spawn()
            .with_context(|| format!("spawning python: {}", script.display()))?;

        {
            let mut stdin = child.stdin.take().ok_or_else(|| anyhow!("no stdin"))?;
            let bytes = serde_json::to_vec(input)?;
            stdin.write_all(&bytes)?;
            stdin.flush().ok();
        }

        // Conversion can take minutes on OCR-heavy input; no timeout here.
        let output = child
            .wait_with_output()
            .with_context(|| "waiting for python")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "python script failed: {}\n{}",
                script.display(),
                stderr
            ));
        }

        if self.cfg.engine.keep_stderr && !output.stderr.is_empty() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("python stderr {}: {}", script.display(), stderr.trim());
        }

        let out: O = serde_json::from_slice(&output.stdout)
            .with_context(|| format!("parsing python JSON output: {}", script.display()))?;
        Ok(out)
    }
}

impl Engine for PythonEngine {
    fn name(&self) -> &str {
        "docling"
    }

    fn convert(&self, req: &ConvertIn) -> Result<ConvertOut> {
        let script = self.scripts_dir.join(RUNNER_SCRIPT);
        let out: RunnerOut = self.run_json(
            &script,
            &serde_json::json!({
                "cmd": "convert",
                "input_pdf": req.input_pdf,
                "do_ocr": req.do_ocr,
                "ocr_langs": req.ocr_langs,
            }),
        )?;

        if !out.ok {
            let msg = out
                .error
                .unwrap_or_else(|| "docling convert returned ok=false".to_string());
            return Err(anyhow!(msg));
        }

        let status = out.status.unwrap_or_else(|| {
            warn!("docling runner did not report a status");
            "unknown".to_string()
        });

        Ok(ConvertOut {
            status,
            document: Box::new(JsonDocument::new(out.markdown, out.document)),
            engine_version: out.docling_version,
            runtime_version: out.python_version,
        })
    }
}

fn resolve_python_exe(raw: &str) -> Result<PathBuf> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("auto") {
        if let Ok(env_val) = std::env::var("DOCLING_PYTHON") {
            let p = expand_tilde(&env_val);
            if p.exists() {
                return Ok(p);
            }
        }
        return Ok(PathBuf::from("python3"));
    }
    Ok(expand_tilde(raw))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(path)
}
