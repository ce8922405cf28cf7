use std::path::Path;
use std::process::{Command, Output};

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pdf-to-md"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn pdf-to-md")
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn missing_pdf_exits_one_with_error_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.pdf");

    let out = run(dir.path(), &[missing.to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.starts_with("Error: PDF file not found"), "stderr: {err}");
    assert!(!dir.path().join("nope.pdf.md").exists());
}

#[test]
fn non_pdf_exits_one_with_error_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let txt = dir.path().join("notes.txt");
    std::fs::write(&txt, b"plain text").unwrap();

    let out = run(dir.path(), &[txt.to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.starts_with("Error: File must be a PDF"), "stderr: {err}");
    assert!(err.contains("unsupported extension .txt"), "stderr: {err}");
    assert!(out.stdout.is_empty());
}

#[test]
fn unexpected_error_in_verbose_mode_shows_causes_and_trace() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("doc.pdf");
    std::fs::write(&pdf, b"%PDF-1.4\n").unwrap();
    let config = dir.path().join("absent.toml");

    let out = run(
        dir.path(),
        &[
            pdf.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "-v",
        ],
    );

    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.starts_with("Unexpected error: reading config"), "stderr: {err}");
    assert!(err.contains("Caused by"), "stderr: {err}");
    assert!(err.lines().count() > 4, "stderr: {err}");
}

#[test]
fn unexpected_error_without_verbose_is_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("doc.pdf");
    std::fs::write(&pdf, b"%PDF-1.4\n").unwrap();
    let config = dir.path().join("absent.toml");

    let out = run(
        dir.path(),
        &[pdf.to_str().unwrap(), "--config", config.to_str().unwrap()],
    );

    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.starts_with("Unexpected error: reading config"), "stderr: {err}");
    assert!(!err.contains("Caused by"), "stderr: {err}");
}
