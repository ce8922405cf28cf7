use pdf_to_md::{
    ConvertError,
    paths::{ensure_parent_dir, log_output_path, markdown_output_path, resolve_markdown_path, validate_input},
};
use std::path::{Path, PathBuf};

#[test]
fn markdown_suffix_is_appended() {
    assert_eq!(markdown_output_path(Path::new("doc.pdf")), PathBuf::from("doc.pdf.md"));
    assert_eq!(
        markdown_output_path(Path::new("/a/b/Report.PDF")),
        PathBuf::from("/a/b/Report.PDF.md")
    );
}

#[test]
fn log_path_replaces_extension() {
    assert_eq!(log_output_path(Path::new("doc.pdf")), PathBuf::from("doc.json"));
    assert_eq!(
        log_output_path(Path::new("/data/v1.2/scan.pdf")),
        PathBuf::from("/data/v1.2/scan.json")
    );
}

#[test]
fn explicit_output_wins_for_markdown_only() {
    let input = Path::new("/in/doc.pdf");
    assert_eq!(
        resolve_markdown_path(input, Some(Path::new("/out/x.md"))),
        PathBuf::from("/out/x.md")
    );
    assert_eq!(resolve_markdown_path(input, None), PathBuf::from("/in/doc.pdf.md"));
    assert_eq!(log_output_path(input), PathBuf::from("/in/doc.json"));
}

#[test]
fn validate_accepts_pdf_any_case() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["a.pdf", "b.PDF", "c.Pdf"] {
        let p = dir.path().join(name);
        std::fs::write(&p, b"%PDF").unwrap();
        validate_input(&p).unwrap();
    }
}

#[test]
fn validate_categorizes_failures() {
    let dir = tempfile::tempdir().unwrap();

    let missing = validate_input(&dir.path().join("missing.pdf")).unwrap_err();
    assert!(matches!(missing, ConvertError::NotFound { .. }));
    assert_eq!(missing.prefix(), "Error");

    let txt = dir.path().join("notes.txt");
    std::fs::write(&txt, b"hi").unwrap();
    assert!(matches!(
        validate_input(&txt).unwrap_err(),
        ConvertError::InvalidInput { .. }
    ));

    let bare = dir.path().join("README");
    std::fs::write(&bare, b"hi").unwrap();
    assert!(matches!(
        validate_input(&bare).unwrap_err(),
        ConvertError::InvalidInput { .. }
    ));

    let folder = dir.path().join("folder.pdf");
    std::fs::create_dir(&folder).unwrap();
    assert!(matches!(
        validate_input(&folder).unwrap_err(),
        ConvertError::InvalidInput { .. }
    ));
}

#[test]
fn ensure_parent_dir_creates_missing_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("x").join("y").join("out.md");
    ensure_parent_dir(&target).unwrap();
    assert!(dir.path().join("x").join("y").is_dir());
    ensure_parent_dir(Path::new("relative.md")).unwrap();
}
