use pdf_to_md::{ConversionRequest, config::Config};

#[test]
fn parse_example_config() {
    let raw = include_str!("../pdf-to-md.example.toml");
    let cfg: Config = toml::from_str(raw).expect("parse TOML");
    assert_eq!(cfg.ocr.langs, vec!["en".to_string()]);
    assert!(cfg.processing_log.enabled);
    assert!(!cfg.engine.scripts_dir.is_empty());
}

#[test]
fn missing_sections_use_defaults() {
    let cfg: Config = toml::from_str("[ocr]\nenabled = false\nlangs = [\"de\", \"fr\"]\n").unwrap();
    assert!(!cfg.ocr.enabled);
    assert_eq!(cfg.logging.level, "info");
    assert_eq!(cfg.engine.python_exe, "auto");

    let req = ConversionRequest::from_config("scan.pdf", &cfg);
    assert!(!req.do_ocr);
    assert!(req.enable_logging);
    assert_eq!(req.ocr_languages, vec!["de".to_string(), "fr".to_string()]);
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("reading config"));
}

#[test]
fn partial_sections_fill_in_defaults() {
    let cfg: Config = toml::from_str("[ocr]\nlangs = [\"de\"]\n").unwrap();
    assert!(cfg.ocr.enabled);
    assert_eq!(cfg.ocr.langs, vec!["de".to_string()]);

    let cfg: Config = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
    assert_eq!(cfg.logging.level, "debug");
    assert!(!cfg.logging.json);
    assert!(cfg.logging.file_path.is_empty());

    let cfg: Config = toml::from_str("[engine]\npython_exe = \"/opt/venv/bin/python\"\n").unwrap();
    assert_eq!(cfg.engine.python_exe, "/opt/venv/bin/python");
    assert_eq!(cfg.engine.scripts_dir, "scripts");
    assert!(cfg.engine.keep_stderr);
}
