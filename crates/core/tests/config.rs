use std::io::Write;

use authorship_core::config::{Config, ReportFormat};

#[test]
fn parse_valid_toml() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(
        f,
        r#"
fail_above = 70
sequential = true
format = "markdown"
"#
    )
    .unwrap();

    let cfg = Config::load(f.path()).unwrap();
    assert_eq!(cfg.fail_above, Some(70));
    assert_eq!(cfg.sequential, Some(true));
    assert_eq!(cfg.format, Some(ReportFormat::Markdown));
}

#[test]
fn parse_empty_toml_gives_defaults() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, "").unwrap();

    let cfg = Config::load(f.path()).unwrap();
    assert_eq!(cfg.fail_above, None);
    assert_eq!(cfg.sequential, None);
    assert_eq!(cfg.format, None);
}

#[test]
fn parse_invalid_toml_returns_error() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, "this is not valid [ toml {{{{").unwrap();

    assert!(Config::load(f.path()).is_err());
}

#[test]
fn out_of_range_threshold_is_rejected() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, "fail_above = 400").unwrap();

    let err = Config::load(f.path()).unwrap_err();
    assert!(format!("{err:#}").contains("parse"));
}

#[test]
fn threshold_above_one_hundred_is_rejected() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, "fail_above = 150").unwrap();

    let err = Config::load(f.path()).unwrap_err();
    assert!(format!("{err:#}").contains("fail_above = 150"));
}

#[test]
fn threshold_of_one_hundred_is_accepted() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, "fail_above = 100").unwrap();

    assert_eq!(Config::load(f.path()).unwrap().fail_above, Some(100));
}
