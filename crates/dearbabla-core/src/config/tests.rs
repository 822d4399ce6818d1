use super::*;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.fetch.host, "en.bab.la");
    assert_eq!(cfg.fetch.timeout_secs, 5);
    assert_eq!(cfg.quiz.delay_secs, 2);
    assert_eq!(cfg.dearbabla.log_level, "warn");
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let toml_str = r#"
        [fetch]
        timeout_secs = 8
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.fetch.timeout_secs, 8);
    assert_eq!(cfg.fetch.host, "en.bab.la");
    assert_eq!(cfg.quiz.delay_secs, 2);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    let cfg = load(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.fetch.timeout_secs, 5);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[dearbabla]\nlog_level = \"debug\"\n[quiz]\ndelay_secs = 0\n",
    )
    .unwrap();
    let cfg = load(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.dearbabla.log_level, "debug");
    assert_eq!(cfg.quiz.delay_secs, 0);
}

#[test]
fn test_load_rejects_zero_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[fetch]\ntimeout_secs = 0\n").unwrap();
    assert!(matches!(
        load(path.to_str().unwrap()),
        Err(BablaError::Config(_))
    ));
}

#[test]
fn test_load_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[fetch\n").unwrap();
    assert!(matches!(
        load(path.to_str().unwrap()),
        Err(BablaError::Toml(_))
    ));
}

#[test]
fn test_resolve_db_path_unset() {
    let err = resolve_db_path(None).unwrap_err();
    assert!(matches!(err, BablaError::Config(_)));
    assert!(err.to_string().contains(DB_ENV_VAR));
}

#[test]
fn test_resolve_db_path_blank() {
    assert!(matches!(
        resolve_db_path(Some("  ")),
        Err(BablaError::Config(_))
    ));
}

#[test]
fn test_resolve_db_path_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.db");
    let err = resolve_db_path(path.to_str()).unwrap_err();
    assert!(err.to_string().contains("words.db"));
}

#[test]
fn test_resolve_db_path_directory_rejected() {
    let dir = tempfile::tempdir().unwrap();
    assert!(resolve_db_path(dir.path().to_str()).is_err());
}

#[test]
fn test_resolve_db_path_existing_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let resolved = resolve_db_path(file.path().to_str()).unwrap();
    assert_eq!(resolved, file.path());
}

#[test]
fn test_shellexpand_plain_path() {
    assert_eq!(shellexpand("/tmp/words.db"), "/tmp/words.db");
}
