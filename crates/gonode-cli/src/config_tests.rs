use std::path::PathBuf;

use indoc::indoc;

use crate::config::{Config, ConfigError};

#[test]
fn full_config() {
    let yaml = indoc! {r#"
        files: ["go/**/*.go", "lib/*.go"]
        outputDirectory: "build"
        name: "calculator"
    "#};
    let config = Config::from_reader(yaml.as_bytes()).unwrap();

    assert_eq!(
        config,
        Config {
            files: vec!["go/**/*.go".to_string(), "lib/*.go".to_string()],
            output_directory: PathBuf::from("build"),
            name: "calculator".to_string(),
        }
    );
}

#[test]
fn output_directory_defaults_to_project_dir() {
    let yaml = indoc! {"
        files:
          - main.go
        name: calc
    "};
    let config = Config::from_reader(yaml.as_bytes()).unwrap();

    assert_eq!(config.output_directory, PathBuf::from("."));
}

#[test]
fn missing_name_rejected() {
    let err = Config::from_reader(&b"files: [\"*.go\"]\n"[..]).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn empty_files_rejected() {
    let err = Config::from_reader(&b"files: []\nname: calc\n"[..]).unwrap_err();
    assert!(matches!(err, ConfigError::NoFiles));
}

#[test]
fn name_must_be_c_identifier() {
    let err = Config::from_reader(&b"files: [\"*.go\"]\nname: my-addon\n"[..]).unwrap_err();
    assert!(matches!(&err, ConfigError::InvalidName(name) if name == "my-addon"));
    assert_eq!(
        err.to_string(),
        "`name` must be a C identifier, got `my-addon`"
    );
}

#[test]
fn from_reader() {
    let yaml = b"files: [\"*.go\"]\nname: calc\n";
    let config = Config::from_reader(&yaml[..]).unwrap();
    assert_eq!(config.name, "calc");
}

#[test]
fn load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".gonode.yaml");
    std::fs::write(&path, "files: [\"*.go\"]\nname: calc\n").unwrap();

    assert_eq!(Config::load(&path).unwrap().files, ["*.go"]);
}

#[test]
fn load_validates_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".gonode.yaml");
    std::fs::write(&path, "files: [\"*.go\"]\nname: my-addon\n").unwrap();

    assert!(matches!(
        Config::load(&path).unwrap_err(),
        ConfigError::InvalidName(_)
    ));
}

#[test]
fn load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".gonode.yaml");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(&err, ConfigError::Read { path: p, .. } if *p == path));
    assert!(err.to_string().starts_with("failed to read "));
}
