//! Command-line parsing, configuration layering and report output

use super::fixtures::{project, ui_library_project};
use clap::Parser;
use importy::{
    cli::{args::Args, commands::Command, run_analysis},
    config::{load_config_with_env_prefix, CliArgs},
    models::config::{OutputFormat, Settings},
    ImportyError,
};
use std::fs;
use std::path::PathBuf;

const UNSET_ENV_PREFIX: &str = "IMPORTY_INTEGRATION_UNSET";

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from([
        "importy",
        "--dir",
        "./web",
        "--lib",
        "ui-library",
        "--format",
        "text",
        "--exclude",
        "**/dist/**",
        "--concurrency",
        "3",
        "--no-colors",
    ]);

    let settings = load_config_with_env_prefix(CliArgs::from(&args), UNSET_ENV_PREFIX);
    // A .importy.toml in the working directory or home could add more; the CLI still wins
    let settings = settings.unwrap();
    assert_eq!(settings.dir, PathBuf::from("./web"));
    assert_eq!(settings.library, "ui-library");
    assert_eq!(settings.output_format, OutputFormat::Text);
    assert_eq!(settings.exclude.as_deref(), Some("**/dist/**"));
    assert_eq!(settings.concurrency, Some(3));
    assert!(!settings.use_colors);
}

#[test]
fn test_config_file_supplies_library() {
    let dir = project(&[(
        "importy.toml",
        "library = \"ui-library\"\nconcurrency = 2\noutput_format = \"csv\"\n",
    )]);

    let args = Args::parse_from([
        "importy",
        "--config",
        dir.path().join("importy.toml").to_str().unwrap(),
        "--dir",
        dir.path().to_str().unwrap(),
        "--format",
        "json",
    ]);

    let settings = load_config_with_env_prefix(CliArgs::from(&args), UNSET_ENV_PREFIX).unwrap();
    assert_eq!(settings.library, "ui-library");
    assert_eq!(settings.concurrency, Some(2));
    assert_eq!(settings.output_format, OutputFormat::Json);
}

#[test]
fn test_invalid_config_file_is_critical() {
    let dir = project(&[("importy.toml", "library = \nconcurrency = \"two\"")]);
    let args = Args::parse_from([
        "importy",
        "--config",
        dir.path().join("importy.toml").to_str().unwrap(),
    ]);

    let err = load_config_with_env_prefix(CliArgs::from(&args), UNSET_ENV_PREFIX).unwrap_err();
    assert!(matches!(err, ImportyError::ConfigParse { .. }));
    assert!(err.is_critical());
}

#[test]
fn test_missing_directory_is_critical() {
    let args = Args::parse_from(["importy", "--lib", "ui-library"]);
    let err = load_config_with_env_prefix(CliArgs::from(&args), UNSET_ENV_PREFIX).unwrap_err();
    assert!(matches!(err, ImportyError::Config { .. }));
    assert!(err.is_critical());
}

#[test]
fn test_zero_concurrency_is_rejected() {
    let args = Args::parse_from([
        "importy", "--dir", ".", "--lib", "ui-library", "--concurrency", "0",
    ]);
    let err = load_config_with_env_prefix(CliArgs::from(&args), UNSET_ENV_PREFIX).unwrap_err();
    assert!(matches!(err, ImportyError::Config { .. }));
    assert!(err.user_message().contains("Concurrency"));
}

#[test]
fn test_json_report_written_to_file() {
    let dir = ui_library_project();
    let report = dir.path().join("out").join("report.json");
    fs::create_dir_all(report.parent().unwrap()).unwrap();

    let settings = Settings {
        dir: dir.path().to_path_buf(),
        library: "ui-library".to_string(),
        output_file: Some(report.clone()),
        show_progress: false,
        quiet: true,
        ..Settings::default()
    };

    run_analysis(&settings).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["summary"]["library"], "ui-library");
    assert_eq!(json["summary"]["componentsFound"], 4);
    assert_eq!(json["summary"]["totalImports"], 5);
    assert_eq!(json["summary"]["filesScanned"], 3);
    assert_eq!(json["components"]["Container"].as_array().unwrap().len(), 2);
}

#[test]
fn test_unwritable_output_falls_back_to_stdout() {
    let dir = ui_library_project();
    let settings = Settings {
        dir: dir.path().to_path_buf(),
        library: "ui-library".to_string(),
        output_format: OutputFormat::Csv,
        output_file: Some(dir.path().join("missing-dir").join("report.csv")),
        show_progress: false,
        quiet: true,
        ..Settings::default()
    };

    let result = run_analysis(&settings).unwrap();
    assert_eq!(result.summary.components_found, 4);
    assert!(!dir.path().join("missing-dir").exists());
}

#[test]
fn test_empty_result_is_success() {
    let dir = project(&[("src/app.ts", "import { get } from 'lodash';\n")]);
    let settings = Settings {
        dir: dir.path().to_path_buf(),
        library: "ui-library".to_string(),
        output_file: Some(dir.path().join("report.json")),
        show_progress: false,
        ..Settings::default()
    };

    let result = run_analysis(&settings).unwrap();
    assert!(!result.has_matches());
    assert_eq!(result.summary.files_scanned, 1);
}

#[test]
fn test_init_command_selected() {
    let args = Args::parse_from(["importy", "--init"]);
    assert!(matches!(Command::from_args(args), Command::Init));
}
