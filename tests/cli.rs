use clap::Parser;
use std::path::PathBuf;
use todoterm::cli::Cli;

#[test]
fn test_no_arguments() {
    let cli = Cli::try_parse_from(["todoterm"]).unwrap();
    assert!(cli.config.is_none());
    assert!(cli.generate_config.is_none());
}

#[test]
fn test_config_path() {
    let cli = Cli::try_parse_from(["todoterm", "--config", "my.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("my.toml")));

    let cli = Cli::try_parse_from(["todoterm", "-c", "other.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("other.toml")));
}

#[test]
fn test_generate_config_path() {
    let cli = Cli::try_parse_from(["todoterm", "--generate-config", "/tmp/todoterm.toml"]).unwrap();
    assert_eq!(cli.generate_config, Some(PathBuf::from("/tmp/todoterm.toml")));
}

#[test]
fn test_invalid_arguments_rejected() {
    assert!(Cli::try_parse_from(["todoterm", "--config"]).is_err());
    assert!(Cli::try_parse_from(["todoterm", "--bogus"]).is_err());
}

#[test]
fn test_help_is_reported_not_exited() {
    let err = Cli::try_parse_from(["todoterm", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
