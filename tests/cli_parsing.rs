use clap::Parser;
use resource_availability::cli::{Cli, Commands};
use std::path::PathBuf;

#[test]
fn test_parse_summary() {
    let cli = Cli::try_parse_from(["availability", "summary", "history.json"]).unwrap();

    assert!(!cli.json);
    match cli.command {
        Commands::Summary { file, now } => {
            assert_eq!(file, PathBuf::from("history.json"));
            assert_eq!(now, None);
        }
        Commands::Validate { .. } => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_summary_with_now_and_global_flags() {
    let cli = Cli::try_parse_from([
        "availability",
        "summary",
        "history.yaml",
        "--now",
        "1700000000000",
        "--json",
        "--config",
        "custom.yaml",
    ])
    .unwrap();

    assert!(cli.json);
    assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
    match cli.command {
        Commands::Summary { now, .. } => assert_eq!(now, Some(1_700_000_000_000)),
        Commands::Validate { .. } => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_json_flag_before_subcommand() {
    let cli = Cli::try_parse_from(["availability", "-j", "validate", "history.json"]).unwrap();

    assert!(cli.json);
    assert!(matches!(cli.command, Commands::Validate { .. }));
}

#[test]
fn test_summary_requires_file() {
    assert!(Cli::try_parse_from(["availability", "summary"]).is_err());
}

#[test]
fn test_now_must_be_numeric() {
    assert!(Cli::try_parse_from(["availability", "summary", "h.json", "--now", "yesterday"]).is_err());
}

#[test]
fn test_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["availability", "forecast", "h.json"]).is_err());
}
