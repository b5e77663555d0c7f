use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn parse_run_with_overrides() {
    let cli = Cli::parse_from([
        "sf",
        "run",
        "--song-data",
        "data/songs",
        "--database",
        "out.duckdb",
    ]);
    assert_eq!(cli.global.database.as_deref(), Some("out.duckdb"));
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.song_data.as_deref(), Some("data/songs"));
            assert!(args.log_data.is_none());
            assert!(!args.songs_only);
        }
        _ => panic!("expected run subcommand"),
    }
}

#[test]
fn songs_only_conflicts_with_events_only() {
    let result = Cli::try_parse_from(["sf", "run", "--songs-only", "--events-only"]);
    assert!(result.is_err());
}

#[test]
fn parse_stats() {
    let cli = Cli::parse_from(["sf", "-p", "/tmp/project", "stats"]);
    assert_eq!(cli.global.project_dir, "/tmp/project");
    assert!(matches!(cli.command, Commands::Stats));
}
