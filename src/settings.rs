use clap::Parser;
use lanescope_engine::ParticipantId;
use lanescope_engine::snapshot::DEFAULT_SNAPSHOT_MINUTE;
use log::LevelFilter;
use std::path::PathBuf;

pub const ENV_MATCH_JSON: &str = "LANESCOPE_MATCH_JSON";
pub const ENV_TIMELINE_JSON: &str = "LANESCOPE_TIMELINE_JSON";
pub const ENV_PARTICIPANT: &str = "LANESCOPE_PARTICIPANT";
pub const ENV_SNAPSHOT_MINUTE: &str = "LANESCOPE_SNAPSHOT_MINUTE";

/// Command line. Value options fall back to their `LANESCOPE_*` variable,
/// then to the default.
#[derive(Debug, Clone, Parser)]
#[command(name = "lanescope", version)]
#[command(about = "Derive match analytics from a match timeline", long_about = None)]
#[command(after_help = "RUST_LOG sets the log filter (default warn).")]
pub struct CliArgs {
    /// Match summary JSON (match-v5)
    #[arg(short = 'm', long = "match", value_name = "FILE", env = ENV_MATCH_JSON)]
    pub match_path: PathBuf,

    /// Match timeline JSON (match-v5)
    #[arg(short = 't', long = "timeline", value_name = "FILE", env = ENV_TIMELINE_JSON)]
    pub timeline_path: PathBuf,

    /// Selected participant id, 1-10
    #[arg(
        short = 'p',
        long,
        value_name = "ID",
        env = ENV_PARTICIPANT,
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=10)
    )]
    pub participant: ParticipantId,

    /// Lane snapshot minute
    #[arg(
        long = "minute",
        value_name = "N",
        env = ENV_SNAPSHOT_MINUTE,
        default_value_t = DEFAULT_SNAPSHOT_MINUTE
    )]
    pub snapshot_minute: usize,

    /// Show events for all players instead of the selected one
    #[arg(short = 'a', long = "all")]
    pub all_players: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub match_path: PathBuf,
    pub timeline_path: PathBuf,
    pub participant: ParticipantId,
    pub snapshot_minute: usize,
    pub all_players: bool,
    pub log_level: Option<LevelFilter>,
}

impl From<CliArgs> for Settings {
    fn from(args: CliArgs) -> Self {
        Self {
            match_path: args.match_path,
            timeline_path: args.timeline_path,
            participant: args.participant,
            snapshot_minute: args.snapshot_minute,
            all_players: args.all_players,
            log_level: args.verbose.then_some(LevelFilter::Debug),
        }
    }
}
