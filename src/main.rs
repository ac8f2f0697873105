use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use clan_ace::input::load_batch;
use clan_ace::logging;
use clan_ace::model::profile::ScoringProfile;
use clan_ace::pipeline::score_batch;
use clan_ace::pipeline::stage7_report::write_reports;

#[derive(Parser, Debug)]
#[command(name = "clan-ace")]
#[command(about = "Deterministic ACE contribution scoring for clan rosters")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG overrides
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a batch file and write reports
    Score {
        /// Player array, {"players": [...]} or roster snapshot {"members": [...]}
        #[arg(long)]
        input: PathBuf,

        /// Output directory
        #[arg(long)]
        out: PathBuf,

        /// Built-in weight profile
        #[arg(long, value_enum, default_value_t = ProfileArg::Default)]
        profile: ProfileArg,

        /// JSON profile file; fields not given fall back to the default profile
        #[arg(long, conflicts_with = "profile")]
        profile_file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProfileArg {
    Default,
    WarFocused,
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), String> {
    match command {
        Commands::Score {
            input,
            out,
            profile,
            profile_file,
        } => {
            let profile = resolve_profile(profile, profile_file.as_deref())?;
            let batch = load_batch(&input).map_err(|e| e.to_string())?;
            let scored = score_batch(batch, &profile).map_err(|e| e.to_string())?;
            write_reports(&scored, &profile, &out).map_err(|e| e.to_string())?;
            Ok(())
        }
    }
}

fn resolve_profile(kind: ProfileArg, file: Option<&Path>) -> Result<ScoringProfile, String> {
    if let Some(path) = file {
        return ScoringProfile::load(path).map_err(|e| e.to_string());
    }
    Ok(match kind {
        ProfileArg::Default => ScoringProfile::default_v1(),
        ProfileArg::WarFocused => ScoringProfile::war_focused_v1(),
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
