mod report;
mod settings;

use crate::settings::{CliArgs, Settings};
use anyhow::Context;
use clap::Parser;
use lanescope_engine::loader;
use log::info;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    better_panic::install();

    let settings = Settings::from(args);
    setup_logging(&settings);

    let summary = loader::load_match_from_path(&settings.match_path)
        .with_context(|| format!("loading match {}", settings.match_path.display()))?;
    let timeline = loader::load_timeline_from_path(&settings.timeline_path)
        .with_context(|| format!("loading timeline {}", settings.timeline_path.display()))?;
    info!(
        "loaded {} with {} participants and {} frames",
        summary.match_id,
        summary.participants.len(),
        timeline.frames.len()
    );

    let report = report::build(&summary, &timeline, &settings)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn setup_logging(settings: &Settings) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = settings.log_level {
        builder.filter_level(level);
    }
    builder.target(env_logger::Target::Stderr).init();
}
