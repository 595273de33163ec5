mod app;
mod cli;
mod effects;
mod logging;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use clip_client::ApiSettings;

use crate::app::RunOutcome;
use crate::cli::{Cli, Command, LogTarget};
use crate::logging::LogDestination;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    logging::initialize(match cli.log {
        LogTarget::File => LogDestination::File,
        LogTarget::Terminal => LogDestination::Terminal,
        LogTarget::Both => LogDestination::Both,
    });

    let settings = ApiSettings {
        base_url: cli.api_url,
        ..ApiSettings::default()
    };

    let outcome = match cli.command {
        Command::Submit(args) => app::run_submit(settings, args)?,
        Command::Watch { clip_id } => app::run_watch(settings, clip_id)?,
        Command::Health => {
            app::run_health(settings)?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    Ok(match outcome {
        RunOutcome::Ready => ExitCode::SUCCESS,
        RunOutcome::ClipFailed | RunOutcome::SubmitFailed => ExitCode::from(1),
    })
}
