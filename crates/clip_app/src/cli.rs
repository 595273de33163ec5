use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "clipper", version, about = "Terminal front end for the clip generation API")]
pub struct Cli {
    /// Base URL of the clip API, up to and including the /api prefix.
    #[arg(
        long,
        global = true,
        env = "CLIP_API_URL",
        default_value = "http://127.0.0.1:5000/api"
    )]
    pub api_url: String,

    /// Where log output goes.
    #[arg(long, global = true, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Request a new clip and follow its progress until it is ready.
    Submit(SubmitArgs),
    /// Follow an existing clip until it completes or fails.
    Watch {
        /// Identifier returned when the clip was created.
        clip_id: String,
    },
    /// Check that the clip API is reachable.
    Health,
}

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Source video URL.
    pub url: String,

    /// Generation mode.
    #[arg(long, value_enum, default_value_t = ModeArg::Short)]
    pub mode: ModeArg,

    /// Skip transitions between segments.
    #[arg(long)]
    pub no_transitions: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Short,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn submit_defaults_to_short_with_transitions() {
        let cli = Cli::parse_from(["clipper", "submit", "https://example.com/v"]);
        match cli.command {
            Command::Submit(args) => {
                assert_eq!(args.mode, ModeArg::Short);
                assert!(!args.no_transitions);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn api_url_flag_is_global() {
        let cli = Cli::parse_from(["clipper", "watch", "abc", "--api-url", "http://host/api"]);
        assert_eq!(cli.api_url, "http://host/api");
    }
}
