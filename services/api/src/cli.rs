use clap::{Args, Parser, Subcommand};

use crate::demo::{run_demo, run_scorecard_report, DemoArgs, ScorecardReportArgs};
use crate::server;
use team_pulse::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Team Pulse",
    about = "Run and demonstrate the Team Pulse performance analytics service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Generate performance scorecards from a task snapshot export
    Scorecard {
        #[command(subcommand)]
        command: ScorecardCommand,
    },
    /// Run an end-to-end CLI demo over a seeded workforce
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ScorecardCommand {
    /// Score one employee's snapshot and print the scorecard
    Report(ScorecardReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Seed the in-memory directory with the demo workforce
    #[arg(long)]
    pub(crate) seed_demo: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Scorecard {
            command: ScorecardCommand::Report(args),
        } => run_scorecard_report(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
