use crate::analyze::{run_analyze, run_baseline, AnalyzeArgs, BaselineArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use gdpi::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Garage Door Price Insight",
    about = "Check garage door service quotes against regional pricing benchmarks",
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
    /// Analyze a single quote and print the assessment
    Analyze(AnalyzeArgs),
    /// Print the regional baseline pricing and torsion-spring ceilings
    Baseline(BaselineArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analyze(args),
        Command::Baseline(args) => run_baseline(args),
    }
}
