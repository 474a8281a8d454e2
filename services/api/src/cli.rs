use crate::assess::{run_assess, AssessArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pesi_eligibility::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "PESI Eligibility",
    about = "Screen farmer-support applications for eligibility, priority, and fraud",
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
    /// Evaluate one applicant record and print the decision JSON
    Assess(AssessArgs),
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
        Command::Assess(args) => run_assess(args),
    }
}
