use crate::demo::{print_questions, run_demo, run_score, DemoArgs, QuestionsArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use heavendesk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "HeavenDesk.ai Assessment",
    about = "Serve and explore the HeavenDesk.ai automation readiness assessment",
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
    /// Score an answers file without storing or e-mailing anything
    Score(ScoreArgs),
    /// Print the question catalog
    Questions(QuestionsArgs),
    /// Walk through the quiz with scripted answers and show the resulting report
    Demo(DemoArgs),
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
        Command::Score(args) => run_score(args),
        Command::Questions(args) => print_questions(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
