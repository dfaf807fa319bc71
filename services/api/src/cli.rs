use crate::demo::{run_demo, run_recommend, run_search, DemoArgs, RecommendArgs, SearchArgs};
use crate::server;
use career_advisor::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "career-advisor",
    about = "Recommend a study stream and browse colleges, programs, resources and deadlines",
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
    /// Score questionnaire answers and print the recommended stream
    Recommend(RecommendArgs),
    /// Filter one of the catalogs from the command line
    Search(SearchArgs),
    /// Walk through a sample questionnaire and the catalog screens
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
        Command::Recommend(args) => run_recommend(args),
        Command::Search(args) => run_search(args),
        Command::Demo(args) => run_demo(args),
    }
}
