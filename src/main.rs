use auricle::client::EvaluatorClient;
use clap::{Parser, Subcommand};
use std::process;
use std::time::Duration;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value = "http://localhost:8000")]
    api_url: String,

    #[arg(global = true, long, default_value_t = 30)]
    timeout: u64,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank manually entered candidates from a JSON spec file.
    Evaluate(cmd::evaluate::EvaluateArgs),
    /// Rank products imported from Amazon URLs.
    Import(cmd::import::ImportArgs),
    /// Check that the scoring backend is reachable.
    Health,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let client = match EvaluatorClient::with_timeout(&cli.api_url, Duration::from_secs(cli.timeout))
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ Failed to build HTTP client: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Evaluate(args) => cmd::evaluate::run(args, &client).await,
        Commands::Import(args) => cmd::import::run(args, &client).await,
        Commands::Health => cmd::health(&client).await,
    };

    if let Err(e) = result {
        eprintln!("\n❌ {}", e);
        process::exit(1);
    }
}
