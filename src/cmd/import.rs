use crate::reports;
use auricle::client::EvaluatorClient;
use auricle::error::{AuResult, AuricleError};
use auricle::presenter::{self, RankMode};
use auricle::protocol::EvaluateAmazonRequest;
use std::str::FromStr;

#[derive(clap::Args, Debug, Clone)]
pub struct ImportArgs {
    /// Amazon product URLs. The backend fetches and validates them.
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Use case to rank for, optionally with an explicit weight
    /// ("gaming=40"). Repeatable.
    #[arg(short = 'u', long = "use-case")]
    pub use_cases: Vec<String>,

    /// Ranking to display: "performance" or "value".
    #[arg(short = 'm', long, default_value = "performance")]
    pub mode: String,
}

pub async fn run(args: ImportArgs, client: &EvaluatorClient) -> AuResult<()> {
    let mode = RankMode::from_str(&args.mode)
        .map_err(|_| AuricleError::Input(format!("Unknown mode '{}'", args.mode)))?;

    let use_cases = crate::cmd::finalize_use_cases(&args.use_cases)?;
    reports::print_weight_summary(&use_cases);

    let response = client
        .evaluate_amazon(&EvaluateAmazonRequest {
            use_cases,
            amazon_urls: args.urls,
        })
        .await?;

    let cards = presenter::present(&response, mode);
    reports::print_ranking_report(&cards, mode);
    reports::print_explanation(response.explanation.as_ref());
    Ok(())
}
