use crate::reports;
use auricle::client::EvaluatorClient;
use auricle::error::{AuResult, AuricleError};
use auricle::presenter::{self, RankMode};
use auricle::protocol::{EvaluateRequest, Headphone};
use std::fs;
use std::str::FromStr;

#[derive(clap::Args, Debug, Clone)]
pub struct EvaluateArgs {
    /// Path to a JSON array of headphone spec sheets.
    #[arg(short = 'f', long)]
    pub headphones: String,

    /// Use case to rank for, optionally with an explicit weight
    /// ("gaming=40"). Repeatable.
    #[arg(short = 'u', long = "use-case")]
    pub use_cases: Vec<String>,

    /// Ranking to display: "performance" or "value".
    #[arg(short = 'm', long, default_value = "performance")]
    pub mode: String,
}

pub async fn run(args: EvaluateArgs, client: &EvaluatorClient) -> AuResult<()> {
    let mode = RankMode::from_str(&args.mode)
        .map_err(|_| AuricleError::Input(format!("Unknown mode '{}'", args.mode)))?;

    let use_cases = crate::cmd::finalize_use_cases(&args.use_cases)?;
    reports::print_weight_summary(&use_cases);

    let raw = fs::read_to_string(&args.headphones)?;
    let headphones: Vec<Headphone> = serde_json::from_str(&raw)?;
    if headphones.is_empty() {
        return Err(AuricleError::Input(
            "The headphone file contains no candidates".to_string(),
        ));
    }

    let response = client
        .evaluate(&EvaluateRequest {
            use_cases,
            headphones,
        })
        .await?;

    let cards = presenter::present(&response, mode);
    reports::print_ranking_report(&cards, mode);
    reports::print_explanation(response.explanation.as_ref());
    Ok(())
}
