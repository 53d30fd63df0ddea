pub mod evaluate;
pub mod import;

use auricle::allocator::WeightAllocator;
use auricle::client::EvaluatorClient;
use auricle::error::{AuResult, AuricleError};
use auricle::protocol::UseCaseWeight;

/// Finalize the use-case vector from CLI specs, requiring at least one
/// selected use case.
pub fn finalize_use_cases(specs: &[String]) -> AuResult<Vec<UseCaseWeight>> {
    let use_cases = WeightAllocator::from_specs(specs)?.finalize();
    if use_cases.is_empty() {
        return Err(AuricleError::Input(
            "Select at least one use case (e.g. --use-case gaming=40)".to_string(),
        ));
    }
    Ok(use_cases)
}

pub async fn health(client: &EvaluatorClient) -> AuResult<()> {
    let health = client.health().await?;
    println!("✅ {}: {}", health.status, health.message);
    Ok(())
}
