use crate::protocol::{EvaluationResponse, RankedItem};
use indexmap::IndexMap;
use std::cmp::Ordering;
use strum_macros::{Display, EnumString};

/// Which backend-supplied ordering to render. The two lists are independent;
/// neither is re-sorted here. Ordering authority stays with the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum RankMode {
    Performance,
    Value,
}

/// How strongly a criterion typically drives the ranking, for display badges.
/// Criteria the lookup doesn't know default to Secondary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum WeightLevel {
    Critical,
    Important,
    Secondary,
}

pub fn weight_level(criterion: &str) -> WeightLevel {
    match criterion {
        "latency" | "num_mics" | "battery_life" | "device_type" => WeightLevel::Critical,
        "price" | "water_resistance" => WeightLevel::Important,
        _ => WeightLevel::Secondary,
    }
}

/// One row of a contribution breakdown, already scaled for display.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownEntry {
    pub criterion: String,
    pub share: f64,
    pub percent: u32,
    pub level: WeightLevel,
}

/// One displayed ranking entry with all magnitudes pre-computed.
#[derive(Debug, Clone)]
pub struct RankedCard {
    pub rank: usize,
    pub model: String,
    pub price: Option<f64>,
    pub score: f64,
    pub score_width: u32,
    pub value_score: Option<f64>,
    pub value_width: Option<u32>,
    pub breakdown: Option<Vec<BreakdownEntry>>,
}

/// Derive display cards from a ranked response. Rank is the 1-indexed list
/// position. A missing value-ranked list in value mode yields no cards
/// (absent content, not an error).
pub fn present(response: &EvaluationResponse, mode: RankMode) -> Vec<RankedCard> {
    let list: &[RankedItem] = match mode {
        RankMode::Performance => &response.ranked_headphones,
        RankMode::Value => response
            .value_ranked_headphones
            .as_deref()
            .unwrap_or_default(),
    };

    list.iter()
        .enumerate()
        .map(|(i, item)| RankedCard {
            rank: i + 1,
            model: item.model.clone(),
            price: item.price,
            score: item.score,
            score_width: score_width(item.score),
            value_score: item.value_score,
            value_width: item.value_score.map(value_width),
            breakdown: item.contributions.as_ref().map(breakdown),
        })
        .collect()
}

/// Order contributions by descending share. The sort is stable, so equal
/// shares keep the source map's insertion order. Percentages are rounded
/// per criterion and not renormalized afterwards.
pub fn breakdown(contributions: &IndexMap<String, f64>) -> Vec<BreakdownEntry> {
    let mut entries: Vec<BreakdownEntry> = contributions
        .iter()
        .map(|(criterion, share)| BreakdownEntry {
            criterion: criterion.clone(),
            share: *share,
            percent: (*share * 100.0).round() as u32,
            level: weight_level(criterion),
        })
        .collect();

    entries.sort_by(|a, b| b.share.partial_cmp(&a.share).unwrap_or(Ordering::Equal));
    entries
}

/// Bar width for a [0,1] performance score.
pub fn score_width(score: f64) -> u32 {
    (score * 100.0).round().clamp(0.0, 100.0) as u32
}

/// Bar width for an unbounded value score: saturates at 100 once the value
/// reaches 10. Only the bar is clamped; the raw value is displayed verbatim
/// via [`format_value_score`].
pub fn value_width(value: f64) -> u32 {
    (value / 10.0 * 100.0).round().clamp(0.0, 100.0) as u32
}

/// The raw value score as displayed, one decimal, never clamped.
pub fn format_value_score(value: f64) -> String {
    format!("{:.1}", value)
}

/// Human form of a wire criterion name ("battery_life" -> "battery life").
pub fn criterion_label(criterion: &str) -> String {
    criterion.replace('_', " ")
}

/// Price is scored inverted by the backend; the display calls that out.
pub fn is_inverted_criterion(criterion: &str) -> bool {
    criterion == "price"
}
