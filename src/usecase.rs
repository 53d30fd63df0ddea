use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The usage scenarios the scoring backend knows how to weight specs against.
/// Wire format is the snake_case name (e.g. "work_calls").
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UseCase {
    Gaming,
    Gym,
    WorkCalls,
    Travel,
    CasualMusic,
}

impl UseCase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gaming => "Gaming",
            Self::Gym => "Gym",
            Self::WorkCalls => "Work Calls",
            Self::Travel => "Travel",
            Self::CasualMusic => "Casual Music",
        }
    }
}
