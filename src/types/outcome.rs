use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Letter {
    AA,
    BA,
    BB,
    CB,
    CC,
    DC,
    DD,
    FF,
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Letter::AA => "AA",
            Letter::BA => "BA",
            Letter::BB => "BB",
            Letter::CB => "CB",
            Letter::CC => "CC",
            Letter::DC => "DC",
            Letter::DD => "DD",
            Letter::FF => "FF",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassStatus {
    Pass,
    PassByRounding,
    FailFinalBelowMinimum,
    Fail,
}

impl PassStatus {
    pub fn passed(self) -> bool {
        matches!(self, PassStatus::Pass | PassStatus::PassByRounding)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeResult {
    pub year_in_subtotal: f64,
    pub year_in_percent: f64,
    pub final_score: f64,
    pub year_end_total: f64,
    pub letter: Letter,
    pub status: PassStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Reach a year-end total of 59.51 with a final exam.
    PassWithFinal,
    /// Reach a year-in average of 79.51 and skip the final exam.
    PassWithoutFinal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveMode {
    AllEntered,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ThresholdResult {
    Unreachable,
    AlreadySufficient { value: f64 },
    RequiredValue { value: f64 },
    Insufficient { value: f64 },
    NothingPending,
}

impl ThresholdResult {
    /// The number worth showing next to the outcome, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            ThresholdResult::AlreadySufficient { value }
            | ThresholdResult::RequiredValue { value }
            | ThresholdResult::Insufficient { value } => Some(*value),
            ThresholdResult::Unreachable | ThresholdResult::NothingPending => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdReport {
    pub policy: Policy,
    pub mode: SolveMode,
    pub target: f64,
    pub result: ThresholdResult,
}
