use super::weights::{WeightTable, FINAL_FLOOR, PASS_LINE, PASS_TARGET_YEAR_END};
use crate::types::outcome::{Letter, PassStatus};
use crate::types::scores::ComponentScores;

/// Weighted sum of the entered components on the 0..60 scale.
///
/// Pending components contribute nothing; callers computing a year-end
/// outcome must pass a complete score set.
pub fn year_in_subtotal(scores: &ComponentScores, weights: &WeightTable) -> f64 {
    let sum: f64 = scores
        .iter()
        .filter_map(|(component, entry)| {
            entry
                .value()
                .map(|value| weights.component(component) * value)
        })
        .sum();
    sum / 100.0
}

/// Rescales a 0..60 subtotal to a 0..100 percentage.
pub fn normalize_year_in(subtotal: f64, weights: &WeightTable) -> f64 {
    subtotal / weights.year_in_total() * 100.0
}

pub fn year_end_total(subtotal: f64, final_score: f64, weights: &WeightTable) -> f64 {
    subtotal + (weights.final_exam * final_score) / 100.0
}

pub fn letter_grade(total: f64) -> Letter {
    match total {
        t if t >= 90.0 => Letter::AA,
        t if t >= 85.0 => Letter::BA,
        t if t >= 80.0 => Letter::BB,
        t if t >= 70.0 => Letter::CB,
        t if t >= 60.0 => Letter::CC,
        t if t >= 55.0 => Letter::DC,
        t if t >= 50.0 => Letter::DD,
        _ => Letter::FF,
    }
}

/// The final-exam floor wins over everything; a total in [59.51, 60) counts
/// as 60.
pub fn classify_pass(total: f64, final_score: f64) -> PassStatus {
    if final_score < FINAL_FLOOR {
        PassStatus::FailFinalBelowMinimum
    } else if total >= PASS_LINE {
        PassStatus::Pass
    } else if total >= PASS_TARGET_YEAR_END {
        PassStatus::PassByRounding
    } else {
        PassStatus::Fail
    }
}
