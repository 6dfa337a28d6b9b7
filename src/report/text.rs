use super::decimal::fmt_score;
use crate::types::outcome::{
    CompositeResult, PassStatus, Policy, SolveMode, ThresholdReport, ThresholdResult,
};

pub fn outcome_to_text(result: &CompositeResult) -> String {
    let badge = match result.status {
        PassStatus::Pass => "PASS".to_string(),
        PassStatus::PassByRounding => "PASS  year-end total rounded up to 60".to_string(),
        PassStatus::FailFinalBelowMinimum => "FAIL  final exam is below 50".to_string(),
        PassStatus::Fail => "FAIL  year-end total is below 60".to_string(),
    };

    let mut output = String::new();
    output.push_str(&badge);
    output.push_str("\n\n");
    output.push_str(&format!(
        "Year-in subtotal: {} / 60\n",
        fmt_score(result.year_in_subtotal)
    ));
    output.push_str(&format!(
        "Year-in average:  {}\n",
        fmt_score(result.year_in_percent)
    ));
    output.push_str(&format!(
        "Year-end total:   {}\n",
        fmt_score(result.year_end_total)
    ));
    output.push_str(&format!("Letter grade:     {}\n", result.letter));
    output
}

pub fn threshold_to_text(report: &ThresholdReport) -> String {
    let message = match (report.policy, report.mode, report.result) {
        (_, _, ThresholdResult::NothingPending) => {
            "INVALID  every component is entered; there is nothing left to solve for".to_string()
        }
        (Policy::PassWithFinal, SolveMode::AllEntered, ThresholdResult::Unreachable) => {
            "IMPOSSIBLE  even a 100 on the final is not enough".to_string()
        }
        (Policy::PassWithFinal, SolveMode::AllEntered, ThresholdResult::AlreadySufficient { value }) => {
            format!("ENOUGH  a {} on the final is enough", fmt_score(value))
        }
        (Policy::PassWithFinal, SolveMode::AllEntered, ThresholdResult::RequiredValue { value }) => {
            format!("NEEDED  at least {} on the final to pass", fmt_score(value))
        }
        (Policy::PassWithFinal, SolveMode::Pending, ThresholdResult::Unreachable) => {
            "IMPOSSIBLE  even 100 on the remaining components will not let you leave the final at 50"
                .to_string()
        }
        (Policy::PassWithFinal, SolveMode::Pending, ThresholdResult::RequiredValue { value }) => {
            format!(
                "POSSIBLE  average at least {} on the remaining components to leave the final at 50",
                fmt_score(value)
            )
        }
        (Policy::PassWithoutFinal, SolveMode::AllEntered, ThresholdResult::AlreadySufficient { value }) => {
            format!(
                "PASSED  year-in average is {}; no final exam needed",
                fmt_score(value)
            )
        }
        (Policy::PassWithoutFinal, SolveMode::AllEntered, ThresholdResult::Insufficient { value }) => {
            format!(
                "NOT ENOUGH  year-in average is {}; you must take the final",
                fmt_score(value)
            )
        }
        (Policy::PassWithoutFinal, SolveMode::Pending, ThresholdResult::Unreachable) => {
            "IMPOSSIBLE  even 100 on the remaining components is not enough to skip the final"
                .to_string()
        }
        (Policy::PassWithoutFinal, SolveMode::Pending, ThresholdResult::RequiredValue { value }) => {
            format!(
                "POSSIBLE  score {} on the remaining components to skip the final",
                fmt_score(value)
            )
        }
        (_, _, result) => format!("{result:?}"),
    };

    let info = match report.policy {
        Policy::PassWithFinal => format!(
            "Calculated for a year-end total of {} (rounds to 60).",
            fmt_score(report.target)
        ),
        Policy::PassWithoutFinal => format!(
            "Calculated for a year-in average of {} (rounds to 80).",
            fmt_score(report.target)
        ),
    };

    format!("{message}\n\n{info}\n")
}
