use super::decimal::fmt_score;
use crate::types::outcome::{CompositeResult, ThresholdReport};
use serde::Serialize;

#[derive(Serialize)]
struct OutcomeDocument<'a> {
    #[serde(flatten)]
    result: &'a CompositeResult,
    display: OutcomeDisplay,
}

#[derive(Serialize)]
struct OutcomeDisplay {
    year_in_subtotal: String,
    year_in_percent: String,
    year_end_total: String,
}

#[derive(Serialize)]
struct ThresholdDocument<'a> {
    #[serde(flatten)]
    report: &'a ThresholdReport,
    display: Option<String>,
}

pub fn outcome_to_json(result: &CompositeResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&OutcomeDocument {
        result,
        display: OutcomeDisplay {
            year_in_subtotal: fmt_score(result.year_in_subtotal),
            year_in_percent: fmt_score(result.year_in_percent),
            year_end_total: fmt_score(result.year_end_total),
        },
    })
}

pub fn threshold_to_json(report: &ThresholdReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ThresholdDocument {
        report,
        display: report.result.value().map(fmt_score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::outcome::{Letter, PassStatus, Policy, SolveMode, ThresholdResult};

    #[test]
    fn outcome_json_contains_status_and_display() {
        let rendered = outcome_to_json(&CompositeResult {
            year_in_subtotal: 60.0,
            year_in_percent: 100.0,
            final_score: 100.0,
            year_end_total: 100.0,
            letter: Letter::AA,
            status: PassStatus::Pass,
        })
        .expect("json should serialize");
        assert!(rendered.contains("\"status\": \"pass\""));
        assert!(rendered.contains("\"letter\": \"AA\""));
        assert!(rendered.contains("\"year_end_total\": \"100,00\""));
    }

    #[test]
    fn threshold_json_tags_the_result_kind() {
        let rendered = threshold_to_json(&ThresholdReport {
            policy: Policy::PassWithFinal,
            mode: SolveMode::Pending,
            target: 59.51,
            result: ThresholdResult::RequiredValue { value: 60.5 },
        })
        .expect("json should serialize");
        assert!(rendered.contains("\"policy\": \"pass_with_final\""));
        assert!(rendered.contains("\"kind\": \"required_value\""));
        assert!(rendered.contains("\"display\": \"60,50\""));
    }

    #[test]
    fn unreachable_threshold_has_no_display_value() {
        let rendered = threshold_to_json(&ThresholdReport {
            policy: Policy::PassWithoutFinal,
            mode: SolveMode::AllEntered,
            target: 79.51,
            result: ThresholdResult::Unreachable,
        })
        .expect("json should serialize");
        assert!(rendered.contains("\"kind\": \"unreachable\""));
        assert!(rendered.contains("\"display\": null"));
    }
}
