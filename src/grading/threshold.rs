use super::composite::{normalize_year_in, year_end_total, year_in_subtotal};
use super::normalize::MAX_SCORE;
use super::weights::{WeightTable, FINALLESS_TARGET_NORM, FINAL_FLOOR, PASS_TARGET_YEAR_END};
use crate::types::outcome::{Policy, SolveMode, ThresholdReport, ThresholdResult};
use crate::types::scores::ComponentScores;
use tracing::debug;

const MAX_ROUNDING_STEPS: usize = 64;

/// Minimum score still needed to pass with a final exam.
///
/// With every component entered this solves for the final-exam score. With
/// components pending the final is fixed at the floor of 50 and the solve is
/// for the average needed across the pending components.
pub fn compute_final_threshold(scores: &ComponentScores, weights: &WeightTable) -> ThresholdReport {
    let mode = solve_mode(scores);
    let result = match mode {
        SolveMode::AllEntered => {
            let subtotal = year_in_subtotal(scores, weights);
            let raw_need = (PASS_TARGET_YEAR_END - subtotal) / (weights.final_exam / 100.0);
            debug!(subtotal, raw_need, "solved final exam score");

            if raw_need > MAX_SCORE {
                ThresholdResult::Unreachable
            } else if raw_need <= FINAL_FLOOR {
                ThresholdResult::AlreadySufficient { value: FINAL_FLOOR }
            } else {
                ThresholdResult::RequiredValue {
                    value: reach_pass_target(subtotal, raw_need.max(FINAL_FLOOR), weights),
                }
            }
        }
        SolveMode::Pending => {
            let target = PASS_TARGET_YEAR_END - (weights.final_exam * FINAL_FLOOR) / 100.0;
            required_average(scores, target, weights)
        }
    };

    ThresholdReport {
        policy: Policy::PassWithFinal,
        mode,
        target: PASS_TARGET_YEAR_END,
        result,
    }
}

/// Whether the year-in average exempts the student from the final, or what
/// the pending components must average for it to.
pub fn compute_finalless_threshold(
    scores: &ComponentScores,
    weights: &WeightTable,
) -> ThresholdReport {
    let mode = solve_mode(scores);
    let result = match mode {
        SolveMode::AllEntered => {
            let normalized = normalize_year_in(year_in_subtotal(scores, weights), weights);
            debug!(normalized, "normalized year-in average");

            if normalized >= FINALLESS_TARGET_NORM {
                ThresholdResult::AlreadySufficient { value: normalized }
            } else {
                ThresholdResult::Insufficient { value: normalized }
            }
        }
        SolveMode::Pending => {
            let target = (FINALLESS_TARGET_NORM / 100.0) * weights.year_in_total();
            required_average(scores, target, weights)
        }
    };

    ThresholdReport {
        policy: Policy::PassWithoutFinal,
        mode,
        target: FINALLESS_TARGET_NORM,
        result,
    }
}

/// Average score the pending components need for the entered ones plus
/// them to reach `target_subtotal` on the 0..60 scale.
pub fn required_average(
    scores: &ComponentScores,
    target_subtotal: f64,
    weights: &WeightTable,
) -> ThresholdResult {
    let mut done = 0.0;
    let mut remaining_weight = 0.0;
    for (component, entry) in scores.iter() {
        let weight = weights.component(component);
        match entry.value() {
            Some(value) => done += (weight * value) / 100.0,
            None => remaining_weight += weight,
        }
    }

    if remaining_weight == 0.0 {
        return ThresholdResult::NothingPending;
    }

    let needed = ((target_subtotal - done) * 100.0) / remaining_weight;
    debug!(done, remaining_weight, needed, "solved pending average");

    if needed > MAX_SCORE {
        ThresholdResult::Unreachable
    } else {
        ThresholdResult::RequiredValue {
            value: needed.max(0.0),
        }
    }
}

fn solve_mode(scores: &ComponentScores) -> SolveMode {
    if scores.is_complete() {
        SolveMode::AllEntered
    } else {
        SolveMode::Pending
    }
}

/// Steps `final_score` up by single ulps until the year-end total actually
/// lands in the pass band, so that scoring exactly the reported value passes.
fn reach_pass_target(subtotal: f64, final_score: f64, weights: &WeightTable) -> f64 {
    let mut value = final_score;
    for _ in 0..MAX_ROUNDING_STEPS {
        if value >= MAX_SCORE || year_end_total(subtotal, value, weights) >= PASS_TARGET_YEAR_END {
            break;
        }
        value = f64::from_bits(value.to_bits() + 1);
    }
    value.min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::composite::classify_pass;
    use crate::types::scores::Component;

    const W: WeightTable = WeightTable::STANDARD;

    fn year_in_only(k: f64) -> ComponentScores {
        ComponentScores::new()
            .with(Component::K1, k)
            .with(Component::K2, k)
            .with(Component::K3, k)
            .with(Component::K4, k)
            .with(Component::K5, k)
    }

    fn required(result: ThresholdResult) -> f64 {
        match result {
            ThresholdResult::RequiredValue { value } => value,
            other => panic!("expected a required value, got {other:?}"),
        }
    }

    #[test]
    fn perfect_components_already_pass_with_the_floor() {
        let report = compute_final_threshold(&ComponentScores::uniform(100.0), &W);
        assert_eq!(report.mode, SolveMode::AllEntered);
        assert_eq!(
            report.result,
            ThresholdResult::AlreadySufficient { value: 50.0 }
        );
    }

    #[test]
    fn zero_components_cannot_pass_even_with_a_perfect_final() {
        let report = compute_final_threshold(&ComponentScores::uniform(0.0), &W);
        assert_eq!(report.mode, SolveMode::AllEntered);
        assert_eq!(report.result, ThresholdResult::Unreachable);
    }

    #[test]
    fn required_final_for_average_components() {
        let report = compute_final_threshold(&ComponentScores::uniform(50.0), &W);
        let value = required(report.result);
        assert!((value - 73.775).abs() < 1e-9);
        assert!(value > 50.0 && value <= 100.0);
    }

    #[test]
    fn just_above_floor_is_still_a_required_value() {
        let report = compute_final_threshold(&ComponentScores::uniform(65.85), &W);
        let value = required(report.result);
        assert!(value > 50.0);
        assert!((value - 50.0).abs() < 1e-9);
    }

    #[test]
    fn scoring_the_required_final_passes() {
        for step in 0..=200 {
            let base = step as f64 / 2.0;
            let scores = ComponentScores::uniform(base).with(Component::Bil, 100.0 - base);
            if let ThresholdResult::RequiredValue { value } =
                compute_final_threshold(&scores, &W).result
            {
                let subtotal = year_in_subtotal(&scores, &W);
                let total = year_end_total(subtotal, value, &W);
                assert!(total >= PASS_TARGET_YEAR_END, "base {base} total {total}");
                assert!(classify_pass(total, value).passed());
            }
        }
    }

    #[test]
    fn pending_components_with_strong_year_need_nothing() {
        let report = compute_final_threshold(&year_in_only(80.0), &W);
        assert_eq!(report.mode, SolveMode::Pending);
        assert_eq!(report.result, ThresholdResult::RequiredValue { value: 0.0 });
    }

    #[test]
    fn pending_average_for_final_floor() {
        let scores = ComponentScores::new()
            .with(Component::K1, 70.0)
            .with(Component::K2, 70.0)
            .with(Component::K3, 70.0);
        // done = 23.8 over weight 34, remaining weight 26
        let value = required(compute_final_threshold(&scores, &W).result);
        assert!((value - (39.51 - 23.8) * 100.0 / 26.0).abs() < 1e-9);
        assert!((value - 60.423_076_923).abs() < 1e-6);
    }

    #[test]
    fn everything_pending_needs_the_plain_average() {
        let value = required(compute_final_threshold(&ComponentScores::new(), &W).result);
        assert!((value - 65.85).abs() < 1e-9);

        let value = required(compute_finalless_threshold(&ComponentScores::new(), &W).result);
        assert!((value - 79.51).abs() < 1e-9);
    }

    #[test]
    fn weak_entered_components_make_pending_target_unreachable() {
        let scores = year_in_only(20.0);
        assert_eq!(
            compute_final_threshold(&scores, &W).result,
            ThresholdResult::Unreachable
        );
        assert_eq!(
            compute_finalless_threshold(&scores, &W).result,
            ThresholdResult::Unreachable
        );
    }

    #[test]
    fn required_average_without_pending_components_is_invalid() {
        let result = required_average(&ComponentScores::uniform(70.0), 39.51, &W);
        assert_eq!(result, ThresholdResult::NothingPending);
    }

    #[test]
    fn finalless_boundary_is_inclusive() {
        let report = compute_finalless_threshold(&ComponentScores::uniform(79.51), &W);
        assert_eq!(report.mode, SolveMode::AllEntered);
        assert!(matches!(
            report.result,
            ThresholdResult::AlreadySufficient { value } if value >= 79.51
        ));

        let report = compute_finalless_threshold(&ComponentScores::uniform(79.5), &W);
        assert_eq!(report.result, ThresholdResult::Insufficient { value: 79.5 });
    }

    #[test]
    fn finalless_pending_average() {
        // done = 44.8, target 47.706, remaining weight 4
        let value = required(compute_finalless_threshold(&year_in_only(80.0), &W).result);
        assert!((value - 72.65).abs() < 1e-9);
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let scores = ComponentScores::new()
            .with(Component::K1, 61.3)
            .with(Component::K4, 88.8)
            .with(Component::Ihu, 12.0);
        let first = compute_finalless_threshold(&scores, &W);
        let second = compute_finalless_threshold(&scores, &W);
        let bits = |report: &ThresholdReport| report.result.value().map(f64::to_bits);
        assert_eq!(bits(&first), bits(&second));
        assert_eq!(first, second);
    }
}
