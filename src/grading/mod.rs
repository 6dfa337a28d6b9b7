pub mod composite;
pub mod normalize;
pub mod threshold;
pub mod weights;

use crate::error::{GradeError, Result};
use crate::types::outcome::CompositeResult;
use crate::types::scores::ComponentScores;
use composite::{classify_pass, letter_grade, normalize_year_in, year_end_total, year_in_subtotal};
use tracing::debug;
use weights::WeightTable;

pub use threshold::{compute_final_threshold, compute_finalless_threshold};

/// Year-end total, letter grade and pass status for a complete score set.
pub fn compute_outcome(
    scores: &ComponentScores,
    final_score: f64,
    weights: &WeightTable,
) -> Result<CompositeResult> {
    if let Some(missing) = scores.pending().first() {
        return Err(GradeError::MissingScore(missing.key().to_string()));
    }

    let year_in_subtotal = year_in_subtotal(scores, weights);
    let year_end_total = year_end_total(year_in_subtotal, final_score, weights);
    debug!(year_in_subtotal, year_end_total, "computed year-end outcome");

    Ok(CompositeResult {
        year_in_subtotal,
        year_in_percent: normalize_year_in(year_in_subtotal, weights),
        final_score,
        year_end_total,
        letter: letter_grade(year_end_total),
        status: classify_pass(year_end_total, final_score),
    })
}
