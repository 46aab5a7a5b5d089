//! Presentation ordering of predictions.

use wellness_types::{Prediction, RiskBand};

use crate::types::RankingOptions;

/// Orders predictions by score, highest first, and applies filters.
///
/// Equal scores keep their incoming (catalog) order.
///
/// # Example
///
/// ```
/// use wellness_risk::{rank, RankingOptions};
/// use wellness_types::{ConditionRecord, Prediction, RiskTier};
///
/// let predictions = vec![
///     Prediction { condition: ConditionRecord::new("A", 0.1, RiskTier::Low), risk_score: 25 },
///     Prediction { condition: ConditionRecord::new("B", 0.9, RiskTier::High), risk_score: 81 },
/// ];
/// let ranked = rank(predictions, &RankingOptions::top(1));
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].name(), "B");
/// ```
pub fn rank(mut predictions: Vec<Prediction>, options: &RankingOptions) -> Vec<Prediction> {
    predictions.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));

    let floor = options
        .min_score
        .unwrap_or(0)
        .max(options.min_band.map_or(0, RiskBand::lower_bound));
    predictions.retain(|p| p.risk_score >= floor);

    if let Some(limit) = options.limit {
        predictions.truncate(limit);
    }

    predictions
}

/// Returns the highest band among the predictions, if any.
pub fn highest_band(predictions: &[Prediction]) -> Option<RiskBand> {
    predictions.iter().map(Prediction::band).max()
}

/// Counts predictions per band, in band order.
pub fn band_counts(predictions: &[Prediction]) -> [(RiskBand, usize); 4] {
    let mut counts = [
        (RiskBand::Low, 0),
        (RiskBand::Moderate, 0),
        (RiskBand::Elevated, 0),
        (RiskBand::High, 0),
    ];
    for prediction in predictions {
        let band = prediction.band();
        if let Some(slot) = counts.iter_mut().find(|(b, _)| *b == band) {
            slot.1 += 1;
        }
    }
    counts
}
