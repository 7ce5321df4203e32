use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ChildAggregator;
use crate::domain::Review;

/// Summary of every review left for one order.
///
/// Only exists for orders that were actually reviewed; an unreviewed order
/// must surface as an absent score downstream, never as a zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    /// Arithmetic mean of the order's review scores
    pub average_score: f64,
}

/// Groups review rows by order identifier
pub struct ReviewAggregator;

impl ChildAggregator for ReviewAggregator {
    type Row = Review;
    type Summary = ReviewSummary;

    fn aggregate(&self, rows: &[Review]) -> HashMap<String, ReviewSummary> {
        let mut totals: HashMap<String, (f64, usize)> = HashMap::new();

        for review in rows {
            let entry = totals.entry(review.order_id.clone()).or_insert((0.0, 0));
            entry.0 += f64::from(review.score);
            entry.1 += 1;
        }

        totals
            .into_iter()
            .map(|(order_id, (sum, count))| {
                (
                    order_id,
                    ReviewSummary {
                        average_score: sum / count as f64,
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(order_id: &str, score: i32) -> Review {
        Review {
            order_id: order_id.to_string(),
            score,
        }
    }

    #[test]
    fn test_averages_scores_per_order() {
        let aggregator = ReviewAggregator;
        let rows = vec![review("A1", 4), review("A1", 5), review("B2", 1)];

        let summaries = aggregator.aggregate(&rows);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries["A1"].average_score, 4.5);
        assert_eq!(summaries["B2"].average_score, 1.0);
    }

    #[test]
    fn test_unreviewed_order_has_no_entry() {
        let aggregator = ReviewAggregator;
        let summaries = aggregator.aggregate(&[review("A1", 3)]);

        // Absence, not a zero-valued summary
        assert!(summaries.get("B2").is_none());
    }
}
