use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::ChildAggregator;
use crate::domain::Payment;

/// Summary of every payment recorded against one order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSummary {
    /// Sum of all payment amounts for the order
    pub total_amount: f64,
    /// Each payment method label used for the order, exactly once
    pub methods: BTreeSet<String>,
}

impl PaymentSummary {
    /// Render the distinct method set as a delimited string.
    /// `BTreeSet` iteration keeps the rendered order deterministic.
    pub fn render_methods(&self, separator: &str) -> String {
        self.methods
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Groups payment rows by order identifier
pub struct PaymentAggregator;

impl ChildAggregator for PaymentAggregator {
    type Row = Payment;
    type Summary = PaymentSummary;

    fn aggregate(&self, rows: &[Payment]) -> HashMap<String, PaymentSummary> {
        let mut summaries: HashMap<String, PaymentSummary> = HashMap::new();

        for payment in rows {
            let entry = summaries
                .entry(payment.order_id.clone())
                .or_insert_with(|| PaymentSummary {
                    total_amount: 0.0,
                    methods: BTreeSet::new(),
                });
            entry.total_amount += payment.amount;
            entry.methods.insert(payment.method.clone());
        }

        summaries
    }
}
