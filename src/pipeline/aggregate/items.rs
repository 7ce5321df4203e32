use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ChildAggregator;
use crate::domain::OrderItem;

/// Summary of every line item belonging to one order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
    /// Sum of all item prices for the order
    pub total_products: f64,
    /// Sum of all freight values for the order
    pub total_freight: f64,
}

/// Groups order item rows by order identifier
pub struct ItemAggregator;

impl ChildAggregator for ItemAggregator {
    type Row = OrderItem;
    type Summary = ItemSummary;

    fn aggregate(&self, rows: &[OrderItem]) -> HashMap<String, ItemSummary> {
        let mut summaries: HashMap<String, ItemSummary> = HashMap::new();

        for item in rows {
            let entry = summaries
                .entry(item.order_id.clone())
                .or_insert_with(|| ItemSummary {
                    total_products: 0.0,
                    total_freight: 0.0,
                });
            entry.total_products += item.price;
            entry.total_freight += item.freight_value;
        }

        summaries
    }
}
