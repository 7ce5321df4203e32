use std::collections::HashMap;

use tracing::warn;

use crate::domain::{Customer, Order};
use crate::pipeline::aggregate::{ItemSummary, PaymentSummary, ReviewSummary};

/// One order joined with its customer and the pre-aggregated child summaries.
/// A `None` summary means the order had no rows in that child relation.
#[derive(Debug, Clone)]
pub struct ComposedOrder {
    pub order: Order,
    pub customer: Customer,
    pub payments: Option<PaymentSummary>,
    pub items: Option<ItemSummary>,
    pub reviews: Option<ReviewSummary>,
}

/// Outcome of composing the base relation with the aggregate maps
#[derive(Debug)]
pub struct Composition {
    pub rows: Vec<ComposedOrder>,
    /// Orders excluded because no customer row matched their foreign key
    pub missing_customer: usize,
}

/// Builds the one-row-per-order base relation and attaches summaries.
///
/// Orders are inner-matched with customers; each summary map is left-outer
/// matched by order identifier. Every summary map holds at most one row per
/// key, so the output cardinality always equals the surviving base relation's
/// cardinality.
pub struct OrderComposer;

impl OrderComposer {
    pub fn compose(
        &self,
        orders: &[Order],
        customers: &[Customer],
        mut payments: HashMap<String, PaymentSummary>,
        mut items: HashMap<String, ItemSummary>,
        mut reviews: HashMap<String, ReviewSummary>,
    ) -> Composition {
        let customers_by_id: HashMap<&str, &Customer> = customers
            .iter()
            .map(|customer| (customer.customer_id.as_str(), customer))
            .collect();

        let mut rows = Vec::with_capacity(orders.len());
        let mut missing_customer = 0;

        for order in orders {
            let customer = match customers_by_id.get(order.customer_id.as_str()) {
                Some(customer) => (*customer).clone(),
                None => {
                    warn!(
                        "Order {} has no matching customer {}; excluding it from the mart",
                        order.order_id, order.customer_id
                    );
                    missing_customer += 1;
                    continue;
                }
            };

            rows.push(ComposedOrder {
                order: order.clone(),
                customer,
                payments: payments.remove(&order.order_id),
                items: items.remove(&order.order_id),
                reviews: reviews.remove(&order.order_id),
            });
        }

        Composition {
            rows,
            missing_customer,
        }
    }
}
