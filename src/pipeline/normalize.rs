use crate::pipeline::aggregate::{ItemSummary, PaymentSummary};

/// Monetary aggregates with absence collapsed to zero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedTotals {
    pub total_payment: f64,
    pub total_products: f64,
    pub total_freight: f64,
}

/// Substitutes 0 for monetary aggregates the composer left absent.
///
/// The review score is deliberately outside this stage: a missing score
/// means "unknown", not "zero", and must stay absent.
pub struct NullNormalizer;

impl NullNormalizer {
    pub fn normalize(
        &self,
        payments: Option<&PaymentSummary>,
        items: Option<&ItemSummary>,
    ) -> NormalizedTotals {
        NormalizedTotals {
            total_payment: payments.map(|p| p.total_amount).unwrap_or(0.0),
            total_products: items.map(|i| i.total_products).unwrap_or(0.0),
            total_freight: items.map(|i| i.total_freight).unwrap_or(0.0),
        }
    }
}
