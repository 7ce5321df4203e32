use std::collections::HashMap;

pub mod items;
pub mod payments;
pub mod reviews;

pub use items::{ItemAggregator, ItemSummary};
pub use payments::{PaymentAggregator, PaymentSummary};
pub use reviews::{ReviewAggregator, ReviewSummary};

/// Reduces the child rows of one entity type into at most one summary row
/// per order identifier.
///
/// An order with no rows in the child relation gets no map entry at all; the
/// composer must treat the missing key as "no match", never as a zero-valued
/// summary. Because every summary map is at-most-one-row-per-key, composing
/// against it can never multiply base rows.
pub trait ChildAggregator {
    type Row;
    type Summary;

    /// Group rows by their order identifier and fold each group into a summary.
    fn aggregate(&self, rows: &[Self::Row]) -> HashMap<String, Self::Summary>;
}
