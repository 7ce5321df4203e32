use crate::constants::DELIVERED_STATUS;
use crate::domain::Order;

/// Gate deciding which composed rows are eligible for the mart.
///
/// The predicate only inspects base order fields, so it could equally run
/// before composition without changing the result set.
pub struct QualificationFilter;

impl QualificationFilter {
    /// An order qualifies when it was delivered and the delivery timestamp
    /// actually made it into the record.
    pub fn qualifies(&self, order: &Order) -> bool {
        order.status == DELIVERED_STATUS && order.delivered_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn create_test_order(status: &str, delivered: bool) -> Order {
        let purchased_at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Order {
            order_id: "A1".to_string(),
            status: status.to_string(),
            purchased_at,
            estimated_delivery_at: purchased_at + chrono::Duration::days(7),
            delivered_at: delivered.then(|| purchased_at + chrono::Duration::days(9)),
            customer_id: "c1".to_string(),
        }
    }

    #[test]
    fn test_delivered_order_with_timestamp_qualifies() {
        let filter = QualificationFilter;
        assert!(filter.qualifies(&create_test_order("delivered", true)));
    }

    #[test]
    fn test_non_delivered_status_is_rejected() {
        let filter = QualificationFilter;
        assert!(!filter.qualifies(&create_test_order("shipped", true)));
        assert!(!filter.qualifies(&create_test_order("canceled", false)));
    }

    #[test]
    fn test_delivered_status_without_timestamp_is_rejected() {
        let filter = QualificationFilter;
        assert!(!filter.qualifies(&create_test_order("delivered", false)));
    }

    #[test]
    fn test_status_match_is_exact() {
        let filter = QualificationFilter;
        assert!(!filter.qualifies(&create_test_order("Delivered", true)));
    }
}
