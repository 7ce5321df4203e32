use chrono::NaiveDateTime;

use crate::domain::DelayStatus;

/// Delivery performance figures derived from an order's three timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryKpis {
    /// Calendar days between purchase and actual delivery
    pub delivery_days: i64,
    /// Calendar days between purchase and the promised delivery estimate
    pub promised_days: i64,
    pub delay_status: DelayStatus,
}

/// Derives lead times and delay status.
///
/// Day differences are calendar-date subtractions: the time-of-day component
/// of each timestamp is dropped before subtracting, so an order purchased
/// late on the 1st and delivered early on the 10th still counts 9 days.
/// The delay comparison keeps full timestamp precision and is strict.
pub struct DeliveryKpiCalculator;

impl DeliveryKpiCalculator {
    pub fn derive(
        &self,
        purchased_at: NaiveDateTime,
        estimated_delivery_at: NaiveDateTime,
        delivered_at: NaiveDateTime,
    ) -> DeliveryKpis {
        let delivery_days = (delivered_at.date() - purchased_at.date()).num_days();
        let promised_days = (estimated_delivery_at.date() - purchased_at.date()).num_days();

        let delay_status = if delivered_at > estimated_delivery_at {
            DelayStatus::Delayed
        } else {
            DelayStatus::OnTime
        };

        DeliveryKpis {
            delivery_days,
            promised_days,
            delay_status,
        }
    }
}
