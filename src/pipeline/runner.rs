use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::config::MartConfig;
use crate::domain::{OrderAnalyticsRecord, Snapshot};
use crate::error::Result;
use crate::idempotency;
use crate::observability::metrics;
use crate::pipeline::aggregate::{
    ChildAggregator, ItemAggregator, PaymentAggregator, ReviewAggregator,
};
use crate::pipeline::classify::RegionClassifier;
use crate::pipeline::compose::{ComposedOrder, OrderComposer};
use crate::pipeline::kpi::DeliveryKpiCalculator;
use crate::pipeline::normalize::NullNormalizer;
use crate::pipeline::qualify::QualificationFilter;

/// Result of one complete mart build
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    /// Content hash of the input snapshot; identical inputs hash identically
    pub snapshot_fingerprint: String,
    pub total_orders: usize,
    /// Orders excluded because no customer row matched
    pub missing_customer: usize,
    /// Composed rows rejected by the qualification filter
    pub disqualified: usize,
    pub records_emitted: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// The records plus the run summary for one build
#[derive(Debug)]
pub struct MartBuild {
    pub records: Vec<OrderAnalyticsRecord>,
    pub summary: RunSummary,
}

/// Runs the full transform over one immutable snapshot.
///
/// The record set is a pure function of the snapshot and the configuration:
/// run-scoped data (run id, timings) lives only in the summary, so re-running
/// an unchanged snapshot yields an identical record set.
pub struct MartPipeline {
    payment_aggregator: PaymentAggregator,
    item_aggregator: ItemAggregator,
    review_aggregator: ReviewAggregator,
    composer: OrderComposer,
    classifier: RegionClassifier,
    kpi_calculator: DeliveryKpiCalculator,
    null_normalizer: NullNormalizer,
    qualification: QualificationFilter,
    config: MartConfig,
}

impl MartPipeline {
    pub fn new(config: MartConfig) -> Self {
        Self {
            payment_aggregator: PaymentAggregator,
            item_aggregator: ItemAggregator,
            review_aggregator: ReviewAggregator,
            composer: OrderComposer,
            classifier: RegionClassifier,
            kpi_calculator: DeliveryKpiCalculator,
            null_normalizer: NullNormalizer,
            qualification: QualificationFilter,
            config,
        }
    }

    /// Create a pipeline with the default configuration
    pub fn with_defaults() -> Self {
        Self::new(MartConfig::default())
    }

    #[instrument(skip(self, snapshot), fields(orders = snapshot.orders.len()))]
    pub fn build(&self, snapshot: &Snapshot) -> Result<MartBuild> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        info!("Starting mart build {}", run_id);
        metrics::mart::run_started();

        let snapshot_fingerprint = idempotency::snapshot_fingerprint(snapshot)?;

        // The three child aggregations are mutually independent; each is
        // finalized here before the composer consumes any of them.
        let payments = self.payment_aggregator.aggregate(&snapshot.payments);
        let items = self.item_aggregator.aggregate(&snapshot.order_items);
        let reviews = self.review_aggregator.aggregate(&snapshot.reviews);
        metrics::aggregate::summaries_built("payments", payments.len());
        metrics::aggregate::summaries_built("items", items.len());
        metrics::aggregate::summaries_built("reviews", reviews.len());

        let composition = self.composer.compose(
            &snapshot.orders,
            &snapshot.customers,
            payments,
            items,
            reviews,
        );
        metrics::compose::rows_composed(composition.rows.len());
        metrics::compose::missing_customer(composition.missing_customer);

        let mut records = Vec::new();
        let mut disqualified = 0;
        for composed in composition.rows {
            if !self.qualification.qualifies(&composed.order) {
                disqualified += 1;
                continue;
            }
            if let Some(record) = self.finalize(composed) {
                records.push(record);
            }
        }
        metrics::qualify::records_retained(records.len());
        metrics::qualify::records_dropped(disqualified);

        let finished_at = Utc::now();
        metrics::mart::build_duration((finished_at - started_at).num_milliseconds() as f64 / 1000.0);
        info!(
            "Mart build {} finished: {} records, {} disqualified, {} missing customer",
            run_id,
            records.len(),
            disqualified,
            composition.missing_customer
        );

        let summary = RunSummary {
            run_id,
            snapshot_fingerprint,
            total_orders: snapshot.orders.len(),
            missing_customer: composition.missing_customer,
            disqualified,
            records_emitted: records.len(),
            started_at,
            finished_at,
        };

        Ok(MartBuild { records, summary })
    }

    /// Derive region and delivery KPIs, normalize absent monetary aggregates,
    /// and assemble the output record for one qualified row.
    fn finalize(&self, composed: ComposedOrder) -> Option<OrderAnalyticsRecord> {
        // The qualification filter established presence
        let delivered_at = composed.order.delivered_at?;

        let region = self.classifier.classify(&composed.customer.state);
        let kpis = self.kpi_calculator.derive(
            composed.order.purchased_at,
            composed.order.estimated_delivery_at,
            delivered_at,
        );
        let totals = self
            .null_normalizer
            .normalize(composed.payments.as_ref(), composed.items.as_ref());
        let payment_methods = composed
            .payments
            .as_ref()
            .map(|p| p.render_methods(&self.config.payment_method_separator))
            .unwrap_or_default();
        let review_score = composed.reviews.as_ref().map(|r| r.average_score);

        Some(OrderAnalyticsRecord {
            order_id: composed.order.order_id,
            customer_unique_id: composed.customer.customer_unique_id,
            status: composed.order.status,
            customer_city: composed.customer.city,
            customer_state: composed.customer.state,
            region: region.to_string(),
            purchased_at: composed.order.purchased_at,
            delivered_at,
            estimated_delivery_at: composed.order.estimated_delivery_at,
            delivery_days: kpis.delivery_days,
            promised_days: kpis.promised_days,
            delay_status: kpis.delay_status,
            total_payment: totals.total_payment,
            total_products: totals.total_products,
            total_freight: totals.total_freight,
            payment_methods,
            review_score,
        })
    }
}
