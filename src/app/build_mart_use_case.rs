use anyhow::Result;

use crate::app::ports::{MartOutputPort, SnapshotSourcePort};
use crate::pipeline::{MartPipeline, RunSummary};

/// Use case for building the analytics mart from a snapshot and streaming
/// the records to the downstream reporting collaborator
pub struct BuildMartUseCase {
    pipeline: MartPipeline,
    source: Box<dyn SnapshotSourcePort>,
    output: Box<dyn MartOutputPort>,
}

impl BuildMartUseCase {
    pub fn new(
        pipeline: MartPipeline,
        source: Box<dyn SnapshotSourcePort>,
        output: Box<dyn MartOutputPort>,
    ) -> Self {
        Self {
            pipeline,
            source,
            output,
        }
    }

    /// Create a use case with the default pipeline configuration
    pub fn with_default_pipeline(
        source: Box<dyn SnapshotSourcePort>,
        output: Box<dyn MartOutputPort>,
    ) -> Self {
        Self::new(MartPipeline::with_defaults(), source, output)
    }

    /// Load the snapshot, run the transform, and stream every record out
    pub async fn run(&self) -> Result<RunSummary> {
        let snapshot = self.source.load_snapshot().await?;
        let build = self.pipeline.build(&snapshot)?;

        for record in &build.records {
            self.output.write_record(record).await?;
        }
        self.output.finish().await?;
        crate::observability::metrics::output::records_written(build.records.len());

        Ok(build.summary)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{Customer, Order, OrderAnalyticsRecord, Snapshot};

    struct FixedSnapshotSource {
        snapshot: Snapshot,
    }

    #[async_trait]
    impl SnapshotSourcePort for FixedSnapshotSource {
        async fn load_snapshot(&self) -> Result<Snapshot> {
            Ok(self.snapshot.clone())
        }
    }

    struct MockMartOutput {
        pub records: Arc<tokio::sync::Mutex<Vec<OrderAnalyticsRecord>>>,
    }

    impl MockMartOutput {
        pub fn new() -> Self {
            Self {
                records: Arc::new(tokio::sync::Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl MartOutputPort for MockMartOutput {
        async fn write_record(&self, record: &OrderAnalyticsRecord) -> Result<()> {
            self.records.lock().await.push(record.clone());
            Ok(())
        }
    }

    fn create_test_snapshot() -> Snapshot {
        let purchased_at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        Snapshot {
            orders: vec![Order {
                order_id: "A1".to_string(),
                status: "delivered".to_string(),
                purchased_at,
                estimated_delivery_at: purchased_at + chrono::Duration::days(8),
                delivered_at: Some(purchased_at + chrono::Duration::days(5)),
                customer_id: "c1".to_string(),
            }],
            customers: vec![Customer {
                customer_id: "c1".to_string(),
                customer_unique_id: "u1".to_string(),
                city: "sao paulo".to_string(),
                state: "SP".to_string(),
            }],
            ..Snapshot::default()
        }
    }

    #[tokio::test]
    async fn test_build_mart_use_case_streams_records() {
        let source = Box::new(FixedSnapshotSource {
            snapshot: create_test_snapshot(),
        });
        let output = Box::new(MockMartOutput::new());
        let records_ref = output.records.clone();
        let use_case = BuildMartUseCase::with_default_pipeline(source, output);

        let summary = use_case.run().await.unwrap();

        assert_eq!(summary.records_emitted, 1);
        let written = records_ref.lock().await;
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].order_id, "A1");
        assert_eq!(written[0].region, "Southeast");
    }
}
