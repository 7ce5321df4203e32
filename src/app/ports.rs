use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{OrderAnalyticsRecord, Snapshot};

/// Supplies the immutable input snapshot for one pipeline run
#[async_trait]
pub trait SnapshotSourcePort: Send + Sync {
    async fn load_snapshot(&self) -> Result<Snapshot>;
}

/// Receives the finished analytics records, one at a time
#[async_trait]
pub trait MartOutputPort: Send + Sync {
    async fn write_record(&self, record: &OrderAnalyticsRecord) -> Result<()>;

    /// Flush any buffered rows once the run is complete
    async fn finish(&self) -> Result<()> {
        Ok(())
    }
}
