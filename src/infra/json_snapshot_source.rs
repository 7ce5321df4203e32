use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::app::ports::SnapshotSourcePort;
use crate::constants::{
    CUSTOMERS_FILE, ORDERS_FILE, ORDER_ITEMS_FILE, PAYMENTS_FILE, REVIEWS_FILE,
};
use crate::domain::Snapshot;

/// Snapshot source reading one JSON array file per input relation from a
/// directory, the layout the upstream export collaborator produces
pub struct JsonSnapshotSource {
    input_dir: PathBuf,
}

impl JsonSnapshotSource {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
        }
    }

    fn read_relation<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>> {
        let path = self.input_dir.join(file_name);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read snapshot relation '{}'", path.display()))?;
        let rows: Vec<T> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse snapshot relation '{}'", path.display()))?;
        debug!("Loaded {} rows from {}", rows.len(), path.display());
        Ok(rows)
    }
}

#[async_trait]
impl SnapshotSourcePort for JsonSnapshotSource {
    async fn load_snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            orders: self.read_relation(ORDERS_FILE)?,
            customers: self.read_relation(CUSTOMERS_FILE)?,
            payments: self.read_relation(PAYMENTS_FILE)?,
            order_items: self.read_relation(ORDER_ITEMS_FILE)?,
            reviews: self.read_relation(REVIEWS_FILE)?,
        })
    }
}
