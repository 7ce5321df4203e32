use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::app::ports::MartOutputPort;
use crate::domain::OrderAnalyticsRecord;

/// Output adapter writing one JSON object per line, the hand-off format for
/// the downstream reporting collaborator
pub struct JsonLinesOutputAdapter {
    writer: Mutex<BufWriter<File>>,
}

impl JsonLinesOutputAdapter {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create output directory for '{}'", path.display()))?;
            }
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file '{}'", path.display()))?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }
}

#[async_trait]
impl MartOutputPort for JsonLinesOutputAdapter {
    async fn write_record(&self, record: &OrderAnalyticsRecord) -> Result<()> {
        let mut writer = self.writer.lock().await;
        serde_json::to_writer(&mut *writer, record)?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    async fn finish(&self) -> Result<()> {
        let mut writer = self.writer.lock().await;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DelayStatus;
    use chrono::NaiveDate;

    fn create_test_record(order_id: &str) -> OrderAnalyticsRecord {
        let purchased_at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        OrderAnalyticsRecord {
            order_id: order_id.to_string(),
            customer_unique_id: "u1".to_string(),
            status: "delivered".to_string(),
            customer_city: "curitiba".to_string(),
            customer_state: "PR".to_string(),
            region: "South".to_string(),
            purchased_at,
            delivered_at: purchased_at + chrono::Duration::days(9),
            estimated_delivery_at: purchased_at + chrono::Duration::days(7),
            delivery_days: 9,
            promised_days: 7,
            delay_status: DelayStatus::Delayed,
            total_payment: 40.0,
            total_products: 35.0,
            total_freight: 5.0,
            payment_methods: "credit_card, voucher".to_string(),
            review_score: Some(4.5),
        }
    }

    #[tokio::test]
    async fn test_writes_one_json_object_per_line() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("mart.jsonl");

        let adapter = JsonLinesOutputAdapter::create(&path).unwrap();
        adapter.write_record(&create_test_record("A1")).await.unwrap();
        adapter.write_record(&create_test_record("B2")).await.unwrap();
        adapter.finish().await.unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["order_id"], "A1");
        assert_eq!(first["valor_total_pagamento"], 40.0);
        assert_eq!(first["metodos_pagamento"], "credit_card, voucher");
        assert_eq!(first["delay_status"], "Delayed");
    }
}
