use sha2::{Digest, Sha256};

use crate::domain::Snapshot;
use crate::error::Result;

/// Content fingerprint of an input snapshot.
///
/// Relations are hashed in a fixed order, so two runs over byte-identical
/// relations carry the same fingerprint in their summaries and a scheduler
/// can recognize a re-run of unchanged inputs.
pub fn snapshot_fingerprint(snapshot: &Snapshot) -> Result<String> {
    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_vec(&snapshot.orders)?);
    hasher.update(serde_json::to_vec(&snapshot.customers)?);
    hasher.update(serde_json::to_vec(&snapshot.payments)?);
    hasher.update(serde_json::to_vec(&snapshot.order_items)?);
    hasher.update(serde_json::to_vec(&snapshot.reviews)?);
    Ok(hex::encode(hasher.finalize()))
}
