//! Best-effort batch writes with structured per-item outcomes.
//!
//! Batches are not transactional: a failure midway leaves prior writes
//! persisted. Every item's outcome lands in the returned report — no error
//! is swallowed without a caller-visible signal.

use chrono::{DateTime, Utc};
use serde_json::Value;

use agrikiosk_core::EntityId;
use agrikiosk_dedupe::Resolution;

use crate::store::{Document, EntityKind, Store};

/// Outcome of one batch item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    /// Document `name` when present, positional otherwise.
    pub label: String,
    pub result: Result<EntityId, String>,
}

/// Structured result of a batch operation, decoupled from any output
/// mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub kind: EntityKind,
    pub items: Vec<ItemOutcome>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|i| i.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.items.len() - self.succeeded()
    }

    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }
}

/// Seed a batch of documents into a collection.
///
/// Failures do not abort the batch; they are reported per item and logged.
pub fn seed_batch(store: &dyn Store, kind: EntityKind, docs: Vec<Document>) -> BatchReport {
    let started_at = Utc::now();
    let mut items = Vec::with_capacity(docs.len());

    for (index, doc) in docs.into_iter().enumerate() {
        let label = doc
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{index}"));

        let result = match store.insert(kind, doc) {
            Ok(id) => {
                tracing::debug!(%kind, %label, %id, "seeded");
                Ok(id)
            }
            Err(err) => {
                tracing::warn!(%kind, %label, error = %err, "seed failed");
                Err(err.to_string())
            }
        };
        items.push(ItemOutcome { label, result });
    }

    let report = BatchReport {
        kind,
        items,
        started_at,
        finished_at: Utc::now(),
    };
    tracing::info!(
        %kind,
        succeeded = report.succeeded(),
        failed = report.failed(),
        "seed batch finished"
    );
    report
}

/// Commit a duplicate-bucket resolution: hard-delete every non-survivor.
///
/// Best-effort per item, same reporting contract as seeding. The survivor
/// is never touched.
pub fn commit_resolution(
    store: &dyn Store,
    kind: EntityKind,
    resolution: &Resolution,
) -> BatchReport {
    let started_at = Utc::now();
    let mut items = Vec::with_capacity(resolution.deleted.len());

    for id in &resolution.deleted {
        let result = match store.delete(kind, id) {
            Ok(()) => {
                tracing::debug!(%kind, %id, kept = %resolution.kept, "deleted duplicate");
                Ok(id.clone())
            }
            Err(err) => {
                tracing::warn!(%kind, %id, error = %err, "duplicate delete failed");
                Err(err.to_string())
            }
        };
        items.push(ItemOutcome {
            label: id.to_string(),
            result,
        });
    }

    BatchReport {
        kind,
        items,
        started_at,
        finished_at: Utc::now(),
    }
}
