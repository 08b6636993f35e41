//! Record repository: CRUD and filtered listing over the key-value store.
//!
//! Storage shape (canonical, replacing the historical variants):
//!
//! - `record:<id>`        record body as JSON
//! - `records:index`      sorted set, member = id, score = createdAt millis
//! - `record:doj:<n>`     secondary mapping, DOJ report number -> id
//!
//! Writes sequence body, then index, then mapping, with no cross-key
//! transaction. Readers treat the index as authoritative for existence but
//! always re-fetch the body and skip entries whose body is gone, so a crash
//! between writes degrades to a lazily repaired orphan rather than an error.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use celltrack_core::query::RecordFilter;
use celltrack_core::record::{CreateRecord, Record, UpdateRecord};
use celltrack_core::CoreError;

use crate::kv::KvStore;

const INDEX_KEY: &str = "records:index";
const RECORD_KEY_PREFIX: &str = "record:";
const DOJ_KEY_PREFIX: &str = "record:doj:";

fn record_key(id: &str) -> String {
    format!("{RECORD_KEY_PREFIX}{id}")
}

fn doj_key(doj: &str) -> String {
    format!("{DOJ_KEY_PREFIX}{doj}")
}

/// CRUD access to records. Cheap to clone; the store handle is shared.
#[derive(Clone)]
pub struct RecordRepo {
    store: Arc<dyn KvStore>,
}

impl RecordRepo {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Create a record from a client payload.
    ///
    /// A live secondary mapping for the same DOJ report number makes this a
    /// conflict unless `overwrite` is set, in which case the prior record is
    /// removed (body, index entry, mapping) before the new one is written.
    pub async fn create(&self, input: CreateRecord, overwrite: bool) -> Result<Record, CoreError> {
        let record = Record::from_create(input, Uuid::new_v4().to_string(), Utc::now())?;

        match self.get_by_doj(&record.doj_report_number).await? {
            Some(prior) if !overwrite => {
                return Err(CoreError::Conflict(format!(
                    "dojReportNumber {} already in use",
                    prior.doj_report_number
                )));
            }
            Some(prior) => {
                tracing::info!(prior_id = %prior.id, doj = %prior.doj_report_number, "Overwriting record");
                self.delete(&prior.id).await?;
            }
            None => {}
        }

        self.write_record(&record).await?;
        self.store
            .set(&doj_key(&record.doj_report_number), &record.id)
            .await?;

        tracing::info!(id = %record.id, doj = %record.doj_report_number, "Record created");
        Ok(record)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Record>, CoreError> {
        let Some(raw) = self.store.get(&record_key(id)).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(err) => {
                // A corrupt body is treated like a missing one; the read
                // path tolerates and skips it.
                tracing::warn!(id, error = %err, "Skipping unreadable record body");
                Ok(None)
            }
        }
    }

    /// Resolve a DOJ report number through the secondary mapping.
    ///
    /// A mapping whose body no longer exists is stale (partial delete); it is
    /// removed here and reported as absent.
    pub async fn get_by_doj(&self, doj: &str) -> Result<Option<Record>, CoreError> {
        let Some(id) = self.store.get(&doj_key(doj)).await? else {
            return Ok(None);
        };
        match self.get_by_id(&id).await? {
            Some(record) => Ok(Some(record)),
            None => {
                tracing::warn!(doj, id, "Dropping stale DOJ mapping");
                self.store.del(&doj_key(doj)).await?;
                Ok(None)
            }
        }
    }

    /// Merge a partial update onto an existing record.
    pub async fn update(&self, id: &str, input: UpdateRecord) -> Result<Record, CoreError> {
        let existing = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound {
                entity: "Record",
                id: id.to_string(),
            })?;

        let next = existing.apply_update(input, Utc::now())?;

        // Move the secondary mapping first so a failure mid-sequence leaves
        // at worst a stale mapping, which readers repair.
        if next.doj_report_number != existing.doj_report_number {
            self.store
                .del(&doj_key(&existing.doj_report_number))
                .await?;
            self.store
                .set(&doj_key(&next.doj_report_number), id)
                .await?;
        }

        self.write_record(&next).await?;
        tracing::info!(id, "Record updated");
        Ok(next)
    }

    /// Delete a record. Idempotent: deleting an unknown id succeeds.
    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        let existing = self.get_by_id(id).await?;

        self.store.del(&record_key(id)).await?;
        self.store.zrem(INDEX_KEY, id).await?;

        if let Some(record) = existing {
            let key = doj_key(&record.doj_report_number);
            // Only clear the mapping if it still points at this record.
            if self.store.get(&key).await?.as_deref() == Some(id) {
                self.store.del(&key).await?;
            }
            tracing::info!(id, "Record deleted");
        }
        Ok(())
    }

    /// List records newest-first, applying the filter in memory.
    ///
    /// Body fetches fan out concurrently; index entries without a body are
    /// skipped. The index is scored by `createdAt` while date filters compare
    /// the event date, so the range cannot be pushed down to the store.
    pub async fn list(&self, filter: &RecordFilter) -> Result<Vec<Record>, CoreError> {
        let ids = self.store.zrevrange(INDEX_KEY).await?;

        let bodies =
            futures::future::join_all(ids.iter().map(|id| self.get_by_id(id))).await;

        let mut rows = Vec::new();
        for body in bodies {
            if let Some(record) = body? {
                if filter.matches(&record) {
                    rows.push(record);
                }
            }
        }
        if let Some(limit) = filter.limit {
            rows.truncate(limit);
        }
        Ok(rows)
    }

    async fn write_record(&self, record: &Record) -> Result<(), CoreError> {
        let raw = serde_json::to_string(record)
            .map_err(|err| CoreError::Internal(format!("record serialization failed: {err}")))?;
        self.store.set(&record_key(&record.id), &raw).await?;
        self.store
            .zadd(INDEX_KEY, &record.id, record.created_at.timestamp_millis())
            .await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use assert_matches::assert_matches;
    use celltrack_core::record::Verdict;

    fn repo() -> RecordRepo {
        RecordRepo::new(Arc::new(MemoryStore::new()))
    }

    fn create_input(doj: &str, leading_id: i64) -> CreateRecord {
        CreateRecord {
            doj_report_number: Some(doj.into()),
            leading_id: Some(leading_id),
            verdict: Some(Verdict::Guilty),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let repo = repo();
        let created = repo.create(create_input("123456", 3), false).await.unwrap();
        assert!(!created.id.is_empty());

        let fetched = repo.get_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        let by_doj = repo.get_by_doj("123456").await.unwrap().unwrap();
        assert_eq!(by_doj.id, created.id);
    }

    #[tokio::test]
    async fn create_missing_required_field_is_validation_error() {
        let repo = repo();
        let input = CreateRecord {
            doj_report_number: None,
            ..create_input("123456", 3)
        };
        let err = repo.create(input, false).await.unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[tokio::test]
    async fn duplicate_doj_conflicts_and_keeps_first_record() {
        let repo = repo();
        let first = repo.create(create_input("123456", 3), false).await.unwrap();

        let err = repo
            .create(create_input("123456", 5), false)
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::Conflict(_));

        let rows = repo.list(&RecordFilter::default()).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, first.id);
    }

    #[tokio::test]
    async fn overwrite_replaces_prior_record() {
        let repo = repo();
        let first = repo.create(create_input("123456", 3), false).await.unwrap();
        let second = repo.create(create_input("123456", 5), true).await.unwrap();

        assert_eq!(repo.get_by_id(&first.id).await.unwrap(), None);
        let rows = repo.list(&RecordFilter::default()).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, second.id);
        assert_eq!(rows[0].leading_id, 5);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let repo = repo();
        let err = repo
            .update("ghost", UpdateRecord::default())
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::NotFound { .. });
    }

    #[tokio::test]
    async fn update_moves_doj_mapping() {
        let repo = repo();
        let created = repo.create(create_input("123456", 3), false).await.unwrap();

        let input = UpdateRecord {
            doj_report_number: Some("654321".into()),
            ..Default::default()
        };
        let updated = repo.update(&created.id, input).await.unwrap();
        assert_eq!(updated.doj_report_number, "654321");
        assert_eq!(updated.created_at, created.created_at);

        assert_eq!(repo.get_by_doj("123456").await.unwrap(), None);
        assert_eq!(
            repo.get_by_doj("654321").await.unwrap().map(|r| r.id),
            Some(created.id)
        );
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = repo();
        let created = repo.create(create_input("123456", 3), false).await.unwrap();

        repo.delete(&created.id).await.unwrap();
        repo.delete(&created.id).await.unwrap();

        assert_eq!(repo.get_by_id(&created.id).await.unwrap(), None);
        assert_eq!(repo.get_by_doj("123456").await.unwrap(), None);
        assert!(repo.list(&RecordFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_frees_doj_for_reuse() {
        let repo = repo();
        let first = repo.create(create_input("123456", 3), false).await.unwrap();
        repo.delete(&first.id).await.unwrap();

        // No conflict after the mapping is gone.
        repo.create(create_input("123456", 5), false).await.unwrap();
    }

    #[tokio::test]
    async fn list_is_newest_first_and_idempotent() {
        let repo = repo();
        // Creation timestamps come from Utc::now(); force distinct index
        // scores by spacing the creates out.
        let a = repo.create(create_input("111111", 1), false).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let b = repo.create(create_input("222222", 2), false).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let c = repo.create(create_input("333333", 3), false).await.unwrap();

        let rows = repo.list(&RecordFilter::default()).await.unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec![c.id.as_str(), b.id.as_str(), a.id.as_str()]);
        for pair in rows.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }

        let again = repo.list(&RecordFilter::default()).await.unwrap();
        assert_eq!(rows, again);
    }

    #[tokio::test]
    async fn list_staff_filter_is_exact_subset_of_unfiltered() {
        let repo = repo();
        repo.create(create_input("111111", 1), false).await.unwrap();
        repo.create(create_input("222222", 2), false).await.unwrap();
        repo.create(create_input("333333", 1), false).await.unwrap();

        let all = repo.list(&RecordFilter::default()).await.unwrap();
        let filter = RecordFilter {
            staff_id: Some(1),
            ..Default::default()
        };
        let filtered = repo.list(&filter).await.unwrap();

        let expected: Vec<_> = all.into_iter().filter(|r| r.leading_id == 1).collect();
        assert_eq!(filtered, expected);
        assert_eq!(filtered.len(), 2);
    }

    #[tokio::test]
    async fn list_applies_limit_after_filtering() {
        let repo = repo();
        for (i, doj) in ["111111", "222222", "333333"].iter().enumerate() {
            repo.create(create_input(doj, i as i64), false).await.unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        let filter = RecordFilter {
            limit: Some(2),
            ..Default::default()
        };
        assert_eq!(repo.list(&filter).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn list_skips_orphaned_index_entries() {
        let store = Arc::new(MemoryStore::new());
        let repo = RecordRepo::new(store.clone());
        let kept = repo.create(create_input("111111", 1), false).await.unwrap();
        let orphan = repo.create(create_input("222222", 2), false).await.unwrap();

        // Simulate a crash between body delete and index maintenance.
        store.del(&record_key(&orphan.id)).await.unwrap();

        let rows = repo.list(&RecordFilter::default()).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, kept.id);
    }

    #[tokio::test]
    async fn stale_doj_mapping_does_not_block_creation() {
        let store = Arc::new(MemoryStore::new());
        let repo = RecordRepo::new(store.clone());
        let prior = repo.create(create_input("123456", 1), false).await.unwrap();

        // Body vanished but the mapping survived.
        store.del(&record_key(&prior.id)).await.unwrap();

        let replacement = repo.create(create_input("123456", 2), false).await.unwrap();
        assert_eq!(
            repo.get_by_doj("123456").await.unwrap().map(|r| r.id),
            Some(replacement.id)
        );
    }
}
