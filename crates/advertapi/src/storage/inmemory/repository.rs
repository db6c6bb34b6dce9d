//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use advertapi_core::advert::AdvertRecord;
use advertapi_core::storage::{AdvertRepository, Result, ScanPage};

/// Status reported by a freshly created repository.
const ACTIVE_STATUS: &str = "ACTIVE";

/// In-memory advert table.
///
/// Records are ordered by identifier, so scans page through them
/// deterministically. Data is lost when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    adverts: Arc<RwLock<BTreeMap<String, AdvertRecord>>>,
    table_status: Arc<RwLock<String>>,
    page_size: Option<usize>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty, active table with unbounded scan pages.
    pub fn new() -> Self {
        Self {
            adverts: Arc::new(RwLock::new(BTreeMap::new())),
            table_status: Arc::new(RwLock::new(ACTIVE_STATUS.to_string())),
            page_size: None,
        }
    }

    /// Limits how many records a single scan call returns.
    #[cfg(test)]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size.max(1));
        self
    }

    /// Overrides the status reported by `table_status`.
    #[cfg(test)]
    pub async fn set_table_status(&self, status: impl Into<String>) {
        *self.table_status.write().await = status.into();
    }

    /// Number of stored records.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.adverts.read().await.len()
    }

    /// Returns true if no records are stored.
    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.adverts.read().await.is_empty()
    }
}

#[async_trait]
impl AdvertRepository for InMemoryRepository {
    async fn get_advert(&self, id: &str) -> Result<Option<AdvertRecord>> {
        let adverts = self.adverts.read().await;
        Ok(adverts.get(id).cloned())
    }

    async fn put_advert(&self, record: &AdvertRecord) -> Result<()> {
        let mut adverts = self.adverts.write().await;
        adverts.insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn delete_advert(&self, id: &str) -> Result<()> {
        let mut adverts = self.adverts.write().await;
        adverts.remove(id);
        Ok(())
    }

    async fn scan_adverts(&self, start_key: Option<String>) -> Result<ScanPage> {
        let adverts = self.adverts.read().await;
        let lower = match start_key {
            Some(key) => Bound::Excluded(key),
            None => Bound::Unbounded,
        };
        let limit = self.page_size.unwrap_or(usize::MAX);

        let mut remaining = adverts.range((lower, Bound::Unbounded)).map(|(_, r)| r);
        let records: Vec<AdvertRecord> = remaining.by_ref().take(limit).cloned().collect();

        let last_evaluated_key = match (remaining.next(), records.last()) {
            (Some(_), Some(last)) => Some(last.id.clone()),
            _ => None,
        };

        Ok(ScanPage {
            records,
            last_evaluated_key,
        })
    }

    async fn table_status(&self) -> Result<String> {
        Ok(self.table_status.read().await.clone())
    }
}
