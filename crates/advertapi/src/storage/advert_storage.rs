//! The advert storage component.
//!
//! Translates between request/response shapes and the stored record, and
//! issues the remote table operations for each advert use case. There is no
//! local buffering, batching or retry: every fault from the backend surfaces
//! to the caller unchanged.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use advertapi_core::advert::{
    apply_confirmation, is_table_active, new_record, Advert, AdvertView, ConfirmAdvert,
    ConfirmOutcome,
};
use advertapi_core::storage::{AdvertRepository, RepositoryError, Result};

/// How many pages an unfiltered listing reads from the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Only the first page the backend returns. Records past that page are
    /// not listed.
    #[default]
    FirstPage,
    /// Follow the scan cursor until the table is exhausted.
    AllPages,
}

/// Advert use cases over a single remote table.
#[derive(Clone)]
pub struct AdvertStorage {
    repo: Arc<dyn AdvertRepository>,
    scan_mode: ScanMode,
}

impl AdvertStorage {
    /// Creates a storage component over the given backend.
    pub fn new(repo: Arc<dyn AdvertRepository>) -> Self {
        Self {
            repo,
            scan_mode: ScanMode::default(),
        }
    }

    /// Sets how many scan pages `get_all` reads.
    pub fn with_scan_mode(mut self, scan_mode: ScanMode) -> Self {
        self.scan_mode = scan_mode;
        self
    }

    /// Stores a new pending advert and returns its generated identifier.
    pub async fn add(&self, advert: Advert) -> Result<String> {
        let record = new_record(advert, Uuid::new_v4().to_string(), Utc::now());

        self.repo.put_advert(&record).await?;

        tracing::info!(advert_id = %record.id, title = %record.title, "Created advert");
        Ok(record.id)
    }

    /// Activates or removes a pending advert.
    ///
    /// Fails with `NotFound` if the identifier does not exist. Either branch is
    /// terminal: an advert that is not confirmed active is deleted.
    pub async fn confirm(&self, confirm: ConfirmAdvert) -> Result<()> {
        let record = self
            .repo
            .get_advert(&confirm.id)
            .await?
            .ok_or_else(|| RepositoryError::advert_not_found(&confirm.id))?;

        match apply_confirmation(record, confirm) {
            ConfirmOutcome::Save(record) => {
                self.repo.put_advert(&record).await?;
                tracing::info!(
                    advert_id = %record.id,
                    file_path = ?record.file_path,
                    "Activated advert"
                );
            }
            ConfirmOutcome::Delete(id) => {
                self.repo.delete_advert(&id).await?;
                tracing::info!(advert_id = %id, "Deleted unconfirmed advert");
            }
        }

        Ok(())
    }

    /// Looks up an advert by identifier.
    pub async fn get_by_id(&self, id: &str) -> Result<AdvertView> {
        self.repo
            .get_advert(id)
            .await?
            .map(AdvertView::from)
            .ok_or_else(|| RepositoryError::advert_not_found(id))
    }

    /// Lists adverts in whatever order the backend scan yields them.
    pub async fn get_all(&self) -> Result<Vec<AdvertView>> {
        let mut page = self.repo.scan_adverts(None).await?;
        let mut adverts: Vec<AdvertView> = page.records.drain(..).map(AdvertView::from).collect();

        if self.scan_mode == ScanMode::AllPages {
            while let Some(start_key) = page.last_evaluated_key.take() {
                page = self.repo.scan_adverts(Some(start_key)).await?;
                adverts.extend(page.records.drain(..).map(AdvertView::from));
            }
        } else if page.has_more() {
            tracing::debug!(
                returned = adverts.len(),
                "Advert listing truncated to the first scan page"
            );
        }

        Ok(adverts)
    }

    /// Returns true if the backing table reports itself as active.
    pub async fn check_health(&self) -> Result<bool> {
        let status = self.repo.table_status().await?;
        tracing::debug!(table_status = %status, "Checked advert table status");
        Ok(is_table_active(&status))
    }
}
