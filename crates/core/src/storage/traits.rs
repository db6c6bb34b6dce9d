use async_trait::async_trait;

use crate::advert::AdvertRecord;

use super::{Result, ScanPage};

/// The remote advert table.
///
/// A single table keyed by string identifier. Every method maps to exactly one
/// remote call.
#[async_trait]
pub trait AdvertRepository: Send + Sync {
    /// Point read by identifier.
    async fn get_advert(&self, id: &str) -> Result<Option<AdvertRecord>>;

    /// Point write. Overwrites any record with the same identifier.
    async fn put_advert(&self, record: &AdvertRecord) -> Result<()>;

    /// Point delete by identifier.
    async fn delete_advert(&self, id: &str) -> Result<()>;

    /// Unfiltered scan returning one page, starting after `start_key`.
    async fn scan_adverts(&self, start_key: Option<String>) -> Result<ScanPage>;

    /// Descriptive status of the table (e.g. `ACTIVE`, `CREATING`).
    async fn table_status(&self) -> Result<String>;
}
