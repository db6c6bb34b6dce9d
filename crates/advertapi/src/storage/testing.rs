//! Test doubles for the storage layer.

use async_trait::async_trait;

use advertapi_core::advert::AdvertRecord;
use advertapi_core::storage::{AdvertRepository, RepositoryError, Result, ScanPage};

/// A backend whose every call fails with the same error, standing in for an
/// unreachable or misbehaving remote table.
#[derive(Debug, Clone)]
pub struct FailingRepository {
    error: RepositoryError,
}

impl FailingRepository {
    pub fn new(error: RepositoryError) -> Self {
        Self { error }
    }

    pub fn unavailable() -> Self {
        Self::new(RepositoryError::Unavailable(
            "Failed to reach DynamoDB".to_string(),
        ))
    }

    pub fn query_failed() -> Self {
        Self::new(RepositoryError::QueryFailed(
            "GetItem failed: AccessDeniedException { account: 123456789012 }".to_string(),
        ))
    }
}

#[async_trait]
impl AdvertRepository for FailingRepository {
    async fn get_advert(&self, _id: &str) -> Result<Option<AdvertRecord>> {
        Err(self.error.clone())
    }

    async fn put_advert(&self, _record: &AdvertRecord) -> Result<()> {
        Err(self.error.clone())
    }

    async fn delete_advert(&self, _id: &str) -> Result<()> {
        Err(self.error.clone())
    }

    async fn scan_adverts(&self, _start_key: Option<String>) -> Result<ScanPage> {
        Err(self.error.clone())
    }

    async fn table_status(&self) -> Result<String> {
        Err(self.error.clone())
    }
}
