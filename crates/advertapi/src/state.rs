//! Shared application state.
//!
//! Holds the advert storage component, which wraps the storage backend
//! selected at compile time via feature flags.

use std::sync::Arc;

use advertapi_core::storage::AdvertRepository;

use crate::{config::Config, storage::AdvertStorage};

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!("Cannot enable both 'dynamodb' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state.
///
/// Cloned for each request handler. Holds no per-request mutable state: every
/// request goes straight to the storage backend.
#[derive(Clone)]
pub struct AppState {
    pub storage: AdvertStorage,
}

impl AppState {
    /// Creates state around an already constructed repository.
    pub fn new(repo: Arc<dyn AdvertRepository>, config: &Config) -> Self {
        Self {
            storage: AdvertStorage::new(repo).with_scan_mode(config.scan_mode),
        }
    }

    /// Creates state using the DynamoDB backend.
    #[cfg(feature = "dynamodb")]
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        use crate::storage::dynamodb::{DynamoDbConfig, DynamoDbRepository};

        let repo = DynamoDbRepository::connect(&DynamoDbConfig::from(config)).await;
        Ok(Self::new(Arc::new(repo), config))
    }

    /// Creates state using the in-memory backend.
    #[cfg(feature = "inmemory")]
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        use crate::storage::inmemory::InMemoryRepository;

        tracing::warn!("Using in-memory advert storage; data is lost on shutdown");
        Ok(Self::new(Arc::new(InMemoryRepository::new()), config))
    }
}
