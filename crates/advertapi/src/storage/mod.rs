//! Storage backends and the advert storage component.
//!
//! Backends implement [`advertapi_core::storage::AdvertRepository`]:
//!
//! - `dynamodb`: the managed remote table (default feature)
//! - `inmemory`: a process-local table for development and tests
//!
//! [`AdvertStorage`] sits on top of whichever backend is selected and owns the
//! advert lifecycle.

mod advert_storage;
#[cfg(feature = "dynamodb")]
pub mod dynamodb;
#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;
#[cfg(test)]
pub mod testing;

pub use advert_storage::{AdvertStorage, ScanMode};
