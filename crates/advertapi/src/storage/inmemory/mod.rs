//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of
//! [`advertapi_core::storage::AdvertRepository`] that keeps records in a
//! `BTreeMap` wrapped in `Arc<RwLock<_>>`. Useful for tests and for running
//! the API locally without AWS credentials.
//!
//! # Example
//!
//! ```rust,ignore
//! use advertapi::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new().with_page_size(25);
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
