//! Functional core for the advert service.
//!
//! Pure data types, field mapping and lifecycle rules for advert records, plus
//! the contract every storage backend implements. Nothing in this crate
//! performs I/O.

pub mod advert;
pub mod storage;
