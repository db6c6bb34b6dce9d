//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of
//! [`advertapi_core::storage::AdvertRepository`] using `aws-sdk-dynamodb`.

mod client;
mod conversions;
mod error;
mod repository;

pub use client::DynamoDbConfig;
pub use repository::DynamoDbRepository;
