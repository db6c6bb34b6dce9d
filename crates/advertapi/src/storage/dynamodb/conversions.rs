//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! advert records. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use advertapi_core::advert::{AdvertRecord, AdvertStatus};
use advertapi_core::storage::RepositoryError;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};

// ============================================================================
// Attribute names
// ============================================================================

pub const ATTR_ID: &str = "Id";
pub const ATTR_TITLE: &str = "Title";
pub const ATTR_DESCRIPTION: &str = "Description";
pub const ATTR_PRICE: &str = "Price";
pub const ATTR_CREATION_DATE_TIME: &str = "CreationDateTime";
pub const ATTR_STATUS: &str = "Status";
pub const ATTR_FILE_PATH: &str = "FilePath";

// ============================================================================
// Keys
// ============================================================================

/// Primary key map for an advert.
pub fn advert_key(id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(ATTR_ID.to_string(), AttributeValue::S(id.to_string()))])
}

/// Extract the scan cursor from a `LastEvaluatedKey` map.
pub fn cursor_from_key(key: &HashMap<String, AttributeValue>) -> Option<String> {
    key.get(ATTR_ID)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

// ============================================================================
// Advert conversions
// ============================================================================

/// Convert an AdvertRecord to DynamoDB item.
pub fn advert_to_item(record: &AdvertRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(ATTR_ID.to_string(), AttributeValue::S(record.id.clone()));
    item.insert(
        ATTR_TITLE.to_string(),
        AttributeValue::S(record.title.clone()),
    );
    if let Some(desc) = &record.description {
        item.insert(ATTR_DESCRIPTION.to_string(), AttributeValue::S(desc.clone()));
    }
    item.insert(
        ATTR_PRICE.to_string(),
        AttributeValue::N(record.price.to_string()),
    );
    item.insert(
        ATTR_CREATION_DATE_TIME.to_string(),
        AttributeValue::S(record.creation_date_time.to_rfc3339()),
    );
    item.insert(
        ATTR_STATUS.to_string(),
        AttributeValue::S(record.status.as_str().to_string()),
    );
    if let Some(path) = &record.file_path {
        item.insert(ATTR_FILE_PATH.to_string(), AttributeValue::S(path.clone()));
    }

    item
}

/// Convert a DynamoDB item to AdvertRecord.
pub fn item_to_advert(
    item: &HashMap<String, AttributeValue>,
) -> Result<AdvertRecord, RepositoryError> {
    Ok(AdvertRecord {
        id: get_string(item, ATTR_ID)?,
        title: get_string(item, ATTR_TITLE)?,
        description: get_optional_string(item, ATTR_DESCRIPTION),
        price: get_number(item, ATTR_PRICE)?,
        creation_date_time: get_datetime(item, ATTR_CREATION_DATE_TIME)?,
        status: get_status(item, ATTR_STATUS)?,
        file_path: get_optional_string(item, ATTR_FILE_PATH),
    })
}

// ============================================================================
// Attribute helpers
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a number attribute, reading a missing one as zero.
fn get_number(item: &HashMap<String, AttributeValue>, key: &str) -> Result<f64, RepositoryError> {
    match item.get(key).and_then(|v| v.as_n().ok()) {
        Some(n) => n
            .parse::<f64>()
            .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e))),
        None => Ok(0.0),
    }
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}

/// Get a required status attribute.
fn get_status(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<AdvertStatus, RepositoryError> {
    get_string(item, key)?
        .parse()
        .map_err(|e: advertapi_core::advert::ParseStatusError| {
            RepositoryError::InvalidData(e.to_string())
        })
}
