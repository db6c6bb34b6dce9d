//! Desired shape of the advert table.

/// Default table name, shared with the service's `DYNAMODB_TABLE_NAME` default.
pub const DEFAULT_TABLE_NAME: &str = "Adverts";

/// String hash key every advert item is stored under.
pub const HASH_KEY: &str = "Id";

/// The advert table: a string hash key, no sort key, no secondary indexes,
/// billed per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub hash_key: &'static str,
}

impl TableSchema {
    pub fn adverts(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hash_key: HASH_KEY,
        }
    }
}
