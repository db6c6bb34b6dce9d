use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state of an advert.
///
/// Records are created `Pending` and either move to `Active` or are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AdvertStatus {
    Pending,
    Active,
}

impl AdvertStatus {
    /// Returns the attribute value used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvertStatus::Pending => "Pending",
            AdvertStatus::Active => "Active",
        }
    }

    /// Returns true if the advert has been confirmed.
    pub fn is_active(&self) -> bool {
        matches!(self, AdvertStatus::Active)
    }
}

impl fmt::Display for AdvertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is not a known [`AdvertStatus`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown advert status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for AdvertStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pending") {
            Ok(AdvertStatus::Pending)
        } else if s.eq_ignore_ascii_case("active") {
            Ok(AdvertStatus::Active)
        } else {
            Err(ParseStatusError(s.to_string()))
        }
    }
}

/// An advert as persisted in the remote table.
///
/// `id` and `creation_date_time` are assigned once at creation and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvertRecord {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub creation_date_time: DateTime<Utc>,
    pub status: AdvertStatus,
    pub file_path: Option<String>,
}

/// An advert as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AdvertView {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub creation_date_time: DateTime<Utc>,
    pub status: AdvertStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl From<AdvertRecord> for AdvertView {
    fn from(record: AdvertRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            price: record.price,
            creation_date_time: record.creation_date_time,
            status: record.status,
            file_path: record.file_path,
        }
    }
}
