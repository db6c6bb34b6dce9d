//! Request and response payloads for the advert API.
//!
//! These types are shared between the server and any client for type-safe API
//! communication. Pure data, no I/O.

use serde::{Deserialize, Serialize};

use super::types::AdvertStatus;

/// Request payload for creating a new advert.
///
/// Carries only caller-supplied content; identity, timestamps and status are
/// assigned server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Advert {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
}

impl Advert {
    /// Create a new advert payload with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            price: 0.0,
        }
    }

    /// Set the advert description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the advert price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }
}

/// Request payload for finalizing or rejecting a pending advert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ConfirmAdvert {
    pub id: String,
    pub status: AdvertStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl ConfirmAdvert {
    /// Confirm the advert as active with the uploaded file path.
    pub fn active(id: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: AdvertStatus::Active,
            file_path: Some(file_path.into()),
        }
    }

    /// Reject the advert. Rejected adverts are deleted.
    pub fn rejected(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: AdvertStatus::Pending,
            file_path: None,
        }
    }
}

/// Response payload returned after creating an advert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AddAdvertResponse {
    pub id: String,
}
