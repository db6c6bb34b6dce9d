//! Lifecycle rules for advert records.
//!
//! All functions are pure: identifiers and clocks are passed in by the caller.

use chrono::{DateTime, Utc};

use super::requests::{Advert, ConfirmAdvert};
use super::types::{AdvertRecord, AdvertStatus};

/// What a confirmation does to the stored record.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmOutcome {
    /// Write the updated record back.
    Save(AdvertRecord),
    /// Remove the record entirely.
    Delete(String),
}

/// Builds the stored record for a newly submitted advert.
pub fn new_record(advert: Advert, id: impl Into<String>, now: DateTime<Utc>) -> AdvertRecord {
    AdvertRecord {
        id: id.into(),
        title: advert.title,
        description: advert.description,
        price: advert.price,
        creation_date_time: now,
        status: AdvertStatus::Pending,
        file_path: None,
    }
}

/// Applies a confirmation to an existing record.
///
/// Only an `Active` target keeps the record. Any other target removes it; there
/// is no retained rejected state.
pub fn apply_confirmation(mut record: AdvertRecord, confirm: ConfirmAdvert) -> ConfirmOutcome {
    if confirm.status.is_active() {
        record.file_path = confirm.file_path;
        record.status = AdvertStatus::Active;
        ConfirmOutcome::Save(record)
    } else {
        ConfirmOutcome::Delete(record.id)
    }
}

/// Returns true if a table descriptor status means the table is usable.
pub fn is_table_active(status: &str) -> bool {
    status.eq_ignore_ascii_case("active")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn pending() -> AdvertRecord {
        new_record(
            Advert::new("Sale").with_description("Old bike").with_price(25.5),
            "abc-123",
            now(),
        )
    }

    #[test]
    fn test_new_record_is_pending_without_file() {
        let record = pending();

        assert_eq!(record.id, "abc-123");
        assert_eq!(record.title, "Sale");
        assert_eq!(record.description.as_deref(), Some("Old bike"));
        assert_eq!(record.price, 25.5);
        assert_eq!(record.creation_date_time, now());
        assert_eq!(record.status, AdvertStatus::Pending);
        assert!(record.file_path.is_none());
    }

    #[test]
    fn test_confirm_active_sets_file_path() {
        let outcome = apply_confirmation(pending(), ConfirmAdvert::active("abc-123", "/f/1"));

        let record = match outcome {
            ConfirmOutcome::Save(record) => record,
            other => panic!("expected Save, got {other:?}"),
        };
        assert_eq!(record.status, AdvertStatus::Active);
        assert_eq!(record.file_path.as_deref(), Some("/f/1"));
        assert_eq!(record.creation_date_time, now());
    }

    #[test]
    fn test_confirm_non_active_deletes() {
        let outcome = apply_confirmation(pending(), ConfirmAdvert::rejected("abc-123"));
        assert_eq!(outcome, ConfirmOutcome::Delete("abc-123".to_string()));
    }

    #[test]
    fn test_is_table_active() {
        assert!(is_table_active("ACTIVE"));
        assert!(is_table_active("active"));
        assert!(is_table_active("Active"));
        assert!(!is_table_active("CREATING"));
        assert!(!is_table_active("DELETING"));
        assert!(!is_table_active(""));
    }
}
