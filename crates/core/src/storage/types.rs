use crate::advert::AdvertRecord;

/// One page of an unfiltered table scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanPage {
    pub records: Vec<AdvertRecord>,
    /// Key to resume the scan from. `None` when the scan is exhausted.
    pub last_evaluated_key: Option<String>,
}

impl ScanPage {
    /// Returns true if more pages follow this one.
    pub fn has_more(&self) -> bool {
        self.last_evaluated_key.is_some()
    }
}
