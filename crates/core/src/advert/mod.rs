mod operations;
mod requests;
mod types;

pub use operations::{apply_confirmation, is_table_active, new_record, ConfirmOutcome};
pub use requests::{AddAdvertResponse, Advert, ConfirmAdvert};
pub use types::{AdvertRecord, AdvertStatus, AdvertView, ParseStatusError};
