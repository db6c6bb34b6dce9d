use aws_sdk_dynamodb::error::DisplayErrorContext;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TableError>;

/// Failures of the table maintenance commands.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("{operation} failed: {message}")]
    Sdk {
        operation: &'static str,
        message: String,
    },

    #[error("aborted, no changes were made")]
    Aborted,

    #[error("table '{table}' was not active after {waited_secs}s")]
    NotActive { table: String, waited_secs: u64 },

    #[error("could not read confirmation: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl TableError {
    /// Wraps an AWS SDK error, keeping its full source chain in the message.
    pub fn sdk<E: std::error::Error>(operation: &'static str) -> impl FnOnce(E) -> Self {
        move |err| Self::Sdk {
            operation,
            message: DisplayErrorContext(err).to_string(),
        }
    }
}
