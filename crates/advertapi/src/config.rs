use std::env;

use crate::storage::ScanMode;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of the advert table (default: "Adverts")
    pub table_name: String,
    /// AWS region of the table (default: "us-east-1")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub aws_region: String,
    /// Custom endpoint URL, e.g. a local DynamoDB (default: none)
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub aws_endpoint_url: Option<String>,
    /// How many scan pages `GET /advert` reads (default: first page only)
    pub scan_mode: ScanMode,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - Advert table name (default: "Adverts")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (default: unset)
    /// - `ADVERT_SCAN_ALL_PAGES` - `true` or `1` to read every scan page (default: false)
    pub fn from_env() -> Self {
        let scan_all_pages = env::var("ADVERT_SCAN_ALL_PAGES")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            table_name: env::var("DYNAMODB_TABLE_NAME").unwrap_or_else(|_| "Adverts".to_string()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            aws_endpoint_url: env::var("AWS_ENDPOINT_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            scan_mode: if scan_all_pages {
                ScanMode::AllPages
            } else {
                ScanMode::FirstPage
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
