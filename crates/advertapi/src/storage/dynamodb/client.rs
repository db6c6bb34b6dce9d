//! DynamoDB client construction.
//!
//! Connection settings are passed in as a [`DynamoDbConfig`] value when the
//! repository is built. Nothing reads or mutates them afterwards.

use aws_sdk_dynamodb::Client;

use crate::config::Config;

/// Connection settings for the advert table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamoDbConfig {
    /// AWS region.
    pub region: String,
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// Advert table name.
    pub table_name: String,
}

impl From<&Config> for DynamoDbConfig {
    fn from(config: &Config) -> Self {
        Self {
            region: config.aws_region.clone(),
            endpoint_url: config.aws_endpoint_url.clone(),
            table_name: config.table_name.clone(),
        }
    }
}

impl DynamoDbConfig {
    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

/// Creates a DynamoDB client with the given configuration.
///
/// Credentials come from the default AWS provider chain.
pub async fn create_client(config: &DynamoDbConfig) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}
