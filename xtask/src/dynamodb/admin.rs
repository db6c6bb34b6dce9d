//! Table administration against a live DynamoDB endpoint.

use std::time::Duration;

use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
    TableStatus as SdkTableStatus,
};
use aws_sdk_dynamodb::Client;

use super::error::{Result, TableError};
use super::planning::{DeployPlan, DestroyPlan, TableState, TableStatus};
use super::schema::TableSchema;

const POLL_INTERVAL: Duration = Duration::from_secs(2);
const ACTIVATION_TIMEOUT: Duration = Duration::from_secs(120);

/// Where the table lives, read from the same variables the service uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub region: String,
    pub endpoint_url: Option<String>,
}

impl Target {
    pub fn from_env() -> Self {
        Self {
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            endpoint_url: std::env::var("AWS_ENDPOINT_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.endpoint_url {
            Some(url) => write!(f, "{url} (local endpoint, region {})", self.region),
            None => write!(f, "AWS, region {}", self.region),
        }
    }
}

/// Thin wrapper over the SDK client exposing only what the xtask needs.
pub struct TableAdmin {
    client: Client,
}

impl TableAdmin {
    pub async fn connect(target: &Target) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(target.region.clone()));
        if let Some(url) = &target.endpoint_url {
            loader = loader.endpoint_url(url);
        }

        Self {
            client: Client::new(&loader.load().await),
        }
    }

    /// Current state of the table, `None` when it does not exist.
    pub async fn state(&self, table: &str) -> Result<Option<TableState>> {
        let response = match self.client.describe_table().table_name(table).send().await {
            Ok(response) => response,
            Err(err) => {
                return match err.into_service_error() {
                    DescribeTableError::ResourceNotFoundException(_) => Ok(None),
                    other => Err(TableError::sdk("DescribeTable")(other)),
                }
            }
        };

        let status = response
            .table()
            .and_then(|t| t.table_status())
            .map(status_from_sdk)
            .unwrap_or(TableStatus::Active);

        Ok(Some(TableState { status }))
    }

    pub async fn apply_deploy(&self, plan: &DeployPlan) -> Result<()> {
        match plan {
            DeployPlan::CreateTable { schema } => {
                self.create(schema).await?;
                self.await_active(&schema.name).await
            }
            DeployPlan::WaitForActive { table_name, .. } => self.await_active(table_name).await,
            DeployPlan::NoChanges { .. } => Ok(()),
        }
    }

    pub async fn apply_destroy(&self, plan: &DestroyPlan) -> Result<()> {
        match plan {
            DestroyPlan::DeleteTable { table_name } => {
                self.client
                    .delete_table()
                    .table_name(table_name)
                    .send()
                    .await
                    .map_err(TableError::sdk("DeleteTable"))?;
                Ok(())
            }
            DestroyPlan::AlreadyGone { .. } => Ok(()),
        }
    }

    async fn create(&self, schema: &TableSchema) -> Result<()> {
        let key = KeySchemaElement::builder()
            .attribute_name(schema.hash_key)
            .key_type(KeyType::Hash)
            .build()
            .map_err(TableError::sdk("CreateTable"))?;
        let attribute = AttributeDefinition::builder()
            .attribute_name(schema.hash_key)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(TableError::sdk("CreateTable"))?;

        self.client
            .create_table()
            .table_name(&schema.name)
            .key_schema(key)
            .attribute_definitions(attribute)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .map_err(TableError::sdk("CreateTable"))?;
        Ok(())
    }

    /// Polls until the table reports `ACTIVE` or the activation timeout passes.
    async fn await_active(&self, table: &str) -> Result<()> {
        let poll = async {
            let mut ticker = tokio::time::interval(POLL_INTERVAL);
            loop {
                ticker.tick().await;
                if let Some(TableState {
                    status: TableStatus::Active,
                }) = self.state(table).await?
                {
                    return Ok::<(), TableError>(());
                }
            }
        };

        tokio::time::timeout(ACTIVATION_TIMEOUT, poll)
            .await
            .map_err(|_| TableError::NotActive {
                table: table.to_string(),
                waited_secs: ACTIVATION_TIMEOUT.as_secs(),
            })?
    }
}

fn status_from_sdk(status: &SdkTableStatus) -> TableStatus {
    match status {
        SdkTableStatus::Creating => TableStatus::Creating,
        SdkTableStatus::Updating => TableStatus::Updating,
        SdkTableStatus::Deleting => TableStatus::Deleting,
        _ => TableStatus::Active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_sdk() {
        assert_eq!(status_from_sdk(&SdkTableStatus::Active), TableStatus::Active);
        assert_eq!(
            status_from_sdk(&SdkTableStatus::Creating),
            TableStatus::Creating
        );
        assert_eq!(
            status_from_sdk(&SdkTableStatus::Deleting),
            TableStatus::Deleting
        );
    }

    #[test]
    fn test_target_display() {
        let aws = Target {
            region: "eu-west-1".to_string(),
            endpoint_url: None,
        };
        let local = Target {
            region: "us-east-1".to_string(),
            endpoint_url: Some("http://localhost:8000".to_string()),
        };

        assert_eq!(aws.to_string(), "AWS, region eu-west-1");
        assert_eq!(
            local.to_string(),
            "http://localhost:8000 (local endpoint, region us-east-1)"
        );
    }
}
