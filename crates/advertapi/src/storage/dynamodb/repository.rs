//! DynamoDB repository implementation.
//!
//! Implements `AdvertRepository` from `advertapi_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use advertapi_core::advert::AdvertRecord;
use advertapi_core::storage::{AdvertRepository, RepositoryError, Result, ScanPage};

use super::client::{create_client, DynamoDbConfig};
use super::conversions::{advert_key, advert_to_item, cursor_from_key, item_to_advert};
use super::error::{
    map_delete_item_error, map_describe_table_error, map_get_item_error, map_put_item_error,
    map_scan_error,
};

/// DynamoDB-based advert repository.
///
/// Every method issues exactly one request against the advert table.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from explicit connection settings.
    ///
    /// Uses the AWS SDK default credential chain.
    pub async fn connect(config: &DynamoDbConfig) -> Self {
        tracing::info!(
            target_env = %config.target_display(),
            table = %config.table_name,
            "Connecting to DynamoDB"
        );

        let client = create_client(config).await;
        Self::new(client, config.table_name.clone())
    }
}

#[async_trait]
impl AdvertRepository for DynamoDbRepository {
    async fn get_advert(&self, id: &str) -> Result<Option<AdvertRecord>> {
        tracing::debug!(advert_id = %id, table = %self.table_name, "GetItem");

        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(advert_key(id)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_advert(&item)?)),
            None => Ok(None),
        }
    }

    async fn put_advert(&self, record: &AdvertRecord) -> Result<()> {
        tracing::debug!(advert_id = %record.id, table = %self.table_name, "PutItem");

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(advert_to_item(record)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn delete_advert(&self, id: &str) -> Result<()> {
        tracing::debug!(advert_id = %id, table = %self.table_name, "DeleteItem");

        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(advert_key(id)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn scan_adverts(&self, start_key: Option<String>) -> Result<ScanPage> {
        tracing::debug!(start_key = ?start_key, table = %self.table_name, "Scan");

        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .set_exclusive_start_key(start_key.as_deref().map(advert_key))
            .send()
            .await
            .map_err(map_scan_error)?;

        let records = result
            .items
            .unwrap_or_default()
            .iter()
            .map(item_to_advert)
            .collect::<Result<Vec<_>>>()?;

        Ok(ScanPage {
            records,
            last_evaluated_key: result.last_evaluated_key.as_ref().and_then(cursor_from_key),
        })
    }

    async fn table_status(&self) -> Result<String> {
        let result = self
            .client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| map_describe_table_error(e, &self.table_name))?;

        result
            .table()
            .and_then(|table| table.table_status())
            .map(|status| status.as_str().to_string())
            .ok_or_else(|| {
                RepositoryError::InvalidData(format!(
                    "Table '{}' reported no status",
                    self.table_name
                ))
            })
    }
}
