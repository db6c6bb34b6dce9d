//! Deploy and destroy plans, computed from the observed table state.
//!
//! Nothing in here talks to AWS.

use super::schema::TableSchema;

/// What DescribeTable reported for an existing table.
#[derive(Debug, Clone)]
pub struct TableState {
    pub status: TableStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

/// What `deploy` will do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    /// No table yet.
    CreateTable { schema: TableSchema },
    /// The table exists but is creating, updating or deleting.
    WaitForActive {
        table_name: String,
        status: TableStatus,
    },
    /// Already active.
    NoChanges { table_name: String },
}

/// What `deploy --destroy` will do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    DeleteTable { table_name: String },
    AlreadyGone { table_name: String },
}

pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableSchema) -> DeployPlan {
    match current {
        None => DeployPlan::CreateTable {
            schema: desired.clone(),
        },
        Some(state) if state.status == TableStatus::Active => DeployPlan::NoChanges {
            table_name: desired.name.clone(),
        },
        Some(state) => DeployPlan::WaitForActive {
            table_name: desired.name.clone(),
            status: state.status,
        },
    }
}

pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    match current {
        Some(_) => DestroyPlan::DeleteTable {
            table_name: table_name.to_string(),
        },
        None => DestroyPlan::AlreadyGone {
            table_name: table_name.to_string(),
        },
    }
}

/// Plan lines prefixed with `+`, `~` or `=`.
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    match plan {
        DeployPlan::CreateTable { schema } => vec![
            format!("+ Create table: {}", schema.name),
            format!("  Partition key: {} (S)", schema.hash_key),
            "  Billing: PAY_PER_REQUEST".to_string(),
        ],
        DeployPlan::WaitForActive { table_name, status } => vec![format!(
            "~ Wait for table '{}' to become active (currently {:?})",
            table_name, status
        )],
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' is up to date", table_name)]
        }
    }
}

/// Plan lines prefixed with `-` or `=`.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {} (ALL DATA WILL BE LOST)",
                table_name
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}
