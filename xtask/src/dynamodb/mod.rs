//! `cargo xtask dynamodb ...`: lifecycle of the advert table.

mod admin;
mod error;
mod planning;
mod schema;

pub use error::{Result, TableError};

use dialoguer::Confirm;

use crate::output::Reporter;
use admin::{TableAdmin, Target};
use planning::{DeployPlan, DestroyPlan};
use schema::{TableSchema, DEFAULT_TABLE_NAME};

#[derive(Debug, clap::Subcommand)]
pub enum TableTask {
    /// Create the advert table (or delete it with --destroy)
    ///
    /// Prints the planned change and asks before applying it. Honors
    /// AWS_REGION, AWS_ENDPOINT_URL and the usual AWS credential variables.
    Deploy(DeployArgs),

    /// Show whether the advert table exists and its status
    Status(TableArgs),
}

#[derive(Debug, clap::Args)]
pub struct TableArgs {
    /// Name of the advert table
    #[arg(long, env = "DYNAMODB_TABLE_NAME", default_value = DEFAULT_TABLE_NAME)]
    pub table_name: String,
}

#[derive(Debug, clap::Args)]
pub struct DeployArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Apply without asking
    #[arg(long)]
    pub force: bool,

    /// Delete the table and every advert in it
    #[arg(long)]
    pub destroy: bool,
}

pub async fn run(task: TableTask, out: &Reporter) -> Result<()> {
    let target = Target::from_env();
    out.field("Target", &target);

    let admin = TableAdmin::connect(&target).await;

    match task {
        TableTask::Deploy(args) if args.destroy => destroy(&admin, args, out).await,
        TableTask::Deploy(args) => deploy(&admin, args, out).await,
        TableTask::Status(args) => status(&admin, &args.table_name, out).await,
    }
}

async fn deploy(admin: &TableAdmin, args: DeployArgs, out: &Reporter) -> Result<()> {
    let schema = TableSchema::adverts(args.table.table_name);
    let current = admin.state(&schema.name).await?;
    let plan = planning::calculate_deploy_plan(current.as_ref(), &schema);

    out.step("Deploy plan");
    out.plan(&planning::format_deploy_plan(&plan));

    if let DeployPlan::NoChanges { .. } = plan {
        return Ok(());
    }
    ask("Apply this plan?", true, args.force)?;

    admin.apply_deploy(&plan).await?;
    out.done(&format!("Table '{}' is active.", schema.name));
    Ok(())
}

async fn destroy(admin: &TableAdmin, args: DeployArgs, out: &Reporter) -> Result<()> {
    let table = args.table.table_name;
    let current = admin.state(&table).await?;
    let plan = planning::calculate_destroy_plan(current.as_ref(), &table);

    out.step("Destroy plan");
    out.plan(&planning::format_destroy_plan(&plan));

    if let DestroyPlan::AlreadyGone { .. } = plan {
        return Ok(());
    }
    ask(
        &format!("Delete '{table}' and every advert stored in it?"),
        false,
        args.force,
    )?;

    admin.apply_destroy(&plan).await?;
    out.done(&format!("Table '{table}' deleted."));
    Ok(())
}

async fn status(admin: &TableAdmin, table: &str, out: &Reporter) -> Result<()> {
    out.field("Table", table);
    match admin.state(table).await? {
        Some(state) => out.field("Status", format!("{:?}", state.status)),
        None => out.field("Status", "missing"),
    }
    Ok(())
}

/// Interactive yes/no gate; `force` skips the prompt.
fn ask(prompt: &str, default: bool, force: bool) -> Result<()> {
    if force || Confirm::new().with_prompt(prompt).default(default).interact()? {
        Ok(())
    } else {
        Err(TableError::Aborted)
    }
}
