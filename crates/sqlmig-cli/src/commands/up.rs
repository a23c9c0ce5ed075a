//! Up command implementation

use anyhow::Result;

use crate::cli::{GlobalArgs, UpArgs};
use crate::commands::common::build_runner;

/// Execute the up command
pub async fn execute(args: &UpArgs, global: &GlobalArgs) -> Result<()> {
    let runner = build_runner(global)?;
    let limit = args.limit.and_then(|l| l.as_option());
    runner.up(limit).await?;
    Ok(())
}
