//! Redo command implementation

use anyhow::Result;

use crate::cli::{GlobalArgs, RedoArgs};
use crate::commands::common::build_runner;

/// Execute the redo command
pub async fn execute(args: &RedoArgs, global: &GlobalArgs) -> Result<()> {
    let runner = build_runner(global)?;
    runner.redo(args.limit.as_option()).await?;
    Ok(())
}
