//! To command implementation

use anyhow::Result;

use crate::cli::{GlobalArgs, ToArgs};
use crate::commands::common::build_runner;

/// Execute the to command
pub async fn execute(args: &ToArgs, global: &GlobalArgs) -> Result<()> {
    let runner = build_runner(global)?;
    runner.to_version(args.version).await?;
    Ok(())
}
