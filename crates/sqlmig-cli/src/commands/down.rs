//! Down command implementation

use anyhow::Result;

use crate::cli::{DownArgs, GlobalArgs};
use crate::commands::common::build_runner;

/// Execute the down command
pub async fn execute(args: &DownArgs, global: &GlobalArgs) -> Result<()> {
    let runner = build_runner(global)?;
    runner.down(args.limit.as_option()).await?;
    Ok(())
}
