//! History command implementation

use anyhow::Result;

use crate::cli::{GlobalArgs, HistoryArgs, OutputFormat};
use crate::commands::common::build_runner;
use crate::console::noun;

/// Execute the history command
pub async fn execute(args: &HistoryArgs, global: &GlobalArgs) -> Result<()> {
    let runner = build_runner(global)?;
    let limit = args.limit.as_option();
    let records = runner.history(limit).await?;

    match args.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Table => {
            if records.is_empty() {
                println!("No migration has been done before.");
                return Ok(());
            }

            let n = records.len();
            if limit.is_some() {
                println!("Showing the last {} applied {}:", n, noun(n));
            } else {
                println!(
                    "Total {} {} been applied before:",
                    n,
                    if n == 1 { "migration has" } else { "migrations have" }
                );
            }
            for record in &records {
                println!("\t({}) {} : {}", record.applied_at, record.version, record.name);
            }
        }
    }
    Ok(())
}
