//! New command implementation: list pending migrations

use anyhow::Result;

use crate::cli::{GlobalArgs, NewArgs, OutputFormat};
use crate::commands::common::build_runner;
use crate::console::noun;

/// Execute the new command
pub async fn execute(args: &NewArgs, global: &GlobalArgs) -> Result<()> {
    let runner = build_runner(global)?;
    let mut files = runner.pending_files().await?;
    let total = files.len();

    if let Some(n) = args.limit.as_option() {
        files.truncate(n);
    }

    match args.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&files)?);
        }
        OutputFormat::Table => {
            if files.is_empty() {
                println!("No new migrations found. Your system is up-to-date.");
                return Ok(());
            }

            let n = files.len();
            if n < total {
                println!("Showing {} out of {} new {}:", n, total, noun(total));
            } else {
                println!("Found {} new {}:", n, noun(n));
            }
            for file in &files {
                println!("\t{}", file.name);
            }
        }
    }
    Ok(())
}
