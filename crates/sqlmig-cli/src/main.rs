//! sqlmig CLI - sequential SQL-file schema migrations

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod console;
mod runner;
mod store;

use cli::Cli;
use commands::{down, history, new, redo, to, up};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Up(args) => up::execute(args, &cli.global).await,
        cli::Commands::Down(args) => down::execute(args, &cli.global).await,
        cli::Commands::Redo(args) => redo::execute(args, &cli.global).await,
        cli::Commands::To(args) => to::execute(args, &cli.global).await,
        cli::Commands::History(args) => history::execute(args, &cli.global).await,
        cli::Commands::New(args) => new::execute(args, &cli.global).await,
    }
}
