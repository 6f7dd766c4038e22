// next-scaffold - Next.js project scaffolding
// Main CLI entry point

use clap::Parser;
use std::process;
use next_scaffold::cli::{Cli, CliDispatcher};
use next_scaffold::utils::error::UserError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let result = CliDispatcher::execute(cli).await;

    if let Err(err) = result {
        let user_error = UserError::from_scaffold_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
