// CLI module for command-line interface

pub mod create;

use clap::Parser;
use crate::utils::error::Result;

use self::create::CreateCommand;

/// Main CLI structure
#[derive(Debug, Parser)]
#[command(name = "next-scaffold")]
#[command(about = "Scaffold a Next.js project with auth routes, middleware and an API client")]
#[command(long_about = r#"next-scaffold creates a Next.js app and layers a ready-to-use structure on top.

Steps:
  • npx create-next-app@latest <name> --ts --eslint
  • Install react-query, axios, zod, zustand, react-hook-form, jsonwebtoken
  • Install dev tooling (orval, react-query eslint plugin)
  • npx shadcn@latest init
  • Write (private)/(public) route groups, middleware.ts, cookie helpers,
    an axios client, .env and orval.config.ts

Settings are read from next-scaffold.toml in the current directory, if present:
  package_manager = "yarn"     yarn, npm or pnpm
  log_level = "warn"           tracing filter for diagnostics on stderr
  next_version = "latest"      create-next-app version
  shadcn_version = "latest"    shadcn version

Examples:
  next-scaffold                 Create ./my-next-app
  next-scaffold storefront      Create ./storefront"#)]
#[command(version)]
pub struct Cli {
    /// Project name, also used as the directory name (default: my-next-app)
    pub project_name: Option<String>,
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute the parsed command line
    pub async fn execute(cli: Cli) -> Result<()> {
        let cmd = CreateCommand {
            project_name: cli.project_name,
        };
        cmd.run().await.map(|_| ())
    }
}
