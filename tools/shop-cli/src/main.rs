//! Shop CLI - a terminal storefront over the commerce API.
//!
//! Commands:
//! - `shop products` - List the catalog
//! - `shop browse` - Interactive shopping session
//! - `shop checkout` - Build a cart from price ids and start a checkout
//! - `shop resume` - Open the store at a return address from the hosted checkout
//! - `shop config` - Manage configuration

mod browser;
mod commands;
mod context;
mod output;
mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shop_observability::{init_logging, LogFormat, LogLevel};

use commands::{BrowseArgs, CheckoutArgs, ConfigArgs, ProductsArgs, ResumeArgs};

/// Shop CLI - browse products and check out from the terminal
#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available products
    Products(ProductsArgs),

    /// Shop interactively
    Browse(BrowseArgs),

    /// Check out a list of price ids
    Checkout(CheckoutArgs),

    /// Handle the return from the hosted checkout
    Resume(ResumeArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = if cli.json { LogFormat::Json } else { LogFormat::Human };
    init_logging(format, log_level(cli.verbose))?;

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Resume(args) => commands::resume::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Progress events stay quiet unless `--verbose`, so they don't interleave
/// with spinners and prompts.
fn log_level(verbose: bool) -> LogLevel {
    if verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_is_quiet_by_default() {
        assert_eq!(log_level(false), LogLevel::Warn);
        assert_eq!(log_level(true), LogLevel::Debug);
    }
}
