mod report;
mod search;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "carscan-cli")]
#[command(about = "Search used-car listings and rank them into a spreadsheet")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape every configured make/model and write the ranked report
    Search {
        /// Search file to use instead of `CARSCAN_SEARCH_PATH`
        #[arg(long)]
        search: Option<PathBuf>,
        /// Report path to write instead of `CARSCAN_OUTPUT_PATH`
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print the search URLs that would be requested and exit
        #[arg(long)]
        dry_run: bool,
        /// Open the report in the system viewer once written
        #[arg(long)]
        open: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search {
            search,
            output,
            dry_run,
            open,
        }) => {
            let config = carscan_core::load_app_config()?;
            init_tracing(&config.log_level)?;

            let options = search::SearchOptions {
                search_path: search.unwrap_or_else(|| config.search_path.clone()),
                output_path: output.unwrap_or_else(|| config.output_path.clone()),
                dry_run,
                open_output: open,
            };
            search::run_search(&config, &options).await?;
        }
        None => Cli::command().print_help()?,
    }

    Ok(())
}

/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
