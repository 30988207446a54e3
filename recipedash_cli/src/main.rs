mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use recipedash_lib::DashboardConfig;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "recipedash")]
#[command(about = "Browse and search recipes from a recipes API server")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Server base URL (overrides RECIPEDASH_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides RECIPEDASH_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of recipes
    List(commands::list::ListArgs),
    /// Search recipes by title, cuisine, rating, calories or total time
    Search(commands::search::SearchArgs),
    /// Show one recipe in full
    Show(commands::show::ShowArgs),
    /// Interactive dashboard session
    Browse(commands::browse::BrowseArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("recipedash=info".parse().unwrap())
                .add_directive("recipes_api=info".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let mut config = DashboardConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout_secs(secs);
    }
    config.validate()?;
    tracing::debug!("Using recipes API at {}", config.base_url);

    let client = config.client();

    match &cli.command {
        Commands::List(args) => commands::list::run(args, &client, &config, &format).await?,
        Commands::Search(args) => commands::search::run(args, &client, &config, &format).await?,
        Commands::Show(args) => commands::show::run(args, &client, &format).await?,
        Commands::Browse(args) => commands::browse::run(args, &client, &config).await?,
    }

    Ok(())
}
