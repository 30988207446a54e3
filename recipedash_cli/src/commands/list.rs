use anyhow::Result;
use clap::Args;
use recipedash_lib::pagination::total_pages;
use recipedash_lib::render::recipe_rows;
use recipedash_lib::{validation, Client, DashboardConfig, ListQuery, Paginated};

use crate::commands::spinner;
use crate::output::{print_json, print_recipes, OutputFormat};

#[derive(Args)]
pub struct ListArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page (defaults to RECIPEDASH_PAGE_SIZE)
    #[arg(long)]
    pub limit: Option<i64>,
}

pub async fn run(
    args: &ListArgs,
    client: &Client,
    config: &DashboardConfig,
    format: &OutputFormat,
) -> Result<()> {
    let page = validation::validate_page(args.page)?;
    let limit = validation::validate_limit(args.limit.unwrap_or(config.page_size))?;
    let query = ListQuery::default().with_page(page).with_limit(limit);

    let pb = spinner("loading recipes...");
    let resp = client.list_recipes(&query).await;
    pb.finish_and_clear();
    let resp = resp?;

    eprintln!(
        "Page {}/{} ({} total recipes)",
        page,
        total_pages(resp.total, limit),
        resp.total
    );

    match format {
        OutputFormat::Json => print_json(&resp.data),
        _ => print_recipes(&recipe_rows(&resp.data), format)?,
    }

    Ok(())
}
