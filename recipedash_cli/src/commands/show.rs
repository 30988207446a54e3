use anyhow::Result;
use clap::Args;
use recipedash_lib::render::drawer_view;
use recipedash_lib::{validation, Client};

use crate::commands::spinner;
use crate::output::{print_drawer, print_json, OutputFormat};

#[derive(Args)]
pub struct ShowArgs {
    /// Recipe ID (the `$oid` shown in the ID column)
    pub id: String,

    /// Show the prep and cook time breakdown
    #[arg(long)]
    pub times: bool,
}

pub async fn run(args: &ShowArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let id = validation::validate_recipe_id(&args.id)?;

    let pb = spinner("loading recipe...");
    let recipe = client.get_recipe(&id).await;
    pb.finish_and_clear();
    let recipe = recipe?;

    match format {
        OutputFormat::Json => print_json(&recipe),
        _ => {
            let chevron = if args.times { '▲' } else { '▼' };
            print_drawer(&drawer_view(&recipe), args.times, chevron);
        }
    }

    Ok(())
}
