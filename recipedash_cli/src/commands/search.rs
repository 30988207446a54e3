use anyhow::Result;
use clap::Args;
use recipedash_lib::pagination::total_pages;
use recipedash_lib::render::recipe_rows;
use recipedash_lib::{validation, Client, DashboardConfig, SearchFilter, SearchQuery};

use crate::commands::list::{self, ListArgs};
use crate::commands::spinner;
use crate::output::{print_json, print_recipes, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Title contains (case-insensitive)
    #[arg(long)]
    pub title: Option<String>,

    /// Cuisine, exact match (e.g. "Southern Recipes")
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Rating, optionally prefixed with <, <=, > or >= (e.g. ">=4.5")
    #[arg(long, allow_hyphen_values = true)]
    pub rating: Option<String>,

    /// Calories, optionally prefixed with a comparison (e.g. "<=400")
    #[arg(long, allow_hyphen_values = true)]
    pub calories: Option<String>,

    /// Total time in minutes, optionally prefixed with a comparison (e.g. "<30")
    #[arg(long, allow_hyphen_values = true)]
    pub total_time: Option<String>,
}

impl SearchArgs {
    fn values(&self) -> [(SearchFilter, Option<&String>); 5] {
        [
            (SearchFilter::Title, self.title.as_ref()),
            (SearchFilter::Cuisine, self.cuisine.as_ref()),
            (SearchFilter::Rating, self.rating.as_ref()),
            (SearchFilter::Calories, self.calories.as_ref()),
            (SearchFilter::TotalTime, self.total_time.as_ref()),
        ]
    }
}

/// Validates every supplied filter. Blank values are dropped.
pub fn build_query(args: &SearchArgs) -> Result<SearchQuery> {
    let mut query = SearchQuery::default();
    for (filter, value) in args.values() {
        let Some(value) = value else { continue };
        if value.trim().is_empty() {
            continue;
        }
        let validated = validation::validate_filter_value(filter, value)?;
        query = query.with_filter(filter, &validated);
    }
    Ok(query)
}

pub async fn run(
    args: &SearchArgs,
    client: &Client,
    config: &DashboardConfig,
    format: &OutputFormat,
) -> Result<()> {
    let query = build_query(args)?;
    if query.is_empty() {
        let args = ListArgs {
            page: 1,
            limit: None,
        };
        return list::run(&args, client, config, format).await;
    }

    let pb = spinner("searching recipes...");
    let resp = client.search_recipes(&query).await;
    pb.finish_and_clear();
    let resp = resp?;

    let count = resp.data.len();
    eprintln!(
        "Page 1/{} ({} matching recipes)",
        total_pages(count as i64, config.page_size).max(1),
        count
    );

    match format {
        OutputFormat::Json => print_json(&resp.data),
        _ => print_recipes(&recipe_rows(&resp.data), format)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SearchArgs {
        SearchArgs {
            title: None,
            cuisine: None,
            rating: None,
            calories: None,
            total_time: None,
        }
    }

    fn help_for(id: &str) -> String {
        let cmd = SearchArgs::augment_args(clap::Command::new("search"));
        let arg = cmd.get_arguments().find(|a| a.get_id() == id).unwrap();
        arg.get_help().unwrap().to_string()
    }

    #[test]
    fn test_help_matches_server_matching() {
        assert!(help_for("cuisine").contains("exact match"));
        assert!(help_for("title").contains("case-insensitive"));
    }

    #[test]
    fn test_build_query_empty() {
        assert!(build_query(&args()).unwrap().is_empty());
    }

    #[test]
    fn test_build_query_trims_and_skips_blank() {
        let mut a = args();
        a.title = Some("  pie ".to_string());
        a.cuisine = Some("   ".to_string());
        a.rating = Some(">=4.5".to_string());
        let query = build_query(&a).unwrap();
        assert_eq!(query.len(), 2);
        assert_eq!(query.get(SearchFilter::Title), Some("pie"));
        assert_eq!(query.get(SearchFilter::Rating), Some(">=4.5"));
        assert_eq!(query.get(SearchFilter::Cuisine), None);
    }

    #[test]
    fn test_build_query_rejects_non_numeric() {
        let mut a = args();
        a.calories = Some("lots".to_string());
        assert!(build_query(&a).is_err());
    }

    #[test]
    fn test_build_query_total_time_whole_minutes() {
        let mut a = args();
        a.total_time = Some("<30".to_string());
        assert!(build_query(&a).is_ok());
        a.total_time = Some("<30.5".to_string());
        assert!(build_query(&a).is_err());
    }
}
