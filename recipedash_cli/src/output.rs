use anyhow::Result;
use recipedash_lib::render::{NutritionTable, RecipeRow};
use recipedash_lib::state::Drawer;
use recipedash_lib::{DashboardState, DrawerView, Notice};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct RecipeTableRow {
    #[tabled(rename = "#")]
    #[serde(rename = "#")]
    row: usize,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Cuisine")]
    #[serde(rename = "Cuisine")]
    cuisine: String,
    #[tabled(rename = "Rating")]
    #[serde(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Total Time")]
    #[serde(rename = "Total Time")]
    total_time: String,
    #[tabled(rename = "Serves")]
    #[serde(rename = "Serves")]
    serves: String,
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
}

#[derive(Tabled)]
struct NutrientTableRow {
    #[tabled(rename = "Nutrient")]
    nutrient: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

// -- Row builders --

fn build_recipe_rows(rows: &[RecipeRow]) -> Vec<RecipeTableRow> {
    rows.iter()
        .enumerate()
        .map(|(i, r)| RecipeTableRow {
            row: i + 1,
            title: r.title.clone(),
            cuisine: r.cuisine.clone(),
            rating: r.rating.clone(),
            total_time: r.total_time.clone(),
            serves: r.serves.clone(),
            id: r.id.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_nutrient_rows(table: &NutritionTable) -> Vec<NutrientTableRow> {
    match table {
        NutritionTable::Rows(rows) => rows
            .iter()
            .map(|r| NutrientTableRow {
                nutrient: r.label,
                amount: r.value.clone(),
            })
            .collect(),
        NutritionTable::Unavailable => Vec::new(),
    }
}

// -- Recipe list output --

pub fn recipes_table(rows: &[RecipeRow]) -> String {
    Table::new(build_recipe_rows(rows)).to_string()
}

pub fn print_recipes_table(rows: &[RecipeRow]) {
    println!("{}", recipes_table(rows));
}

pub fn print_recipes_markdown(rows: &[RecipeRow]) {
    let mut table = Table::new(build_recipe_rows(rows));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_recipes_csv(rows: &[RecipeRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_recipe_rows(rows) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints rendered rows in any format. JSON callers usually want the raw
/// recipes instead and go through [`print_json`].
pub fn print_recipes(rows: &[RecipeRow], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_recipes_table(rows),
        OutputFormat::Markdown => print_recipes_markdown(rows),
        OutputFormat::Csv => print_recipes_csv(rows)?,
        OutputFormat::Json => print_json(&build_recipe_rows(rows)),
    }
    Ok(())
}

// -- Drawer output --

/// The detail drawer as plain text. The prep and cook times are listed under
/// the total only while the time details are expanded.
pub fn format_drawer(view: &DrawerView, time_details_expanded: bool, chevron: char) -> String {
    let mut out = Vec::new();
    out.push(view.title.clone());
    out.push(format!("Cuisine: {}", view.cuisine));
    if let Some(origin) = &view.origin {
        out.push(format!("Origin: {}", origin));
    }
    out.push(String::new());
    out.push(view.description.clone());
    out.push(String::new());
    out.push(format!("Total Time: {} {}", view.total_time, chevron));
    if time_details_expanded {
        out.push(format!("  Prep Time: {}", view.prep_time));
        out.push(format!("  Cook Time: {}", view.cook_time));
    }
    out.push(String::new());
    out.push("Nutrition".to_string());
    match &view.nutrition {
        NutritionTable::Unavailable => out.extend(view.nutrition.lines()),
        table => out.push(Table::new(build_nutrient_rows(table)).to_string()),
    }
    out.push(String::new());
    out.push("Ingredients".to_string());
    out.extend(view.ingredients.lines());
    out.push(String::new());
    out.push("Instructions".to_string());
    out.extend(view.instructions.lines());
    if let Some(url) = &view.source_url {
        out.push(String::new());
        out.push(format!("Source: {}", url));
    }
    out.join("\n")
}

pub fn print_drawer(view: &DrawerView, time_details_expanded: bool, chevron: char) {
    println!("{}", format_drawer(view, time_details_expanded, chevron));
}

// -- Dashboard screen --

fn format_nav(state: &DashboardState) -> String {
    let nav = state.nav_controls();
    let previous = if nav.previous_enabled { "[p] prev" } else { "    ----" };
    let next = if nav.next_enabled { "[n] next" } else { "---- " };
    format!("{}  {}  {}", previous, state.page_label(), next)
}

fn format_open_drawer(drawer: &Drawer) -> Option<String> {
    if !drawer.open {
        return None;
    }
    let view = drawer.view.as_ref()?;
    Some(format_drawer(view, drawer.time_details_expanded, drawer.chevron()))
}

/// Everything the interactive session shows after a command: the table (or the
/// no-data message), navigation, the active notice and the open drawer.
pub fn format_screen(state: &DashboardState) -> String {
    let mut out = Vec::new();
    if state.indicators.no_data || state.rows.is_empty() {
        out.push("No recipes found.".to_string());
    } else {
        out.push(recipes_table(&state.rows));
    }
    out.push(format_nav(state));
    if !state.filters.is_empty() {
        let filters: Vec<String> = state
            .filters
            .iter()
            .map(|(filter, value)| format!("{}={}", filter, value))
            .collect();
        out.push(format!("Filters: {}", filters.join(" ")));
    }
    match &state.notice {
        Some(Notice::Error(msg)) => out.push(format!("Error: {}", msg)),
        Some(Notice::Alert(msg)) => out.push(format!("Alert: {} (press enter to dismiss)", msg)),
        None => {}
    }
    if let Some(drawer) = format_open_drawer(&state.drawer) {
        out.push(String::new());
        out.push(drawer);
    }
    out.join("\n")
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
