use std::io::Write;
use std::str::FromStr;

use anyhow::Result;
use clap::Args;
use recipedash_lib::{validation, Client, DashboardConfig, RecipeDashboard, SearchFilter};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::spinner;
use crate::output::format_screen;

const HELP: &str = "\
Commands:
  next, n                   next page
  prev, p                   previous page
  open <row>, <row>         open the recipe in table row <row>
  id <recipe-id>            open a recipe by ID
  close                     close the recipe drawer
  time                      expand or collapse the time breakdown
  filter <name> <value...>  set a filter input (empty value clears it)
  search [name=value ...]   search with the filter inputs (values may have spaces)
  clear                     clear all filters and show the full list
  limit <n>                 change the page size
  refresh                   reload the current page
  help                      show this help
  quit, q                   leave
Filter names: title, cuisine, rating, calories, total_time";

#[derive(Args)]
pub struct BrowseArgs {
    /// Results per page (defaults to RECIPEDASH_PAGE_SIZE)
    #[arg(long)]
    pub limit: Option<i64>,
}

/// One line of input in the interactive session.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseCommand {
    /// Empty line; acknowledges the current notice.
    Dismiss,
    Next,
    Previous,
    /// 1-based table row.
    Open(usize),
    OpenId(String),
    Close,
    ToggleTime,
    Filter(SearchFilter, String),
    Search(Vec<(SearchFilter, String)>),
    Clear,
    Limit(i64),
    Refresh,
    Help,
    Quit,
}

fn parse_filter_name(name: &str) -> Result<SearchFilter, String> {
    name.parse::<SearchFilter>()
        .map_err(|_| format!("Unknown filter '{}'", name))
}

/// `name=value` pairs. A word without `=` continues the previous value, so
/// `title=apple pie` is one filter.
fn parse_search_pairs(words: &[&str]) -> Result<Vec<(SearchFilter, String)>, String> {
    let mut pairs: Vec<(SearchFilter, String)> = Vec::new();
    for word in words {
        if let Some((name, value)) = word.split_once('=') {
            pairs.push((parse_filter_name(name)?, value.to_string()));
            continue;
        }
        let Some((_, value)) = pairs.last_mut() else {
            return Err(format!("Expected name=value, got '{}'", word));
        };
        value.push(' ');
        value.push_str(word);
    }
    Ok(pairs)
}

impl FromStr for BrowseCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(BrowseCommand::Dismiss);
        };
        let rest: Vec<&str> = words.collect();

        if let Ok(row) = head.parse::<usize>() {
            return Ok(BrowseCommand::Open(row));
        }

        match head.to_lowercase().as_str() {
            "next" | "n" => Ok(BrowseCommand::Next),
            "prev" | "previous" | "p" => Ok(BrowseCommand::Previous),
            "open" | "o" => match rest.as_slice() {
                [row] => row
                    .parse::<usize>()
                    .map(BrowseCommand::Open)
                    .map_err(|_| format!("Invalid row '{}'", row)),
                _ => Err("Usage: open <row>".to_string()),
            },
            "id" => match rest.as_slice() {
                [id] => Ok(BrowseCommand::OpenId(id.to_string())),
                _ => Err("Usage: id <recipe-id>".to_string()),
            },
            "close" => Ok(BrowseCommand::Close),
            "time" | "t" => Ok(BrowseCommand::ToggleTime),
            "filter" | "f" => match rest.split_first() {
                Some((name, value)) => Ok(BrowseCommand::Filter(
                    parse_filter_name(name)?,
                    value.join(" "),
                )),
                None => Err("Usage: filter <name> <value...>".to_string()),
            },
            "search" | "s" => parse_search_pairs(&rest).map(BrowseCommand::Search),
            "clear" => Ok(BrowseCommand::Clear),
            "limit" => match rest.as_slice() {
                [n] => n
                    .parse::<i64>()
                    .map(BrowseCommand::Limit)
                    .map_err(|_| format!("Invalid limit '{}'", n)),
                _ => Err("Usage: limit <n>".to_string()),
            },
            "refresh" | "r" => Ok(BrowseCommand::Refresh),
            "help" | "h" | "?" => Ok(BrowseCommand::Help),
            "quit" | "q" | "exit" => Ok(BrowseCommand::Quit),
            other => Err(format!("Unknown command '{}' (try 'help')", other)),
        }
    }
}

fn check_filter(filter: SearchFilter, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Ok(());
    }
    validation::validate_filter_value(filter, value)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Runs one command. Returns `Err` with a message for input the dashboard
/// should not see.
async fn execute(
    dashboard: &mut RecipeDashboard<&Client>,
    command: BrowseCommand,
) -> Result<(), String> {
    match command {
        BrowseCommand::Dismiss | BrowseCommand::Help | BrowseCommand::Quit => {}
        BrowseCommand::Next => {
            let pb = spinner("loading recipes...");
            dashboard.next_page().await;
            pb.finish_and_clear();
        }
        BrowseCommand::Previous => {
            let pb = spinner("loading recipes...");
            dashboard.previous_page().await;
            pb.finish_and_clear();
        }
        BrowseCommand::Open(row) => {
            let pb = spinner("loading recipe...");
            let opened = row > 0 && dashboard.open_row(row - 1).await;
            pb.finish_and_clear();
            if !opened {
                return Err(format!("No recipe in row {}", row));
            }
        }
        BrowseCommand::OpenId(id) => {
            let id = validation::validate_recipe_id(&id).map_err(|e| e.to_string())?;
            let pb = spinner("loading recipe...");
            dashboard.show_recipe_details(&id).await;
            pb.finish_and_clear();
        }
        BrowseCommand::Close => dashboard.close_drawer(),
        BrowseCommand::ToggleTime => dashboard.toggle_time_details(),
        BrowseCommand::Filter(filter, value) => {
            check_filter(filter, &value)?;
            dashboard.set_filter_input(filter, &value);
        }
        BrowseCommand::Search(pairs) => {
            for (filter, value) in &pairs {
                check_filter(*filter, value)?;
            }
            for (filter, value) in &pairs {
                dashboard.set_filter_input(*filter, value);
            }
            let pb = spinner("searching recipes...");
            dashboard.search_recipes().await;
            pb.finish_and_clear();
        }
        BrowseCommand::Clear => {
            let pb = spinner("loading recipes...");
            dashboard.clear_filters().await;
            pb.finish_and_clear();
        }
        BrowseCommand::Limit(limit) => {
            let limit = validation::validate_limit(limit).map_err(|e| e.to_string())?;
            let pb = spinner("loading recipes...");
            dashboard.change_limit(limit).await;
            pb.finish_and_clear();
        }
        BrowseCommand::Refresh => {
            let pb = spinner("loading recipes...");
            dashboard.reload().await;
            pb.finish_and_clear();
        }
    }
    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

pub async fn run(args: &BrowseArgs, client: &Client, config: &DashboardConfig) -> Result<()> {
    let limit = validation::validate_limit(args.limit.unwrap_or(config.page_size))?;
    let mut dashboard = RecipeDashboard::new(client, limit);

    let pb = spinner("loading recipes...");
    dashboard.start().await;
    pb.finish_and_clear();
    println!("{}", format_screen(dashboard.state()));
    eprintln!("Type 'help' for commands.");
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<BrowseCommand>() {
            Ok(command) => command,
            Err(msg) => {
                eprintln!("{}", msg);
                prompt()?;
                continue;
            }
        };
        if command == BrowseCommand::Quit {
            break;
        }
        if command == BrowseCommand::Help {
            println!("{}", HELP);
            prompt()?;
            continue;
        }

        dashboard.dismiss_notice();
        match execute(&mut dashboard, command).await {
            Ok(()) => println!("{}", format_screen(dashboard.state())),
            Err(msg) => eprintln!("{}", msg),
        }
        prompt()?;
    }

    Ok(())
}
