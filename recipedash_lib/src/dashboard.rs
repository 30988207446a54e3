//! The recipe dashboard controller.
//!
//! [`RecipeDashboard`] turns user intents (page forward, search, open a row)
//! into state changes and fetches. Fetch failures never escape: they become
//! notices on the state, and the dashboard stays usable.

use recipes_api::{ListQuery, Paginated, SearchFilter};

use crate::source::RecipeSource;
use crate::state::{Channel, DashboardState, Mode};

pub struct RecipeDashboard<S> {
    source: S,
    state: DashboardState,
}

impl<S: RecipeSource> RecipeDashboard<S> {
    /// Creates a dashboard in listing mode on page 1. Nothing is fetched until [`start`](Self::start).
    pub fn new(source: S, limit: i64) -> Self {
        Self {
            source,
            state: DashboardState::new(limit),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Initial load of the first listing page.
    pub async fn start(&mut self) {
        self.load_recipes().await;
    }

    /// Fetches the current listing page and replaces the table.
    pub async fn load_recipes(&mut self) {
        self.state.show_loading(true);
        self.state.hide_no_data();
        let ticket = self.state.begin_request(Channel::Results);
        let query = ListQuery::default()
            .with_page(self.state.pagination.current_page)
            .with_limit(self.state.pagination.limit);
        let outcome = self.source.list_recipes(&query).await;
        self.state.apply_listing(ticket, outcome);
    }

    /// Builds the filter set from the inputs and searches from page 1.
    /// With every input blank this is [`clear_filters`](Self::clear_filters).
    pub async fn search_recipes(&mut self) {
        if self.state.enter_search() {
            self.perform_search().await;
        } else {
            self.clear_filters().await;
        }
    }

    /// Re-runs the search with the active filter set.
    pub async fn perform_search(&mut self) {
        self.state.show_loading(true);
        self.state.hide_no_data();
        let ticket = self.state.begin_request(Channel::Results);
        let outcome = self.source.search_recipes(&self.state.filters).await;
        self.state.apply_search(ticket, outcome);
    }

    /// Empties every filter input and reloads the unfiltered first page.
    pub async fn clear_filters(&mut self) {
        self.state.reset_filters();
        self.load_recipes().await;
    }

    /// Changes the page size, returns to page 1 and reloads whichever list is active.
    pub async fn change_limit(&mut self, limit: i64) {
        if limit < 1 {
            tracing::warn!("Ignoring page size {}", limit);
            return;
        }
        self.state.pagination.set_limit(limit);
        self.reload().await;
    }

    /// Re-fetches the active list for the current page.
    pub async fn reload(&mut self) {
        match self.state.mode {
            Mode::Listing => self.load_recipes().await,
            Mode::Search => self.perform_search().await,
        }
    }

    /// Sets the raw text of one filter input. Nothing is fetched until a search runs.
    pub fn set_filter_input(&mut self, filter: SearchFilter, value: &str) {
        self.state.inputs.set(filter, value);
    }

    pub async fn previous_page(&mut self) {
        if self.state.pagination.previous() {
            self.reload().await;
        }
    }

    pub async fn next_page(&mut self) {
        if self.state.pagination.next() {
            self.reload().await;
        }
    }

    /// Fetches one recipe and opens it in the drawer.
    pub async fn show_recipe_details(&mut self, recipe_id: &str) {
        let ticket = self.state.begin_request(Channel::Detail);
        let outcome = self.source.get_recipe(recipe_id).await;
        self.state.apply_detail(ticket, outcome);
    }

    /// Activates table row `index` (0-based). Returns `false` if there is no
    /// such row or it has no identifier.
    pub async fn open_row(&mut self, index: usize) -> bool {
        let Some(recipe_id) = self.state.row_id(index).map(str::to_string) else {
            return false;
        };
        self.show_recipe_details(&recipe_id).await;
        true
    }

    pub fn open_drawer(&mut self) {
        self.state.open_drawer();
    }

    pub fn close_drawer(&mut self) {
        self.state.close_drawer();
    }

    pub fn toggle_time_details(&mut self) {
        self.state.toggle_time_details();
    }

    pub fn dismiss_notice(&mut self) {
        self.state.dismiss_notice();
    }
}
