//! Dashboard state and its transitions.
//!
//! [`DashboardState`] holds everything the dashboard shows: pagination, the
//! active filter set, table rows, indicators, the current notice and the detail
//! drawer. All transitions are synchronous and side-effect free so they can be
//! exercised without a network or a terminal. The controller in
//! [`crate::dashboard`] performs the fetches and feeds results back through the
//! `apply_*` methods.
//!
//! # Request sequencing
//!
//! Every fetch takes a [`RequestTicket`] before it starts. Results and detail
//! fetches have separate sequences, so opening a recipe does not invalidate a
//! listing in flight. A response is applied only if its ticket is still the
//! newest of its channel; anything older is dropped.
//!
//! [`RecipeDashboard`](crate::RecipeDashboard) awaits each fetch while holding
//! `&mut self`, so its own requests never overlap and its tickets are always
//! current. The tickets matter to callers that run fetches concurrently and
//! split [`DashboardState::begin_request`] from the `apply_*` call.

use recipes_api::types::{ListResponse, Recipe, SearchResponse};
use recipes_api::{Error, SearchFilter, SearchQuery};

use crate::pagination::{NavControls, Pagination};
use crate::render::{self, DrawerView, RecipeRow};

pub const LOAD_FAILED: &str = "Failed to load recipes";
pub const SEARCH_FAILED: &str = "Failed to search recipes";
pub const DETAILS_FAILED: &str = "Failed to load recipe details";

/// Which list the table reflects. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// The unfiltered listing, paginated by the server.
    #[default]
    Listing,
    /// Results of the active filter set.
    Search,
}

/// A user-visible failure message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Non-blocking: shown next to the table.
    Error(String),
    /// Blocking: must be acknowledged.
    Alert(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Error(msg) | Notice::Alert(msg) => msg,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Indicators {
    pub loading: bool,
    pub no_data: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Drawer {
    pub open: bool,
    pub view: Option<DrawerView>,
    /// Whether the prep/cook breakdown under the total time is expanded.
    pub time_details_expanded: bool,
}

impl Drawer {
    /// Chevron shown on the time-details toggle.
    pub fn chevron(&self) -> char {
        if self.time_details_expanded {
            '▲'
        } else {
            '▼'
        }
    }
}

/// The raw text of the five filter inputs, before trimming.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterInputs {
    pub title: String,
    pub cuisine: String,
    pub rating: String,
    pub calories: String,
    pub total_time: String,
}

impl FilterInputs {
    pub fn get(&self, filter: SearchFilter) -> &str {
        match filter {
            SearchFilter::Title => &self.title,
            SearchFilter::Cuisine => &self.cuisine,
            SearchFilter::Rating => &self.rating,
            SearchFilter::Calories => &self.calories,
            SearchFilter::TotalTime => &self.total_time,
        }
    }

    pub fn set(&mut self, filter: SearchFilter, value: &str) {
        let slot = match filter {
            SearchFilter::Title => &mut self.title,
            SearchFilter::Cuisine => &mut self.cuisine,
            SearchFilter::Rating => &mut self.rating,
            SearchFilter::Calories => &mut self.calories,
            SearchFilter::TotalTime => &mut self.total_time,
        };
        *slot = value.to_string();
    }

    /// Trimmed, non-empty inputs as a filter set.
    pub fn to_query(&self) -> SearchQuery {
        SearchFilter::ALL
            .iter()
            .fold(SearchQuery::default(), |query, filter| {
                query.with_filter(*filter, self.get(*filter))
            })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Listing and search fetches; they write the same table.
    Results,
    /// Single-recipe fetches for the drawer.
    Detail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    channel: Channel,
    seq: u64,
}

impl RequestTicket {
    pub fn channel(&self) -> Channel {
        self.channel
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Sequencer {
    results: u64,
    detail: u64,
}

impl Sequencer {
    fn slot(&mut self, channel: Channel) -> &mut u64 {
        match channel {
            Channel::Results => &mut self.results,
            Channel::Detail => &mut self.detail,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub pagination: Pagination,
    pub mode: Mode,
    /// Filter set of the last search; empty in listing mode.
    pub filters: SearchQuery,
    pub inputs: FilterInputs,
    pub rows: Vec<RecipeRow>,
    pub indicators: Indicators,
    pub notice: Option<Notice>,
    pub drawer: Drawer,
    sequencer: Sequencer,
}

impl DashboardState {
    pub fn new(limit: i64) -> Self {
        Self {
            pagination: Pagination::new(limit),
            mode: Mode::Listing,
            filters: SearchQuery::default(),
            inputs: FilterInputs::default(),
            rows: Vec::new(),
            indicators: Indicators::default(),
            notice: None,
            drawer: Drawer::default(),
            sequencer: Sequencer::default(),
        }
    }

    /// Issues a ticket that supersedes every earlier ticket on `channel`.
    pub fn begin_request(&mut self, channel: Channel) -> RequestTicket {
        let slot = self.sequencer.slot(channel);
        *slot += 1;
        RequestTicket {
            channel,
            seq: *slot,
        }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        let latest = match ticket.channel {
            Channel::Results => self.sequencer.results,
            Channel::Detail => self.sequencer.detail,
        };
        ticket.seq == latest
    }

    // -- indicators --

    pub fn show_loading(&mut self, show: bool) {
        self.indicators.loading = show;
    }

    pub fn show_no_data(&mut self) {
        self.indicators.no_data = true;
    }

    pub fn hide_no_data(&mut self) {
        self.indicators.no_data = false;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // -- modes and filters --

    /// Switches to listing mode on page 1 and forgets all filters and inputs.
    pub fn reset_filters(&mut self) {
        self.inputs.clear();
        self.filters.clear();
        self.mode = Mode::Listing;
        self.pagination.reset();
    }

    /// Switches to search mode on page 1 with the trimmed filter inputs.
    /// Returns `false` when every input is blank.
    pub fn enter_search(&mut self) -> bool {
        self.pagination.reset();
        self.mode = Mode::Search;
        self.filters = self.inputs.to_query();
        !self.filters.is_empty()
    }

    // -- table --

    /// Replaces the table with `recipes`. An empty list shows the no-data indicator.
    pub fn display_recipes(&mut self, recipes: &[Recipe]) {
        if recipes.is_empty() {
            self.show_no_data();
            self.rows.clear();
            return;
        }
        self.rows = render::recipe_rows(recipes);
    }

    pub fn update_pagination(&mut self, total: i64) {
        self.pagination.update_from_total(total);
    }

    pub fn update_search_pagination(&mut self, count: usize) {
        self.pagination.update_from_result_count(count);
    }

    pub fn nav_controls(&self) -> NavControls {
        self.pagination.nav_controls()
    }

    pub fn page_label(&self) -> String {
        let page = format!(
            "Page {} of {}",
            self.pagination.current_page, self.pagination.total_pages
        );
        match self.mode {
            Mode::Listing => page,
            Mode::Search => format!("Search Results - {}", page),
        }
    }

    /// Identifier of the recipe in table row `index` (0-based).
    pub fn row_id(&self, index: usize) -> Option<&str> {
        self.rows.get(index)?.id.as_deref()
    }

    // -- responses --

    /// Applies a listing response. Returns `false` if the ticket was stale.
    ///
    /// On failure the previous rows and page count stay in place.
    pub fn apply_listing(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<ListResponse, Error>,
    ) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        match outcome {
            Ok(resp) => {
                self.display_recipes(&resp.data);
                self.update_pagination(resp.total);
            }
            Err(e) => {
                tracing::error!("Error loading recipes: {}", e);
                self.notice = Some(Notice::Error(LOAD_FAILED.to_string()));
            }
        }
        self.show_loading(false);
        true
    }

    /// Applies a search response. Returns `false` if the ticket was stale.
    pub fn apply_search(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<SearchResponse, Error>,
    ) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        match outcome {
            Ok(resp) => {
                self.display_recipes(&resp.data);
                self.update_search_pagination(resp.data.len());
            }
            Err(e) => {
                tracing::error!("Error searching recipes: {}", e);
                self.notice = Some(Notice::Error(SEARCH_FAILED.to_string()));
            }
        }
        self.show_loading(false);
        true
    }

    /// Applies a detail response: fills and opens the drawer, or raises an
    /// alert and leaves the drawer as it was.
    pub fn apply_detail(&mut self, ticket: RequestTicket, outcome: Result<Recipe, Error>) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        match outcome {
            Ok(recipe) => {
                self.populate_drawer(&recipe);
                self.open_drawer();
            }
            Err(e) => {
                tracing::error!("Error loading recipe details: {}", e);
                self.notice = Some(Notice::Alert(DETAILS_FAILED.to_string()));
            }
        }
        true
    }

    fn accept(&self, ticket: RequestTicket) -> bool {
        let current = self.is_current(ticket);
        if !current {
            tracing::debug!(
                "Discarding stale {:?} response #{}",
                ticket.channel,
                ticket.seq
            );
        }
        current
    }

    // -- drawer --

    pub fn populate_drawer(&mut self, recipe: &Recipe) {
        self.drawer.view = Some(render::drawer_view(recipe));
    }

    pub fn open_drawer(&mut self) {
        self.drawer.open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer.open = false;
    }

    pub fn toggle_time_details(&mut self) {
        self.drawer.time_details_expanded = !self.drawer.time_details_expanded;
    }
}

#[cfg(test)]
mod tests {
    use recipes_api::types::RecipeId;

    use super::*;

    fn recipe(id: &str, title: &str) -> Recipe {
        Recipe {
            id: Some(RecipeId::Plain(id.to_string())),
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    fn listing(titles: &[&str], total: i64) -> ListResponse {
        ListResponse {
            page: None,
            limit: None,
            total,
            data: titles
                .iter()
                .enumerate()
                .map(|(i, t)| recipe(&i.to_string(), t))
                .collect(),
        }
    }

    #[test]
    fn new_state_is_listing_page_one() {
        let state = DashboardState::new(15);
        assert_eq!(state.mode, Mode::Listing);
        assert_eq!(state.pagination.current_page, 1);
        assert_eq!(state.pagination.limit, 15);
        assert!(state.rows.is_empty());
        assert!(!state.drawer.open);
    }

    #[test]
    fn tickets_supersede_per_channel() {
        let mut state = DashboardState::new(15);
        let first = state.begin_request(Channel::Results);
        let detail = state.begin_request(Channel::Detail);
        let second = state.begin_request(Channel::Results);
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
        assert!(state.is_current(detail));
        assert_eq!(detail.channel(), Channel::Detail);
    }

    #[test]
    fn stale_listing_is_discarded() {
        let mut state = DashboardState::new(15);
        let slow = state.begin_request(Channel::Results);
        let fast = state.begin_request(Channel::Results);

        assert!(state.apply_listing(fast, Ok(listing(&["Newer"], 1))));
        assert!(!state.apply_listing(slow, Ok(listing(&["Older", "Older 2"], 2))));

        assert_eq!(state.rows.len(), 1);
        assert_eq!(state.rows[0].title, "Newer");
        assert_eq!(state.pagination.total_pages, 1);
    }

    #[test]
    fn stale_response_keeps_loading_indicator() {
        let mut state = DashboardState::new(15);
        let slow = state.begin_request(Channel::Results);
        state.show_loading(true);
        let _fast = state.begin_request(Channel::Results);
        assert!(!state.apply_listing(slow, Ok(listing(&["Old"], 1))));
        assert!(state.indicators.loading);
    }

    #[test]
    fn listing_success_replaces_rows() {
        let mut state = DashboardState::new(15);
        state.show_loading(true);
        let ticket = state.begin_request(Channel::Results);
        state.apply_listing(ticket, Ok(listing(&["A", "B"], 45)));
        assert_eq!(state.rows.len(), 2);
        assert_eq!(state.pagination.total_pages, 3);
        assert!(!state.indicators.loading);
        assert!(state.notice.is_none());
    }

    #[test]
    fn listing_failure_preserves_table() {
        let mut state = DashboardState::new(15);
        let ticket = state.begin_request(Channel::Results);
        state.apply_listing(ticket, Ok(listing(&["A", "B"], 45)));

        state.show_loading(true);
        let ticket = state.begin_request(Channel::Results);
        state.apply_listing(ticket, Err(Error::RequestFailed));

        assert_eq!(state.rows.len(), 2);
        assert_eq!(state.pagination.total_pages, 3);
        assert!(!state.indicators.loading);
        assert_eq!(state.notice, Some(Notice::Error(LOAD_FAILED.to_string())));
    }

    #[test]
    fn empty_listing_shows_no_data() {
        let mut state = DashboardState::new(15);
        let ticket = state.begin_request(Channel::Results);
        state.apply_listing(ticket, Ok(listing(&["A"], 1)));
        let ticket = state.begin_request(Channel::Results);
        state.apply_listing(ticket, Ok(listing(&[], 0)));
        assert!(state.rows.is_empty());
        assert!(state.indicators.no_data);
    }

    #[test]
    fn search_pagination_from_result_count() {
        let mut state = DashboardState::new(2);
        state.inputs.set(SearchFilter::Cuisine, "Italian");
        assert!(state.enter_search());
        let ticket = state.begin_request(Channel::Results);
        let resp = SearchResponse {
            data: vec![recipe("1", "a"), recipe("2", "b"), recipe("3", "c")],
        };
        state.apply_search(ticket, Ok(resp));
        assert_eq!(state.pagination.total_pages, 2);
        assert_eq!(state.page_label(), "Search Results - Page 1 of 2");
    }

    #[test]
    fn search_with_zero_results_disables_navigation() {
        let mut state = DashboardState::new(15);
        state.inputs.set(SearchFilter::Title, "zzz");
        state.enter_search();
        let ticket = state.begin_request(Channel::Results);
        state.apply_search(ticket, Ok(SearchResponse { data: vec![] }));
        assert_eq!(
            state.nav_controls(),
            NavControls {
                previous_enabled: false,
                next_enabled: false
            }
        );
        assert!(state.indicators.no_data);
    }

    #[test]
    fn search_failure_raises_error_notice() {
        let mut state = DashboardState::new(15);
        let ticket = state.begin_request(Channel::Results);
        state.apply_search(
            ticket,
            Err(Error::Api {
                status: 500,
                message: "bad regex".to_string(),
            }),
        );
        assert_eq!(state.notice, Some(Notice::Error(SEARCH_FAILED.to_string())));
    }

    #[test]
    fn enter_search_trims_and_drops_blank_inputs() {
        let mut state = DashboardState::new(15);
        state.pagination.current_page = 3;
        state.inputs.set(SearchFilter::Title, "  soup ");
        state.inputs.set(SearchFilter::Rating, "   ");
        assert!(state.enter_search());
        assert_eq!(state.mode, Mode::Search);
        assert_eq!(state.pagination.current_page, 1);
        assert_eq!(state.filters.len(), 1);
        assert_eq!(state.filters.get(SearchFilter::Title), Some("soup"));
    }

    #[test]
    fn enter_search_with_blank_inputs_reports_empty() {
        let mut state = DashboardState::new(15);
        assert!(!state.enter_search());
    }

    #[test]
    fn reset_filters_returns_to_listing() {
        let mut state = DashboardState::new(15);
        state.inputs.set(SearchFilter::Calories, "<500");
        state.enter_search();
        state.pagination.current_page = 2;
        state.reset_filters();
        assert_eq!(state.mode, Mode::Listing);
        assert_eq!(state.pagination.current_page, 1);
        assert!(state.filters.is_empty());
        assert_eq!(state.inputs, FilterInputs::default());
        assert_eq!(state.page_label(), "Page 1 of 1");
    }

    #[test]
    fn detail_success_opens_drawer() {
        let mut state = DashboardState::new(15);
        let ticket = state.begin_request(Channel::Detail);
        state.apply_detail(ticket, Ok(recipe("42", "Gumbo")));
        assert!(state.drawer.open);
        assert_eq!(state.drawer.view.as_ref().unwrap().title, "Gumbo");
    }

    #[test]
    fn detail_failure_alerts_without_opening() {
        let mut state = DashboardState::new(15);
        let ticket = state.begin_request(Channel::Detail);
        state.apply_detail(
            ticket,
            Err(Error::Api {
                status: 404,
                message: "Recipe not found".to_string(),
            }),
        );
        assert!(!state.drawer.open);
        assert!(state.drawer.view.is_none());
        assert_eq!(state.notice, Some(Notice::Alert(DETAILS_FAILED.to_string())));
    }

    #[test]
    fn detail_responses_are_sequenced() {
        let mut state = DashboardState::new(15);
        let first = state.begin_request(Channel::Detail);
        let second = state.begin_request(Channel::Detail);
        state.apply_detail(second, Ok(recipe("2", "Second")));
        assert!(!state.apply_detail(first, Ok(recipe("1", "First"))));
        assert_eq!(state.drawer.view.as_ref().unwrap().title, "Second");
    }

    #[test]
    fn time_details_toggle_swaps_chevron() {
        let mut state = DashboardState::new(15);
        assert_eq!(state.drawer.chevron(), '▼');
        state.toggle_time_details();
        assert!(state.drawer.time_details_expanded);
        assert_eq!(state.drawer.chevron(), '▲');
        state.toggle_time_details();
        assert_eq!(state.drawer.chevron(), '▼');
    }

    #[test]
    fn row_ids_by_index() {
        let mut state = DashboardState::new(15);
        state.display_recipes(&[recipe("a", "A"), Recipe::default()]);
        assert_eq!(state.row_id(0), Some("a"));
        assert_eq!(state.row_id(1), None);
        assert_eq!(state.row_id(5), None);
    }

    #[test]
    fn notice_message() {
        assert_eq!(Notice::Alert("x".to_string()).message(), "x");
        assert_eq!(Notice::Error("y".to_string()).message(), "y");
    }
}
