use std::collections::BTreeMap;
use std::str::FromStr;

use url::Url;

use super::Query;

/// Attributes the search endpoint filters on.
///
/// Declaration order is the order parameters are sent in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SearchFilter {
    /// Case-insensitive substring match.
    Title,
    /// Exact match.
    Cuisine,
    /// Number with an optional `<`, `<=`, `>`, `>=` prefix.
    Rating,
    /// Number with an optional `<`, `<=`, `>`, `>=` prefix.
    Calories,
    /// Whole minutes with an optional `<`, `<=`, `>`, `>=` prefix.
    TotalTime,
}

impl SearchFilter {
    pub const ALL: [SearchFilter; 5] = [
        SearchFilter::Title,
        SearchFilter::Cuisine,
        SearchFilter::Rating,
        SearchFilter::Calories,
        SearchFilter::TotalTime,
    ];

    /// Query parameter name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchFilter::Title => "title",
            SearchFilter::Cuisine => "cuisine",
            SearchFilter::Rating => "rating",
            SearchFilter::Calories => "calories",
            SearchFilter::TotalTime => "total_time",
        }
    }

    /// Whether the server compares this filter numerically.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            SearchFilter::Rating | SearchFilter::Calories | SearchFilter::TotalTime
        )
    }
}

impl std::fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SearchFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SearchFilter::Title),
            "cuisine" => Ok(SearchFilter::Cuisine),
            "rating" => Ok(SearchFilter::Rating),
            "calories" => Ok(SearchFilter::Calories),
            "total_time" | "total-time" | "time" => Ok(SearchFilter::TotalTime),
            _ => Err(()),
        }
    }
}

/// The active filter set. Values are trimmed and empty values are never stored.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    filters: BTreeMap<SearchFilter, String>,
}

impl Query for SearchQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        for (filter, value) in self.filters.iter() {
            url.query_pairs_mut()
                .append_pair(filter.as_str(), value.as_str());
        }
        url
    }
}

impl SearchQuery {
    /// Sets `filter` to the trimmed `value`. A blank value removes the filter.
    pub fn with_filter(mut self, filter: SearchFilter, value: &str) -> Self {
        self.set(filter, value);
        self
    }

    pub fn with_title(self, title: &str) -> Self {
        self.with_filter(SearchFilter::Title, title)
    }

    pub fn with_cuisine(self, cuisine: &str) -> Self {
        self.with_filter(SearchFilter::Cuisine, cuisine)
    }

    pub fn with_rating(self, rating: &str) -> Self {
        self.with_filter(SearchFilter::Rating, rating)
    }

    pub fn with_calories(self, calories: &str) -> Self {
        self.with_filter(SearchFilter::Calories, calories)
    }

    pub fn with_total_time(self, total_time: &str) -> Self {
        self.with_filter(SearchFilter::TotalTime, total_time)
    }

    /// In-place form of [`SearchQuery::with_filter`].
    pub fn set(&mut self, filter: SearchFilter, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.filters.remove(&filter);
        } else {
            self.filters.insert(filter, value.to_string());
        }
    }

    pub fn get(&self, filter: SearchFilter) -> Option<&str> {
        self.filters.get(&filter).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SearchFilter, &str)> {
        self.filters.iter().map(|(f, v)| (*f, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }
}
