use recipes_api::{ListQuery, Paginated, Query, SearchFilter, SearchQuery};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/api/recipes").unwrap()
}

#[test]
fn list_query_defaults() {
    let url = ListQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), Some("page=1"));
}

#[test]
fn list_query_page_and_limit() {
    let query = ListQuery::default().with_page(2).with_limit(25);
    assert_eq!(query.page(), 2);
    assert_eq!(query.limit(), Some(25));

    let url = query.add_to_url(&base_url());
    assert_eq!(url.query(), Some("page=2&limit=25"));
}

#[test]
fn search_query_empty_has_no_params() {
    let url = SearchQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), None);
}

#[test]
fn search_query_trims_values() {
    let query = SearchQuery::default()
        .with_title("  chicken  ")
        .with_cuisine("\tThai\n");
    assert_eq!(query.get(SearchFilter::Title), Some("chicken"));
    assert_eq!(query.get(SearchFilter::Cuisine), Some("Thai"));
    assert_eq!(query.len(), 2);
}

#[test]
fn search_query_fixed_parameter_order() {
    let url = SearchQuery::default()
        .with_total_time("30")
        .with_calories("500")
        .with_rating("4")
        .with_cuisine("Mexican")
        .with_title("taco")
        .add_to_url(&base_url());
    assert_eq!(
        url.query(),
        Some("title=taco&cuisine=Mexican&rating=4&calories=500&total_time=30")
    );
}

#[test]
fn search_query_encodes_comparisons_and_spaces() {
    let url = SearchQuery::default()
        .with_title("apple pie")
        .with_rating(">4")
        .add_to_url(&base_url());
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("title".to_string(), "apple pie".to_string()),
            ("rating".to_string(), ">4".to_string()),
        ]
    );
}

#[test]
fn search_query_iterates_in_order() {
    let query = SearchQuery::default()
        .with_filter(SearchFilter::TotalTime, "<20")
        .with_filter(SearchFilter::Title, "salad");
    let names: Vec<&str> = query.iter().map(|(f, _)| f.as_str()).collect();
    assert_eq!(names, vec!["title", "total_time"]);
}

#[test]
fn search_query_clear() {
    let mut query = SearchQuery::default().with_title("soup");
    query.clear();
    assert!(query.is_empty());
}
