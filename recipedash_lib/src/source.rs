//! The seam between the dashboard and the network.

use recipes_api::types::{ListResponse, Recipe, SearchResponse};
use recipes_api::{Client, Error, ListQuery, SearchQuery};

/// Anything that can answer the three recipe requests.
///
/// Implemented for the HTTP [`Client`]; tests substitute in-memory sources.
#[allow(async_fn_in_trait)]
pub trait RecipeSource {
    async fn list_recipes(&self, query: &ListQuery) -> Result<ListResponse, Error>;

    async fn search_recipes(&self, query: &SearchQuery) -> Result<SearchResponse, Error>;

    async fn get_recipe(&self, recipe_id: &str) -> Result<Recipe, Error>;
}

impl RecipeSource for Client {
    async fn list_recipes(&self, query: &ListQuery) -> Result<ListResponse, Error> {
        Client::list_recipes(self, query).await
    }

    async fn search_recipes(&self, query: &SearchQuery) -> Result<SearchResponse, Error> {
        Client::search_recipes(self, query).await
    }

    async fn get_recipe(&self, recipe_id: &str) -> Result<Recipe, Error> {
        Client::get_recipe(self, recipe_id).await
    }
}

impl<S: RecipeSource> RecipeSource for &S {
    async fn list_recipes(&self, query: &ListQuery) -> Result<ListResponse, Error> {
        (**self).list_recipes(query).await
    }

    async fn search_recipes(&self, query: &SearchQuery) -> Result<SearchResponse, Error> {
        (**self).search_recipes(query).await
    }

    async fn get_recipe(&self, recipe_id: &str) -> Result<Recipe, Error> {
        (**self).get_recipe(recipe_id).await
    }
}
