//! Library layer for the recipe dashboard: state, pagination, rendering and the controller.
//!
//! Wraps the `recipes_api` client behind the [`RecipeSource`] seam so the
//! dashboard logic runs the same against the live API and in-memory sources.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod pagination;
pub mod render;
pub mod source;
pub mod state;
pub mod validation;

pub use recipes_api;
pub use recipes_api::types;
pub use recipes_api::{Client, ListQuery, Paginated, Query, SearchFilter, SearchQuery};

pub use config::DashboardConfig;
pub use dashboard::RecipeDashboard;
pub use error::DashboardError;
pub use pagination::{NavControls, Pagination};
pub use render::{DrawerView, ItemList, NutritionTable, RecipeRow};
pub use source::RecipeSource;
pub use state::{DashboardState, Mode, Notice};
