mod response;
pub(crate) use self::response::Envelope;
pub use self::response::{ErrorPayload, ListResponse, SearchResponse};

mod recipe;
pub use self::recipe::{FieldValue, Nutrients, Recipe, RecipeId};
