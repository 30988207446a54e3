//! Pure functions turning API records into display-ready rows and panels.
//!
//! Nothing here touches the network or the terminal; the dashboard state stores
//! the results and the front end prints them.

use recipes_api::types::{FieldValue, Nutrients, Recipe};

pub const NOT_AVAILABLE: &str = "N/A";
pub const ELLIPSIS: &str = "...";
/// Titles longer than this are truncated in the table.
pub const TITLE_MAX_CHARS: usize = 40;
pub const STAR_SLOTS: usize = 5;

pub const UNKNOWN_CUISINE: &str = "Unknown Cuisine";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const NO_NUTRITION: &str = "No nutrition information available.";
pub const NO_ITEMS: &str = "No information available.";

/// Nutrient keys shown in the drawer, in display order, with their labels.
pub const NUTRIENT_LABELS: [(&str, &str); 10] = [
    ("calories", "Calories"),
    ("carbohydrateContent", "Carbohydrates"),
    ("cholesterolContent", "Cholesterol"),
    ("fiberContent", "Fiber"),
    ("proteinContent", "Protein"),
    ("saturatedFatContent", "Saturated Fat"),
    ("sodiumContent", "Sodium"),
    ("sugarContent", "Sugar"),
    ("fatContent", "Fat"),
    ("unsaturatedFatContent", "Unsaturated Fat"),
];

/// Returns `"N/A"` for missing or empty text, the text itself when it fits, and
/// otherwise the first `max_length` characters followed by `"..."`.
pub fn truncate_text(text: Option<&str>, max_length: usize) -> String {
    match text {
        None | Some("") => NOT_AVAILABLE.to_string(),
        Some(text) if text.chars().count() <= max_length => text.to_string(),
        Some(text) => {
            let head: String = text.chars().take(max_length).collect();
            format!("{}{}", head, ELLIPSIS)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarGlyph {
    Full,
    Half,
    Empty,
}

impl StarGlyph {
    pub fn as_char(&self) -> char {
        match self {
            StarGlyph::Full => '★',
            StarGlyph::Half => '⯨',
            StarGlyph::Empty => '☆',
        }
    }
}

/// Five star slots for a 0-5 rating: `floor(rating)` full stars, a half star when
/// the fractional part is at least 0.5, empty stars for the rest.
///
/// Out-of-range ratings are clamped so the result always has five slots.
pub fn star_glyphs(rating: f64) -> [StarGlyph; STAR_SLOTS] {
    let rating = if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, STAR_SLOTS as f64)
    };
    let full = rating.floor() as usize;
    let mut glyphs = [StarGlyph::Empty; STAR_SLOTS];
    for glyph in glyphs.iter_mut().take(full) {
        *glyph = StarGlyph::Full;
    }
    if full < STAR_SLOTS && rating.fract() >= 0.5 {
        glyphs[full] = StarGlyph::Half;
    }
    glyphs
}

/// Star glyphs followed by the numeric rating, e.g. `★★★★⯨ (4.5)`.
/// Missing and zero ratings render as `"N/A"`.
pub fn render_star_rating(rating: Option<f64>) -> String {
    match rating {
        Some(rating) if rating != 0.0 && !rating.is_nan() => {
            let stars: String = star_glyphs(rating).iter().map(StarGlyph::as_char).collect();
            format!("{} ({})", stars, rating)
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn field_text(value: Option<&FieldValue>) -> String {
    match value {
        Some(value) if value.is_truthy() => value.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn text_or(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => placeholder.to_string(),
    }
}

/// `"<n> minutes"`, or `"N/A"` when the time is missing.
pub fn minutes(value: Option<&FieldValue>) -> String {
    match value {
        Some(value) if value.is_truthy() => format!("{} minutes", value),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// One line of the recipe table. Activating it opens the recipe with `id`.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipeRow {
    pub id: Option<String>,
    /// Truncated to [`TITLE_MAX_CHARS`].
    pub title: String,
    /// Untruncated title, for tooltips and wide output.
    pub full_title: Option<String>,
    pub cuisine: String,
    pub rating: String,
    pub total_time: String,
    pub serves: String,
}

pub fn recipe_row(recipe: &Recipe) -> RecipeRow {
    RecipeRow {
        id: recipe.id_str().map(str::to_string),
        title: truncate_text(recipe.title.as_deref(), TITLE_MAX_CHARS),
        full_title: recipe.title.clone(),
        cuisine: text_or(recipe.cuisine.as_deref(), NOT_AVAILABLE),
        rating: render_star_rating(recipe.rating),
        total_time: field_text(recipe.total_time.as_ref()),
        serves: field_text(recipe.serves.as_ref()),
    }
}

pub fn recipe_rows(recipes: &[Recipe]) -> Vec<RecipeRow> {
    recipes.iter().map(recipe_row).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NutritionRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NutritionTable {
    Rows(Vec<NutritionRow>),
    /// None of the recognized nutrients had a value.
    Unavailable,
}

impl NutritionTable {
    /// Number of rendered rows; the unavailable message occupies one.
    pub fn row_count(&self) -> usize {
        match self {
            NutritionTable::Rows(rows) => rows.len(),
            NutritionTable::Unavailable => 1,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            NutritionTable::Rows(rows) => rows
                .iter()
                .map(|row| format!("{}: {}", row.label, row.value))
                .collect(),
            NutritionTable::Unavailable => vec![NO_NUTRITION.to_string()],
        }
    }
}

/// Rows for the recognized nutrients that carry a value, in [`NUTRIENT_LABELS`] order.
pub fn nutrition_table(nutrients: Option<&Nutrients>) -> NutritionTable {
    let rows: Vec<NutritionRow> = NUTRIENT_LABELS
        .iter()
        .filter_map(|&(key, label)| {
            let value = nutrients?.get(key)?.as_ref()?;
            value.is_truthy().then(|| NutritionRow {
                label,
                value: value.to_string(),
            })
        })
        .collect();
    if rows.is_empty() {
        NutritionTable::Unavailable
    } else {
        NutritionTable::Rows(rows)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemList {
    Empty,
    Items { ordered: bool, items: Vec<String> },
}

impl ItemList {
    /// Ordered lists are numbered from 1, unordered lists are bulleted.
    pub fn lines(&self) -> Vec<String> {
        match self {
            ItemList::Empty => vec![NO_ITEMS.to_string()],
            ItemList::Items {
                ordered: true,
                items,
            } => items
                .iter()
                .enumerate()
                .map(|(i, item)| format!("{}. {}", i + 1, item))
                .collect(),
            ItemList::Items {
                ordered: false,
                items,
            } => items.iter().map(|item| format!("• {}", item)).collect(),
        }
    }
}

pub fn item_list(items: &[String], ordered: bool) -> ItemList {
    if items.is_empty() {
        ItemList::Empty
    } else {
        ItemList::Items {
            ordered,
            items: items.to_vec(),
        }
    }
}

/// Everything the detail drawer shows for one recipe.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawerView {
    pub id: Option<String>,
    pub title: String,
    pub cuisine: String,
    pub description: String,
    pub total_time: String,
    pub prep_time: String,
    pub cook_time: String,
    pub nutrition: NutritionTable,
    pub ingredients: ItemList,
    pub instructions: ItemList,
    pub source_url: Option<String>,
    /// `"<country>, <continent>"` when either is known.
    pub origin: Option<String>,
}

pub fn drawer_view(recipe: &Recipe) -> DrawerView {
    let origin = [recipe.country.as_deref(), recipe.continent.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    DrawerView {
        id: recipe.id_str().map(str::to_string),
        title: recipe.title.clone().unwrap_or_default(),
        cuisine: text_or(recipe.cuisine.as_deref(), UNKNOWN_CUISINE),
        description: text_or(recipe.description.as_deref(), NO_DESCRIPTION),
        total_time: minutes(recipe.total_time.as_ref()),
        prep_time: minutes(recipe.prep_time.as_ref()),
        cook_time: minutes(recipe.cook_time.as_ref()),
        nutrition: nutrition_table(recipe.nutrients.as_ref()),
        ingredients: item_list(recipe.ingredients.as_deref().unwrap_or_default(), false),
        instructions: item_list(recipe.instructions.as_deref().unwrap_or_default(), true),
        source_url: recipe.url.clone().filter(|url| !url.is_empty()),
        origin: (!origin.is_empty()).then_some(origin),
    }
}
