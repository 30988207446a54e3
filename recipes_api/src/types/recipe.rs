//! Recipe records as served by the recipes API.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Nutrient key (e.g. `proteinContent`) to its display value.
pub type Nutrients = BTreeMap<String, Option<FieldValue>>;

/// Recipe identifier.
///
/// The server serializes Mongo ids in extended JSON (`{"$oid": "..."}`), but
/// plain strings are accepted too.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RecipeId {
    ObjectId {
        #[serde(rename = "$oid")]
        oid: String,
    },
    Plain(String),
}

impl RecipeId {
    pub fn as_str(&self) -> &str {
        match self {
            RecipeId::ObjectId { oid } => oid,
            RecipeId::Plain(id) => id,
        }
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A loosely typed scalar. Times, servings and nutrient values arrive as
/// numbers or strings depending on how the record was scraped.
///
/// Anything else (extended-JSON `{"$numberDouble": "NaN"}`, arrays) lands in
/// `Other` and renders as missing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Flag(bool),
    Other(Value),
}

impl FieldValue {
    /// Zero, NaN, the empty string and `false` count as missing.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Integer(n) => *n != 0,
            FieldValue::Float(n) => *n != 0.0 && !n.is_nan(),
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Flag(b) => *b,
            FieldValue::Other(_) => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Float(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Flag(b) => write!(f, "{}", b),
            FieldValue::Other(v) => write!(f, "{}", v),
        }
    }
}

/// Nutrients as a map, or `None` when the field is not an object.
fn lenient_nutrients<'de, D>(deserializer: D) -> Result<Option<Nutrients>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

/// String entries of a list; other entries are skipped. A bare string counts
/// as a one-item list.
fn lenient_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        Some(Value::String(s)) => Some(vec![s]),
        _ => None,
    })
}

/// The string, or `None` for any other JSON value.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Full recipe record. Every field is optional: the dataset was scraped and
/// cleaned, and missing values come back as `null` or not at all.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Recipe {
    #[serde(rename = "_id")]
    pub id: Option<RecipeId>,

    pub title: Option<String>,

    pub cuisine: Option<String>,

    /// Average rating on a 0-5 scale, half-star granularity.
    pub rating: Option<f64>,

    /// Minutes.
    pub total_time: Option<FieldValue>,
    /// Minutes.
    pub prep_time: Option<FieldValue>,
    /// Minutes.
    pub cook_time: Option<FieldValue>,

    pub serves: Option<FieldValue>,

    pub description: Option<String>,

    /// Stored as scraped, so values are not guaranteed to be strings.
    #[serde(default, deserialize_with = "lenient_nutrients")]
    pub nutrients: Option<Nutrients>,

    #[serde(default, deserialize_with = "lenient_list")]
    pub ingredients: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient_list")]
    pub instructions: Option<Vec<String>>,

    /// Page the recipe was scraped from.
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub continent: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub country: Option<String>,
}

impl Recipe {
    /// Bare identifier string, if the record carries one.
    pub fn id_str(&self) -> Option<&str> {
        self.id.as_ref().map(RecipeId::as_str)
    }
}
