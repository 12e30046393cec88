//! Book model

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A book record, keyed by its caller-supplied `id`.
///
/// Only a JSON object decodes into a book. Fields that are missing or
/// `null` decode to an empty string; no content validation is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct Book {
    /// Unique identifier, supplied by the caller
    #[serde(default)]
    #[schema(example = "1")]
    pub id: String,
    #[serde(default)]
    #[schema(example = "1984")]
    pub title: String,
    #[serde(default)]
    #[schema(example = "George Orwell")]
    pub author: String,
}

impl Book {
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
        }
    }
}

#[derive(Deserialize)]
struct BookFields {
    #[serde(default, deserialize_with = "null_as_empty")]
    id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    author: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl<'de> Deserialize<'de> for Book {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Going through a map rejects sequences, which a derived impl accepts
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let BookFields { id, title, author } =
            serde_json::from_value(Value::Object(object)).map_err(de::Error::custom)?;
        Ok(Self { id, title, author })
    }
}
