//! The character entity as consumed from the catalog.
//!
//! Every text field except `id` is independently nullable. Blank values
//! (null, missing, or `""`) are normalized to `None` at decode time, so
//! `Option` is the only representation of absence downstream.

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque per-result identifier. Used as a render key only.
///
/// The catalog serves GraphQL `ID` values as strings, but numeric ids are
/// accepted and kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct CharacterId(String);

impl CharacterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for CharacterId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => Self(text),
            RawId::Number(n) => Self(n.to_string()),
        }
    }
}

/// One result row of the `GetCharacters` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub species: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub gender: Option<String>,
}

impl Character {
    /// A character with only an id; every text field absent.
    pub fn bare(id: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(id),
            name: None,
            image: None,
            species: None,
            status: None,
            gender: None,
        }
    }
}

/// The blank predicate: a text field is blank when it is null, unset, or
/// the empty string.
///
/// Whitespace is content; `" "` is not blank.
pub fn is_blank(value: Option<&str>) -> bool {
    matches!(value, None | Some(""))
}

/// Return the value only when it is not blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !is_blank(Some(*v)))
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !is_blank(Some(v.as_str()))))
}
