//! Card presentation: one [`Character`] in, one render-ready [`CardView`] out.
//!
//! Pure mapping. Every fallback decision goes through
//! [`non_blank`](crate::character::non_blank).

use crate::character::{non_blank, Character, CharacterId};

/// Heading shown when a character has no usable name.
pub const UNKNOWN_NAME: &str = "Unknown Character";

/// Grey 200x200 "No Image" square, inlined as an SVG data URI.
pub const PLACEHOLDER_IMAGE: &str = concat!(
    "data:image/svg+xml,%3Csvg xmlns=\"http://www.w3.org/2000/svg\" width=\"200\" height=\"200\"%3E",
    "%3Crect fill=\"%23cccccc\" width=\"200\" height=\"200\"/%3E",
    "%3Ctext x=\"50%25\" y=\"50%25\" text-anchor=\"middle\" dy=\".3em\" fill=\"%23666\" ",
    "font-family=\"Arial\" font-size=\"16\"%3ENo Image%3C/text%3E%3C/svg%3E",
);

/// Image source of a card.
///
/// Starts as `Remote` when the character has an image URI. A load failure
/// moves it to `Placeholder`, and it never moves back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardImage {
    Remote(String),
    Placeholder,
}

impl CardImage {
    pub fn from_uri(uri: Option<&str>) -> Self {
        match non_blank(uri) {
            Some(uri) => CardImage::Remote(uri.to_string()),
            None => CardImage::Placeholder,
        }
    }

    pub fn src(&self) -> &str {
        match self {
            CardImage::Remote(uri) => uri,
            CardImage::Placeholder => PLACEHOLDER_IMAGE,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, CardImage::Placeholder)
    }

    /// Handle a runtime load failure of the current source.
    ///
    /// Returns `true` if the source was swapped. A placeholder that fails
    /// to load stays as it is.
    pub fn on_load_error(&mut self) -> bool {
        if self.is_placeholder() {
            return false;
        }
        *self = CardImage::Placeholder;
        true
    }
}

/// The status line of a card: raw text plus its class token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub token: String,
}

impl StatusLine {
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.to_string(),
            token: status_token(raw),
        }
    }
}

/// Visual classification token for a status value: its lowercase form,
/// nothing else.
pub fn status_token(raw: &str) -> String {
    raw.to_lowercase()
}

/// Render-ready view of one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Render key; carries no ordering meaning.
    pub key: CharacterId,
    pub display_name: String,
    pub image: CardImage,
    pub image_alt: String,
    pub species: Option<String>,
    pub status: Option<StatusLine>,
    pub gender: Option<String>,
}

/// Map one character to its card.
pub fn present(character: &Character) -> CardView {
    let display_name = non_blank(character.name.as_deref())
        .unwrap_or(UNKNOWN_NAME)
        .to_string();
    let image_alt = format!("{display_name} character");

    CardView {
        key: character.id.clone(),
        image: CardImage::from_uri(character.image.as_deref()),
        image_alt,
        display_name,
        species: non_blank(character.species.as_deref()).map(str::to_string),
        status: non_blank(character.status.as_deref()).map(StatusLine::new),
        gender: non_blank(character.gender.as_deref()).map(str::to_string),
    }
}
