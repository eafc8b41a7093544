//! Stable markers and literal texts of the rendered search surface.
//!
//! Shared by the renderer and by tests so both sides select the same
//! elements.

// ---------------------------------------------------------------------------
// Element markers (`data-testid` values)
// ---------------------------------------------------------------------------

pub const CHARACTER_CARD: &str = "character-card";
pub const CHARACTER_STATUS: &str = "character-status";

pub const SEARCH_RESULTS: &str = "search-results";
pub const SEARCH_LOADING: &str = "search-loading";
pub const SEARCH_ERROR: &str = "search-error";
pub const SEARCH_EMPTY: &str = "search-empty";

// ---------------------------------------------------------------------------
// Literal texts
// ---------------------------------------------------------------------------

pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_TEXT: &str = "Error :(";
pub const EMPTY_TEXT: &str = "No characters found";

pub const SPECIES_LABEL: &str = "Species:";
pub const STATUS_LABEL: &str = "Status:";
pub const GENDER_LABEL: &str = "Gender:";
