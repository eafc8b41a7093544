//! HTML rendering of the search surface.
//!
//! Plain string building; every piece of dynamic text goes through
//! [`escape`]. Element markers come from [`charsearch_core::markers`].

use charsearch_core::markers::{
    CHARACTER_CARD, CHARACTER_STATUS, EMPTY_TEXT, ERROR_TEXT, GENDER_LABEL, LOADING_TEXT,
    SEARCH_EMPTY, SEARCH_ERROR, SEARCH_LOADING, SEARCH_RESULTS, SPECIES_LABEL, STATUS_LABEL,
};
use charsearch_core::presenter::{CardImage, CardView, PLACEHOLDER_IMAGE};
use charsearch_core::view::ViewModel;

const STYLES: &str = "\
body { font-family: ui-sans-serif, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; background: #0f1115; color: #e7ebf3; }
.layout { display: grid; grid-template-rows: auto 1fr auto; min-height: 100vh; }
header, footer { padding: 12px 24px; background: #171b24; }
.carousel { display: flex; gap: 16px; overflow-x: auto; padding: 24px; }
.card { flex: 0 0 220px; border: 1px solid #2a3142; border-radius: 10px; background: #171b24; overflow: hidden; }
.card.spacer { flex: 0 0 24px; border: none; background: none; }
.image { width: 100%; display: block; }
.content { padding: 10px 12px; }
.name { margin: 0 0 8px; }
.detail { margin: 4px 0; font-size: 13px; color: #c8d0e3; }
.label { color: #8a95b5; margin-right: 4px; }
.status.alive { color: #2cb67d; }
.status.dead { color: #ef4565; }
.status.unknown { color: #a8b0c5; }
";

/// HTML-escape a text or attribute value.
pub fn escape(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}

/// Render the markup for one view state.
pub fn render_state(model: &ViewModel) -> String {
    match model {
        ViewModel::Loading => {
            format!("<p data-testid=\"{SEARCH_LOADING}\" class=\"loading\">{LOADING_TEXT}</p>\n")
        }
        ViewModel::Error => {
            format!("<p data-testid=\"{SEARCH_ERROR}\" class=\"error\">{ERROR_TEXT}</p>\n")
        }
        ViewModel::Empty => format!(
            "<div data-testid=\"{SEARCH_RESULTS}\" class=\"carousel\">\n\
             <p data-testid=\"{SEARCH_EMPTY}\" class=\"empty\">{EMPTY_TEXT}</p>\n\
             </div>\n"
        ),
        ViewModel::Cards(cards) => {
            let mut html = format!("<div data-testid=\"{SEARCH_RESULTS}\" class=\"carousel\">\n");
            html.push_str(spacer());
            for card in cards {
                html.push_str(&render_card(card));
            }
            html.push_str(spacer());
            html.push_str("</div>\n");
            html
        }
    }
}

fn spacer() -> &'static str {
    "<div class=\"card spacer\" aria-hidden=\"true\"></div>\n"
}

/// Render one character card.
pub fn render_card(card: &CardView) -> String {
    let mut html = format!(
        "<article class=\"card\" data-testid=\"{CHARACTER_CARD}\" data-key=\"{}\">\n",
        escape(card.key.as_str())
    );
    html.push_str(&render_image(&card.image, &card.image_alt));
    html.push_str("<div class=\"content\">\n");
    html.push_str(&format!(
        "<h3 class=\"name\">{}</h3>\n",
        escape(&card.display_name)
    ));

    if let Some(species) = &card.species {
        html.push_str(&format!(
            "<p class=\"detail\"><span class=\"label\">{SPECIES_LABEL}</span> {}</p>\n",
            escape(species)
        ));
    }
    if let Some(status) = &card.status {
        html.push_str(&format!(
            "<p class=\"detail\"><span class=\"label\">{STATUS_LABEL}</span> \
             <span class=\"status {}\" data-testid=\"{CHARACTER_STATUS}\">{}</span></p>\n",
            escape(&status.token),
            escape(&status.text)
        ));
    }
    if let Some(gender) = &card.gender {
        html.push_str(&format!(
            "<p class=\"detail\"><span class=\"label\">{GENDER_LABEL}</span> {}</p>\n",
            escape(gender)
        ));
    }

    html.push_str("</div>\n</article>\n");
    html
}

/// A remote image swaps itself to the placeholder on load failure. The
/// handler unsets itself first, so a failing placeholder cannot loop.
fn render_image(image: &CardImage, alt: &str) -> String {
    match image {
        CardImage::Remote(src) => format!(
            "<img class=\"image\" src=\"{}\" alt=\"{}\" onerror=\"{}\">\n",
            escape(src),
            escape(alt),
            escape(&image_fallback_script())
        ),
        CardImage::Placeholder => format!(
            "<img class=\"image\" src=\"{}\" alt=\"{}\">\n",
            escape(PLACEHOLDER_IMAGE),
            escape(alt)
        ),
    }
}

fn image_fallback_script() -> String {
    format!("this.onerror=null;this.src='{PLACEHOLDER_IMAGE}'")
}

/// Full search page: header with the term, the state, and a footer.
pub fn search_page(term: &str, model: &ViewModel) -> String {
    let mut html = document_head("Character search");
    html.push_str("<div class=\"layout\">\n<header>\n");
    html.push_str(&format!(
        "<h1>You searched for: {}</h1>\n",
        escape(term)
    ));
    html.push_str(&search_form(term));
    html.push_str("</header>\n<main>\n");
    html.push_str(&render_state(model));
    html.push_str("</main>\n<footer>Character data from the Rick and Morty API</footer>\n</div>\n");
    html.push_str("</body>\n</html>\n");
    html
}

/// Landing page with an empty search form.
pub fn home_page() -> String {
    let mut html = document_head("Character search");
    html.push_str("<div class=\"layout\">\n<header>\n<h1>Character search</h1>\n</header>\n<main class=\"content\">\n");
    html.push_str(&search_form(""));
    html.push_str("</main>\n<footer>Character data from the Rick and Morty API</footer>\n</div>\n");
    html.push_str("</body>\n</html>\n");
    html
}

fn search_form(term: &str) -> String {
    format!(
        "<form action=\"/search\" method=\"get\" role=\"search\">\n\
         <input type=\"search\" name=\"q\" value=\"{}\" placeholder=\"Search characters\">\n\
         <button type=\"submit\">Search</button>\n\
         </form>\n",
        escape(term)
    )
}

fn document_head(title: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n  \
         <title>{}</title>\n  <style>\n{STYLES}  </style>\n</head>\n<body>\n",
        escape(title)
    )
}
