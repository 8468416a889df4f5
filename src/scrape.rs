//! Film identifier extraction from the rendered library page.
//!
//! The library view embeds one hidden `id` input per film. The pattern below is
//! coupled to that markup: a renamed form field on the server silently yields
//! an empty list here.

use once_cell::sync::Lazy;
use regex::Regex;

static FILM_ID_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"name="id" value="(\d+)""#).expect("valid film id pattern"));

/// All film identifiers in `body`, in order of appearance.
pub fn extract_film_ids(body: &str) -> Vec<String> {
    FILM_ID_FIELD
        .captures_iter(body)
        .map(|caps| caps[1].to_string())
        .collect()
}
