//! Character lookups: first-match search, side-by-side comparison, and
//! homeworld/film traversal.

use crate::api::{ApiError, Fetch, fetch_as};
use crate::config::Config;
use crate::models::{Character, Film, Page, Planet, UNKNOWN};

/// Attributes shown by [`compare`], in display order.
pub const COMPARED_ATTRIBUTES: [&str; 4] = ["height", "mass", "birth_year", "gender"];

/// Search people by name fragment and return the first match, if any.
///
/// No disambiguation: when several records match, the API's first one wins.
pub fn search<F: Fetch + ?Sized>(
    fetch: &F,
    config: &Config,
    query: &str,
) -> Result<Option<Character>, ApiError> {
    let url = config.people_search_url(query);
    let page: Page<Character> = fetch_as(fetch, &url)?;
    log::debug!(
        "search {query:?}: {} result(s) on first page",
        page.results.len()
    );
    Ok(page.results.into_iter().next())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// First letter upper-cased, e.g. `Birth_year`.
    pub label: String,
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub left_name: String,
    pub right_name: String,
    pub rows: Vec<ComparisonRow>,
}

/// Pair up the raw attribute values of two characters. Values are not normalized.
pub fn compare(a: &Character, b: &Character) -> Comparison {
    let rows = COMPARED_ATTRIBUTES
        .iter()
        .map(|key| ComparisonRow {
            label: capitalize(key),
            left: a.attribute(key),
            right: b.attribute(key),
        })
        .collect();
    Comparison {
        left_name: a.name().to_string(),
        right_name: b.name().to_string(),
        rows,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Connections {
    pub name: String,
    pub homeworld: String,
    /// Film titles in the character's listed order.
    pub films: Vec<String>,
}

/// Resolve the homeworld, then each film, one request at a time.
///
/// The first failed request aborts the walk; nothing partial is returned.
pub fn connections<F: Fetch + ?Sized>(
    fetch: &F,
    character: &Character,
) -> Result<Connections, ApiError> {
    let homeworld_url = character
        .homeworld()
        .ok_or(ApiError::MissingLink("homeworld"))?;
    let planet: Planet = fetch_as(fetch, homeworld_url)?;

    let mut films = Vec::new();
    for url in character.films() {
        let film: Film = fetch_as(fetch, url)?;
        films.push(film.title.unwrap_or_else(|| UNKNOWN.to_string()));
    }

    Ok(Connections {
        name: character.name().to_string(),
        homeworld: planet.name.unwrap_or_else(|| UNKNOWN.to_string()),
        films,
    })
}
