use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::credentials::short_id;

/// Titles drawn by the search task.
pub const SEARCH_TITLES: [&str; 5] = ["Avatar", "Inception", "Matrix", "Titanic", "Star Wars"];

pub const SEARCH_LANG: &str = "fr-FR";

pub const MAX_RATE: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Director {
    pub firstname: String,
    pub lastname: String,
}

/// Body of a film creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFilm {
    pub title: String,
    pub description: String,
    pub year: String,
    pub director: Director,
}

impl NewFilm {
    pub fn generate() -> Self {
        Self {
            title: format!("Test Film {}", short_id()),
            description: "A test film for load testing".to_string(),
            year: "2024".to_string(),
            director: Director {
                firstname: "John".to_string(),
                lastname: "Doe".to_string(),
            },
        }
    }
}

/// Body of a rating update request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmUpdate {
    pub rate: f64,
    pub opinion: String,
}

impl FilmUpdate {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let now = Utc::now();
        let seconds = now.timestamp_micros() as f64 / 1_000_000.0;
        Self {
            rate: rng.gen_range(0.0..=MAX_RATE),
            opinion: format!("Updated opinion {seconds}"),
        }
    }
}

pub fn random_search_title<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SEARCH_TITLES.choose(rng).copied().unwrap_or(SEARCH_TITLES[0])
}
