//! The movie list the app browses.
//!
//! Movies ship with the app as a TMDB-shaped list response so the grid and
//! detail pages work offline.

use serde::Deserialize;
use shared_types::{AppError, Movie, MovieId};
use std::collections::HashSet;

const CATALOG_JSON: &str = include_str!("../assets/movies.json");

/// One page of a TMDB list response. Only `results` is read.
#[derive(Debug, Deserialize)]
struct CatalogPage {
    results: Vec<Movie>,
}

/// Parse a list response, rejecting duplicate ids.
///
/// Ids double as route segments and transition keys, so two records sharing
/// one would link to the same page and animate into each other.
pub fn parse_catalog(json: &str) -> Result<Vec<Movie>, AppError> {
    let page: CatalogPage = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(page.results.len());
    for movie in &page.results {
        if !seen.insert(&movie.id) {
            return Err(AppError::bad_request(format!(
                "Duplicate movie id {} in catalog",
                movie.id
            )));
        }
    }

    Ok(page.results)
}

/// Load every movie in the bundled catalog.
pub async fn list_movies() -> Result<Vec<Movie>, AppError> {
    let movies = parse_catalog(CATALOG_JSON)?;
    tracing::info!(count = movies.len(), "loaded movie catalog");
    Ok(movies)
}

/// Look up one movie by the id segment of its detail route.
pub async fn get_movie(segment: String) -> Result<Movie, AppError> {
    let id = MovieId::from_segment(&segment);
    find_movie(parse_catalog(CATALOG_JSON)?, &id)
}

fn find_movie(movies: Vec<Movie>, id: &MovieId) -> Result<Movie, AppError> {
    movies
        .into_iter()
        .find(|m| &m.id == id)
        .ok_or_else(|| {
            tracing::warn!(%id, "movie not found in catalog");
            AppError::not_found(format!("No movie with id {id}"))
        })
}
