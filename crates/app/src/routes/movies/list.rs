use dioxus::prelude::*;
use shared_types::{AppConfig, Movie};
use shared_ui::components::{
    Card, CardContent, CardTitle, MoviePreview, MoviePreviewSkeleton, PageHeader, PageTitle,
};

use crate::catalog;

#[component]
pub fn MovieListPage() -> Element {
    let config = use_context::<AppConfig>();
    let skeleton_count = config.catalog.skeleton_count;

    let data = use_resource(move || async move { catalog::list_movies().await });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./movies.css") }
        div { class: "container",
            PageHeader {
                PageTitle { "Popular Movies" }
            }

            match &*data.read() {
                Some(Ok(movies)) if !movies.is_empty() => rsx! {
                    MovieGrid { movies: movies.clone(), skeleton_count }
                },
                Some(Ok(_)) => rsx! {
                    Card {
                        CardContent {
                            p { "No movies to show yet." }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    Card { class: "movie-error",
                        CardTitle { "Could not load movies" }
                        CardContent {
                            p { "{err.message}" }
                        }
                    }
                },
                None => rsx! {
                    MovieGrid { skeleton_count }
                },
            }
        }
    }
}

/// Grid of movie cards. Until `movies` arrives every slot is a skeleton of
/// the same footprint, so the page does not shift when the list lands.
#[component]
pub fn MovieGrid(#[props(default)] movies: Option<Vec<Movie>>, skeleton_count: usize) -> Element {
    let busy = if movies.is_none() { "true" } else { "false" };

    rsx! {
        div { class: "movie-grid", "aria-busy": busy,
            match movies {
                Some(movies) => rsx! {
                    for movie in movies {
                        MoviePreview { key: "{movie.id}", movie: movie.clone() }
                    }
                },
                None => rsx! {
                    for i in 0..skeleton_count {
                        MoviePreviewSkeleton { key: "{i}" }
                    }
                },
            }
        }
    }
}
