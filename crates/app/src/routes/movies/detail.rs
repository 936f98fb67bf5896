use dioxus::prelude::*;
use shared_types::{Movie, TransitionKey, MOVIE_CARD};
use shared_ui::components::{
    Card, CardContent, CardTitle, ImageWithFallback, MotionDiv, MotionText, PageActions,
    PageHeader, Skeleton,
};

use crate::catalog;
use crate::routes::Route;

/// Detail page for one movie.
///
/// Poster and title reuse the card's transition keys so the browser morphs
/// the clicked card into this layout.
#[component]
pub fn MovieDetailPage(id: String) -> Element {
    let data = use_resource(use_reactive!(|(id,)| async move {
        catalog::get_movie(id).await
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./movies.css") }
        div { class: "container",
            PageHeader {
                PageActions {
                    Link { to: Route::MovieList {}, class: "movie-back-link", "Back to movies" }
                }
            }

            match &*data.read() {
                Some(Ok(movie)) => rsx! {
                    MovieHero { movie: movie.clone() }
                },
                Some(Err(err)) if err.is_not_found() => rsx! {
                    Card { class: "movie-error",
                        CardTitle { "Movie not found" }
                        CardContent {
                            p { "{err.message}" }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    Card { class: "movie-error",
                        CardTitle { "Could not load movie" }
                        CardContent {
                            p { "{err.message}" }
                        }
                    }
                },
                None => rsx! {
                    div { class: "movie-hero",
                        Skeleton { class: "movie-hero-skeleton" }
                    }
                },
            }
        }
    }
}

#[component]
fn MovieHero(movie: Movie) -> Element {
    rsx! {
        div { class: "movie-hero",
            MotionDiv {
                layout_id: TransitionKey::image(&movie.id),
                class: "movie-hero-poster",
                ImageWithFallback {
                    src: movie.poster_url(),
                    alt: movie.poster_alt(),
                    width: MOVIE_CARD.poster_width,
                    height: MOVIE_CARD.poster_height,
                    unoptimized: true,
                    class: "movie-hero-image",
                }
            }
            MotionText {
                layout_id: TransitionKey::title(&movie.id),
                class: "movie-hero-title",
                "{movie.title}"
            }
        }
    }
}
