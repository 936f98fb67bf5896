use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardTitle};

use crate::routes::Route;

/// Catch-all page for paths outside the movie routes.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            Card { class: "not-found-card",
                div { class: "not-found-code", "404" }
                CardTitle { "Nothing showing here" }
                CardContent {
                    p {
                        "No page lives at "
                        code { "{path}" }
                        "."
                    }
                    Link { to: Route::MovieList {}, class: "not-found-link", "Browse movies" }
                }
            }
        }
    }
}
