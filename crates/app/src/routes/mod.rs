pub mod movies;
pub mod not_found;

use dioxus::prelude::*;

use not_found::NotFound;

/// Application routes.
///
/// `MovieDetail` must stay at `/movie/:id`: movie cards link there by path.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    MovieList {},
    #[route("/movie/:id")]
    MovieDetail { id: String },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Shell around every movie page.
#[component]
fn AppLayout() -> Element {
    rsx! {
        div { class: "app-shell",
            nav { class: "app-nav",
                Link { to: Route::MovieList {}, class: "app-brand", "Movies" }
            }
            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn MovieList() -> Element {
    movies::list::MovieListPage()
}

#[component]
fn MovieDetail(id: String) -> Element {
    rsx! { movies::detail::MovieDetailPage { id: id } }
}
