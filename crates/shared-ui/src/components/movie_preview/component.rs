use dioxus::prelude::*;
use shared_types::{Movie, TransitionKey, MOVIE_CARD};

use crate::components::image::ImageWithFallback;
use crate::components::motion::{use_motion_preference, MotionDiv, MotionText};
use crate::components::skeleton::Skeleton;

/// Value of the `data-testid` attribute on every movie card.
pub const MOVIE_ITEM_TEST_ID: &str = "movie-item-test";

/// A clickable poster card linking to the movie's detail page.
///
/// The poster and the title carry the `image:{id}` and `title:{id}` transition
/// keys, so a detail page rendering the same keys animates from the card.
/// Rendering is a pure function of `movie`; a missing poster path is left to
/// the image fallback.
#[component]
pub fn MoviePreview(movie: Movie) -> Element {
    let motion = use_motion_preference();
    let layout = MOVIE_CARD;
    let card_style = layout.card_style();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "movie-preview",
            "data-testid": MOVIE_ITEM_TEST_ID,
            "data-motion": motion.as_str(),
            style: card_style,
            Link {
                to: movie.detail_path(),
                class: "movie-preview-link",
                MotionDiv {
                    layout_id: TransitionKey::image(&movie.id),
                    class: "movie-preview-poster",
                    ImageWithFallback {
                        src: movie.poster_url(),
                        alt: movie.poster_alt(),
                        width: layout.poster_width,
                        height: layout.poster_height,
                        unoptimized: true,
                        class: "movie-preview-image",
                    }
                }
                MotionText {
                    layout_id: TransitionKey::title(&movie.id),
                    class: "movie-preview-title",
                    title: "{movie.title}",
                    "{movie.title}"
                }
            }
        }
    }
}

/// Placeholder with the footprint of a [`MoviePreview`], shown while the
/// movie is still loading. Takes no input and always renders the same node.
#[component]
pub fn MoviePreviewSkeleton() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Skeleton {
            class: "movie-preview-skeleton",
            style: MOVIE_CARD.footprint_style(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::motion::MotionProvider;
    use pretty_assertions::assert_eq;

    #[derive(Routable, Clone, PartialEq, Debug)]
    enum Route {
        #[route("/")]
        Harness {},
        #[route("/movie/:id")]
        Detail { id: String },
    }

    #[derive(Clone, PartialEq)]
    struct Subject(Movie);

    #[component]
    fn Harness() -> Element {
        let Subject(movie) = use_context::<Subject>();
        rsx! { MoviePreview { movie } }
    }

    #[component]
    fn Detail(id: String) -> Element {
        rsx! { "detail {id}" }
    }

    #[component]
    fn Root(movie: Movie, reduced: bool) -> Element {
        use_context_provider(|| Subject(movie));
        rsx! {
            MotionProvider { reduced,
                Router::<Route> {}
            }
        }
    }

    fn render_with_motion(movie: Movie, reduced: bool) -> String {
        let mut dom = VirtualDom::new_with_props(Root, RootProps { movie, reduced });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn render_preview(movie: Movie) -> String {
        render_with_motion(movie, false)
    }

    /// Body of the first rule whose selector list is exactly `selector`.
    fn css_rule<'a>(css: &'a str, selector: &str) -> &'a str {
        let open = format!("{selector} {{");
        let start = css
            .find(&open)
            .unwrap_or_else(|| panic!("no rule for {selector}"))
            + open.len();
        let end = start + css[start..].find('}').unwrap();
        &css[start..end]
    }

    #[test]
    fn dune_card_links_poster_and_title() {
        let html = render_preview(Movie::new(42u64, "Dune", Some("/abc.jpg")));
        assert!(html.contains(r#"href="/movie/42""#), "{html}");
        assert!(
            html.contains(r#"src="https://image.tmdb.org/t/p/w500/abc.jpg""#),
            "{html}"
        );
        assert!(html.contains(r#"alt="Dune Poster""#), "{html}");
        assert!(html.contains(">Dune</p>"), "{html}");
    }

    #[test]
    fn empty_poster_path_still_renders_bare_prefix() {
        let html = render_preview(Movie::new(7u64, "Untitled", Some("")));
        assert!(html.contains(r#"href="/movie/7""#), "{html}");
        assert!(
            html.contains(r#"src="https://image.tmdb.org/t/p/w500""#),
            "{html}"
        );
        assert!(html.contains(r#"alt="Untitled Poster""#), "{html}");
    }

    #[test]
    fn missing_poster_path_matches_empty_one() {
        let html = render_preview(Movie::new(7u64, "Untitled", None));
        assert!(
            html.contains(r#"src="https://image.tmdb.org/t/p/w500""#),
            "{html}"
        );
    }

    #[test]
    fn root_exposes_test_id_regardless_of_content() {
        for movie in [
            Movie::new(1u64, "A", Some("/a.jpg")),
            Movie::new("slug", "", None),
        ] {
            let html = render_preview(movie);
            assert!(html.contains(r#"data-testid="movie-item-test""#), "{html}");
        }
    }

    #[test]
    fn poster_and_title_carry_transition_keys() {
        let html = render_preview(Movie::new(42u64, "Dune", Some("/abc.jpg")));
        assert!(html.contains(r#"data-layout-id="image:42""#), "{html}");
        assert!(html.contains(r#"data-layout-id="title:42""#), "{html}");
        assert!(html.contains("view-transition-name: image-42;"), "{html}");
        assert!(html.contains("view-transition-name: title-42;"), "{html}");
    }

    #[test]
    fn poster_has_fixed_intrinsic_size_and_loads_unoptimized() {
        let html = render_preview(Movie::new(42u64, "Dune", Some("/abc.jpg")));
        assert!(html.contains(r#"width="320""#), "{html}");
        assert!(html.contains(r#"height="640""#), "{html}");
        assert!(html.contains(r#"loading="eager""#), "{html}");
    }

    #[test]
    fn string_ids_route_and_key_verbatim() {
        let html = render_preview(Movie::new("dune-2021", "Dune", Some("/d.jpg")));
        assert!(html.contains(r#"href="/movie/dune-2021""#), "{html}");
        assert!(html.contains(r#"data-layout-id="image:dune-2021""#), "{html}");
    }

    #[test]
    fn repeated_renders_are_identical() {
        let movie = Movie::new(42u64, "Dune", Some("/abc.jpg"));
        assert_eq!(render_preview(movie.clone()), render_preview(movie));
    }

    #[test]
    fn reduced_motion_keeps_keys_but_drops_transitions() {
        let html = render_with_motion(Movie::new(42u64, "Dune", Some("/abc.jpg")), true);
        assert!(html.contains(r#"data-motion="reduced""#), "{html}");
        assert!(html.contains(r#"data-layout-id="image:42""#), "{html}");
        assert!(html.contains(r#"data-layout-id="title:42""#), "{html}");
        assert!(!html.contains("view-transition-name"), "{html}");
    }

    #[test]
    fn full_motion_is_the_default() {
        let html = render_preview(Movie::new(42u64, "Dune", Some("/abc.jpg")));
        assert!(html.contains(r#"data-motion="full""#), "{html}");
    }

    #[test]
    fn card_and_skeleton_share_border_box_footprint() {
        let card = render_preview(Movie::new(42u64, "Dune", Some("/abc.jpg")));
        let skeleton = dioxus_ssr::render_element(rsx! { MoviePreviewSkeleton {} });
        let footprint = MOVIE_CARD.footprint_style();
        assert!(footprint.contains("box-sizing: border-box;"));
        assert!(card.contains(&footprint), "{card}");
        assert!(skeleton.contains(&footprint), "{skeleton}");
    }

    #[test]
    fn skeleton_padding_and_border_stay_inside_footprint() {
        let skeleton_css = include_str!("../skeleton/style.css");
        let preview_css = include_str!("./style.css");
        let skeleton = css_rule(skeleton_css, ".skeleton");
        assert!(skeleton.contains("border: 1px"), "{skeleton}");
        assert!(skeleton.contains("box-sizing: border-box;"), "{skeleton}");
        let sized = css_rule(preview_css, ".movie-preview-skeleton");
        assert!(sized.contains("padding:"), "{sized}");
        assert!(sized.contains("box-sizing: border-box;"), "{sized}");
    }

    #[test]
    fn whole_card_box_is_the_link() {
        let preview_css = include_str!("./style.css");
        let root = css_rule(preview_css, ".movie-preview");
        assert!(!root.contains("padding"), "{root}");
        let link = css_rule(preview_css, ".movie-preview-link");
        assert!(link.contains("padding: 0.5rem;"), "{link}");
        assert!(link.contains("width: 100%;"), "{link}");
        assert!(link.contains("height: 100%;"), "{link}");
    }

    #[test]
    fn skeleton_is_textless_and_sized_like_the_card() {
        let html = dioxus_ssr::render_element(rsx! { MoviePreviewSkeleton {} });
        assert!(html.contains("movie-preview-skeleton"), "{html}");
        assert!(html.contains("width: 128px; height: 256px;"), "{html}");
        assert!(!html.contains("<a"), "{html}");
        assert!(!html.contains("onclick"), "{html}");
        let text_between_tags = html
            .split('>')
            .filter_map(|part| part.split('<').next())
            .any(|text| !text.trim().is_empty());
        assert!(!text_between_tags, "{html}");
    }

    #[test]
    fn skeleton_renders_identically_twice() {
        let first = dioxus_ssr::render_element(rsx! { MoviePreviewSkeleton {} });
        let second = dioxus_ssr::render_element(rsx! { MoviePreviewSkeleton {} });
        assert_eq!(first, second);
    }
}
