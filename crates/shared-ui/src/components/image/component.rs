use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaImage;
use dioxus_free_icons::Icon;

/// The source that last failed to load, if any.
///
/// Only that exact source shows the fallback; any other source is tried.
#[derive(Debug, Clone, Default, PartialEq)]
struct FailedSource(Option<String>);

impl FailedSource {
    fn record(&mut self, src: &str) {
        self.0 = Some(src.to_string());
    }

    fn covers(&self, src: &str) -> bool {
        self.0.as_deref() == Some(src)
    }
}

/// An image that swaps to a placeholder when its source fails to load.
///
/// `width` and `height` are the intrinsic size used to reserve layout before
/// the image decodes. The source URL is always used as given; `unoptimized`
/// additionally turns off the lazy-load and async-decode hints so the image is
/// fetched eagerly.
///
/// The failure flag remembers which source failed, so handing the element a
/// new `src` retries the load instead of sticking on the placeholder.
#[component]
pub fn ImageWithFallback(
    src: String,
    alt: String,
    width: u32,
    height: u32,
    #[props(default)] unoptimized: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut failed_src = use_signal(FailedSource::default);
    let failed = failed_src.read().covers(&src);

    let base = vec![Attribute::new("class", "image", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let loading = if unoptimized { "eager" } else { "lazy" };
    let decoding = if unoptimized { "auto" } else { "async" };
    let src_on_error = src.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if failed {
            ImageFallback { src: src.clone(), alt: alt.clone() }
        } else {
            img {
                src: "{src}",
                alt: "{alt}",
                width: "{width}",
                height: "{height}",
                "loading": loading,
                "decoding": decoding,
                onerror: move |_| failed_src.write().record(&src_on_error),
                ..merged,
            }
        }
    }
}

/// Placeholder standing in for an image whose source failed. Keeps the alt
/// text as its accessible label.
#[component]
pub fn ImageFallback(src: String, alt: String) -> Element {
    rsx! {
        div {
            class: "image-fallback",
            role: "img",
            aria_label: "{alt}",
            "data-failed-src": "{src}",
            Icon::<FaImage> { icon: FaImage, width: 32, height: 32 }
        }
    }
}
