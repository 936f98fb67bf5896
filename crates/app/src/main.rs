use dioxus::prelude::*;
use shared_types::AppConfig;
use shared_ui::MotionProvider;

mod catalog;
mod config;
mod routes;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let config: AppConfig = use_hook(|| config::load_config().clone());
    let reduced_motion = config.features.reduced_motion;
    use_context_provider(|| config);

    use_hook(|| tracing::info!(platform = client_platform(), reduced_motion, "starting"));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        MotionProvider { reduced: reduced_motion,
            Router::<Route> {}
        }
    }
}
