use dioxus::prelude::*;
use shared_types::TransitionKey;

/// Whether shared-element transitions and hover motion are enabled.
///
/// Provided once near the root; components that find no provider run with
/// full motion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionPreference {
    pub reduced: bool,
}

impl MotionPreference {
    /// Value for a `data-motion` attribute.
    pub fn as_str(&self) -> &'static str {
        if self.reduced {
            "reduced"
        } else {
            "full"
        }
    }
}

/// Read the nearest [`MotionPreference`], defaulting to full motion.
pub fn use_motion_preference() -> MotionPreference {
    try_use_context::<MotionPreference>().unwrap_or_default()
}

/// Provide a [`MotionPreference`] to every descendant.
#[component]
pub fn MotionProvider(#[props(default)] reduced: bool, children: Element) -> Element {
    use_context_provider(|| MotionPreference { reduced });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        {children}
    }
}

fn layout_attributes(layout_id: &TransitionKey, motion: MotionPreference) -> Vec<Attribute> {
    let mut base = vec![Attribute::new(
        "data-layout-id",
        layout_id.to_string(),
        None,
        false,
    )];
    if !motion.reduced {
        base.push(Attribute::new(
            "style",
            format!("view-transition-name: {};", layout_id.view_transition_name()),
            None,
            false,
        ));
    }
    base
}

/// Block container whose layout is interpolated with any other element
/// rendered under the same `layout_id` on the next page.
#[component]
pub fn MotionDiv(
    layout_id: TransitionKey,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let motion = use_motion_preference();
    let base = layout_attributes(&layout_id, motion);
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Paragraph variant of [`MotionDiv`], used for titles.
#[component]
pub fn MotionText(
    layout_id: TransitionKey,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let motion = use_motion_preference();
    let base = layout_attributes(&layout_id, motion);
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        p {
            ..merged,
            {children}
        }
    }
}
