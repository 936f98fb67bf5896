use dioxus::prelude::*;

/// Header row of a page: a title on the left, actions on the right.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            {children}
        }
    }
}

#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "page-title", {children} }
    }
}

/// Container for links or buttons in the page header.
#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "page-actions", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_wraps_title_and_actions() {
        let html = dioxus_ssr::render_element(rsx! {
            PageHeader {
                PageTitle { "Popular" }
                PageActions { span { "refresh" } }
            }
        });
        assert!(html.contains(r#"<h1 class="page-title">Popular</h1>"#), "{html}");
        assert!(
            html.contains(r#"<div class="page-actions"><span>refresh</span></div>"#),
            "{html}"
        );
    }
}
