use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls to the element matched by `href` used as a selector.
/// Returns `false` when nothing matched, including invalid selectors.
pub(crate) fn scroll_to_anchor(href: &str) -> bool {
    let selector = href.trim();
    if selector.is_empty() {
        return false;
    }
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    let Ok(Some(element)) = document.query_selector(selector) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn missing_and_invalid_targets_are_skipped() {
        assert!(!scroll_to_anchor("#definitely-not-on-this-page"));
        assert!(!scroll_to_anchor("##broken"));
        assert!(!scroll_to_anchor("   "));
    }

    #[wasm_bindgen_test]
    fn existing_target_is_found() {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let target = document.create_element("section").expect("create section");
        target.set_id("anchor-test-target");
        document
            .body()
            .expect("body available")
            .append_child(&target)
            .expect("append section");
        assert!(scroll_to_anchor("#anchor-test-target"));
        target.remove();
    }
}
