use web_sys::HtmlElement;

/// Holds the page scroll disabled until dropped.
///
/// The body's previous `overflow` value is restored on drop, so a menu
/// unmounted while open still gives scrolling back.
pub(crate) struct ScrollLock {
    body: HtmlElement,
    previous: String,
}

impl ScrollLock {
    pub(crate) fn acquire() -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        if let Err(err) = style.set_property("overflow", "hidden") {
            gloo::console::warn!("scroll lock failed", err);
            return None;
        }
        Some(Self { body, previous })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        let _ = if self.previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &self.previous)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body_overflow() -> String {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
            .expect("body available")
            .style()
            .get_property_value("overflow")
            .expect("read overflow")
    }

    #[wasm_bindgen_test]
    fn lock_sets_and_restores_overflow() {
        let before = body_overflow();
        let lock = ScrollLock::acquire().expect("lock acquired");
        assert_eq!(body_overflow(), "hidden");
        drop(lock);
        assert_eq!(body_overflow(), before);
    }

    #[wasm_bindgen_test]
    fn lock_restores_custom_value() {
        let body = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
            .expect("body available");
        body.style()
            .set_property("overflow", "auto")
            .expect("set overflow");
        {
            let _lock = ScrollLock::acquire().expect("lock acquired");
            assert_eq!(body_overflow(), "hidden");
        }
        assert_eq!(body_overflow(), "auto");
        let _ = body.style().remove_property("overflow");
    }
}
