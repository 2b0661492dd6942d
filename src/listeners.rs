use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};

const SCROLL_SIGNALS: [&str; 2] = ["wheel", "touchmove"];

/// Passive window listeners for scroll attempts. Dropping the returned
/// listeners detaches them.
pub(crate) fn watch_scroll_attempts(on_attempt: Rc<dyn Fn()>) -> Vec<EventListener> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    SCROLL_SIGNALS
        .iter()
        .map(|signal| {
            let on_attempt = on_attempt.clone();
            EventListener::new_with_options(
                &window,
                *signal,
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: true,
                },
                move |_event| on_attempt(),
            )
        })
        .collect()
}

pub(crate) fn watch_resize(on_resize: impl Fn() + 'static) -> Option<EventListener> {
    let window = web_sys::window()?;
    Some(EventListener::new(&window, "resize", move |_event| on_resize()))
}
