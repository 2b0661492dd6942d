use std::cell::Cell;

use bubble_menu_core::Viewport;

thread_local! {
    static NEXT_INSTANCE_ID: Cell<u32> = Cell::new(0);
}

pub(crate) fn current_viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::new(0.0, 0.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width, height)
}

pub(crate) fn fresh_seed() -> u32 {
    (js_sys::Math::random() * f64::from(u32::MAX)) as u32
}

pub(crate) fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Per-thread counter so every mounted menu gets its own filter id.
pub(crate) fn next_instance_id() -> u32 {
    NEXT_INSTANCE_ID.with(|next| {
        let id = next.get();
        next.set(id.wrapping_add(1));
        id
    })
}

pub(crate) fn filter_id(instance: u32) -> String {
    format!("electric-filter-{instance}")
}
