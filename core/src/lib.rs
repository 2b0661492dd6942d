pub mod config;
pub mod connector;
pub mod easing;
pub mod item;
pub mod layout;
pub mod menu;
pub mod rng;
pub mod scroll_guard;
pub mod tween;

pub use config::{secs_to_ms, ConfigError, MenuConfig, DEFAULT_ARIA_LABEL};
pub use connector::{
    build_connectors, connector_count, jitter_connectors, jitter_enabled, Connector, Point,
    JITTER_MIN_VIEWPORT_WIDTH,
};
pub use easing::{Curve, Ease, EaseDirection, EaseParseError};
pub use item::{border_color_for, default_menu_items, resolve_items, MenuItem, ACCENT_HEX};
pub use layout::{compute_positions, BubblePosition, PlacedBubble, Placement, Viewport};
pub use menu::{MenuEvent, MenuState};
pub use rng::JitterRng;
pub use scroll_guard::{ScrollGuard, SCROLL_WARNING_TEXT};
pub use tween::{play_entrance, play_exit, BubbleStyle, Timeline, TweenSpec, HIDDEN_SCALE};
