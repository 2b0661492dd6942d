mod anchor;
mod animation;
mod bubble_menu;
mod line_jitter;
mod listeners;
pub mod menu_config;
mod scroll_lock;
mod viewport;

pub use bubble_menu::{BubbleMenu, BubbleMenuProps};
pub use bubble_menu_core::{MenuConfig, MenuItem};
