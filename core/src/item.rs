use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub href: String,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct DefaultItemEntry {
    pub label: &'static str,
    pub href: &'static str,
}

pub const DEFAULT_MENU_ITEMS: &[DefaultItemEntry] = &[
    DefaultItemEntry {
        label: "About",
        href: "#about",
    },
    DefaultItemEntry {
        label: "Experience",
        href: "#work-experience",
    },
    DefaultItemEntry {
        label: "Contact",
        href: "#contact",
    },
    DefaultItemEntry {
        label: "Projects",
        href: "#projects",
    },
    DefaultItemEntry {
        label: "Feedbacks",
        href: "#testimonials",
    },
];

pub const ACCENT_HEX: &str = "#16a34a";

/// Border tints keyed by label; labels not listed here use the accent.
pub const BORDER_PALETTE: &[(&str, &str)] = &[
    ("About", "#16a34a"),
    ("Work", "#4ade80"),
    ("Contact", "#12b886"),
    ("Experience", "#22c55e"),
    ("Projects", "#16a34a"),
    ("Feedbacks", "#4ade80"),
];

pub fn default_menu_items() -> Vec<MenuItem> {
    DEFAULT_MENU_ITEMS
        .iter()
        .map(|entry| MenuItem::new(entry.label, entry.href))
        .collect()
}

/// Returns the caller's items, or the defaults when the list is absent or empty.
pub fn resolve_items(items: Option<&[MenuItem]>) -> Vec<MenuItem> {
    match items {
        Some(items) if !items.is_empty() => items.to_vec(),
        _ => default_menu_items(),
    }
}

pub fn border_color_for(label: &str) -> Option<&'static str> {
    BORDER_PALETTE
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, color)| *color)
}
