use std::fmt;

use serde::{Deserialize, Serialize};

use crate::easing::{Ease, EaseParseError, DEFAULT_ENTRANCE_EASE};
use crate::item::{resolve_items, MenuItem, ACCENT_HEX};

pub const DEFAULT_ARIA_LABEL: &str = "Toggle menu";
pub const DEFAULT_ANIMATION_DURATION_SECS: f64 = 0.65;
pub const DEFAULT_STAGGER_DELAY_SECS: f64 = 0.08;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuConfig {
    pub items: Vec<MenuItem>,
    pub menu_aria_label: String,
    pub menu_content_color: String,
    pub use_fixed_position: bool,
    pub animation_ease: String,
    pub animation_duration: f64,
    pub stagger_delay: f64,
    pub class_name: Option<String>,
    pub style: Option<String>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            menu_aria_label: DEFAULT_ARIA_LABEL.to_string(),
            menu_content_color: ACCENT_HEX.to_string(),
            use_fixed_position: true,
            animation_ease: DEFAULT_ENTRANCE_EASE.to_string(),
            animation_duration: DEFAULT_ANIMATION_DURATION_SECS,
            stagger_delay: DEFAULT_STAGGER_DELAY_SECS,
            class_name: None,
            style: None,
        }
    }
}

impl MenuConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    pub fn resolved_items(&self) -> Vec<MenuItem> {
        resolve_items(Some(&self.items))
    }

    pub fn ease(&self) -> Result<Ease, ConfigError> {
        self.animation_ease.parse().map_err(ConfigError::Ease)
    }

    /// Reports the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ease()?;
        check_seconds("animationDuration", self.animation_duration)?;
        check_seconds("staggerDelay", self.stagger_delay)?;
        Ok(())
    }

    /// Replaces every invalid field with its default and returns the errors
    /// that were repaired.
    pub fn sanitized(mut self) -> (Self, Vec<ConfigError>) {
        let defaults = Self::default();
        let mut repaired = Vec::new();
        if let Err(err) = self.ease() {
            repaired.push(err);
            self.animation_ease = defaults.animation_ease;
        }
        if let Err(err) = check_seconds("animationDuration", self.animation_duration) {
            repaired.push(err);
            self.animation_duration = defaults.animation_duration;
        }
        if let Err(err) = check_seconds("staggerDelay", self.stagger_delay) {
            repaired.push(err);
            self.stagger_delay = defaults.stagger_delay;
        }
        (self, repaired)
    }
}

/// Accepts finite, non-negative second counts.
pub fn check_seconds(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSeconds { field, value })
    }
}

pub fn secs_to_ms(value: f64) -> f64 {
    value * 1000.0
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    Ease(EaseParseError),
    InvalidSeconds { field: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(message) => write!(f, "menu config is not valid json: {message}"),
            ConfigError::Ease(err) => write!(f, "animationEase: {err}"),
            ConfigError::InvalidSeconds { field, value } => {
                write!(f, "{field} must be a non-negative number of seconds, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Ease(err) => Some(err),
            _ => None,
        }
    }
}
