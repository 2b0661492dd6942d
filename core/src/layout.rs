use std::f64::consts::TAU;

use crate::item::MenuItem;
use crate::rng::JitterRng;

pub const BUBBLE_DIAMETER: f64 = 56.0;
pub const BUBBLE_PADDING: f64 = 16.0;
pub const RADIAL_JITTER_MIN: f64 = 0.75;
pub const RADIAL_JITTER_MAX: f64 = 1.25;
pub const SCALE_BASE: f64 = 0.5;
pub const SCALE_PER_JITTER: f64 = 0.8;
pub const SCALE_MIN: f64 = 0.5;
pub const SCALE_MAX: f64 = 1.3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Non-finite or negative dimensions collapse to zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize_dimension(width),
            height: sanitize_dimension(height),
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width * 0.5, self.height * 0.5)
    }

    pub fn radius(&self) -> f64 {
        let (center_x, center_y) = self.center();
        (center_x.min(center_y) - BUBBLE_DIAMETER - BUBBLE_PADDING).max(0.0)
    }
}

fn sanitize_dimension(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Offset from the viewport center plus the resting scale of one bubble.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubblePosition {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl BubblePosition {
    pub fn distance_from_center(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlacedBubble {
    pub item: MenuItem,
    pub position: BubblePosition,
}

impl PlacedBubble {
    pub fn absolute(&self, viewport: Viewport) -> (f64, f64) {
        let (center_x, center_y) = viewport.center();
        (center_x + self.position.x, center_y + self.position.y)
    }
}

pub type Placement = Vec<PlacedBubble>;

/// Lays items out evenly around the viewport center, each pushed in or out
/// by its own random factor which also sets its scale.
pub fn compute_positions(items: &[MenuItem], viewport: Viewport, rng: &mut JitterRng) -> Placement {
    let count = items.len();
    let radius = viewport.radius();
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let angle = (index as f64 / count as f64) * TAU;
            let z = rng.next_range(RADIAL_JITTER_MIN, RADIAL_JITTER_MAX);
            let (sin, cos) = angle.sin_cos();
            PlacedBubble {
                item: item.clone(),
                position: BubblePosition {
                    x: cos * radius * z,
                    y: sin * radius * z,
                    scale: (SCALE_BASE + z * SCALE_PER_JITTER).clamp(SCALE_MIN, SCALE_MAX),
                },
            }
        })
        .collect()
}
