use std::fmt::Write;

use crate::layout::{PlacedBubble, Viewport};
use crate::rng::JitterRng;

pub const CONTROL_SPREAD: f64 = 60.0;
pub const JITTER_SPREAD: f64 = 10.0;
pub const JITTER_MIN_VIEWPORT_WIDTH: f64 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Quadratic curve between two bubbles, in absolute viewport coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
    pub from: usize,
    pub to: usize,
    pub start: Point,
    pub end: Point,
    pub base_control: Point,
    pub control: Point,
}

impl Connector {
    pub fn key(&self) -> String {
        format!("{}-{}", self.from, self.to)
    }

    pub fn path_data(&self) -> String {
        quad_path(self.start, self.control, self.end)
    }

    pub fn base_path_data(&self) -> String {
        quad_path(self.start, self.base_control, self.end)
    }

    /// Moves the live control point to a fresh offset around the base point.
    pub fn jitter(&mut self, rng: &mut JitterRng) {
        self.control = Point::new(
            self.base_control.x + rng.next_offset(JITTER_SPREAD),
            self.base_control.y + rng.next_offset(JITTER_SPREAD),
        );
    }
}

fn quad_path(start: Point, control: Point, end: Point) -> String {
    let mut out = String::with_capacity(64);
    let _ = write!(
        out,
        "M{},{} Q{},{} {},{}",
        start.x, start.y, control.x, control.y, end.x, end.y
    );
    out
}

/// Number of unordered bubble pairs.
pub fn connector_count(bubbles: usize) -> usize {
    bubbles * bubbles.saturating_sub(1) / 2
}

/// One connector per unordered pair `(i, j)` with `i < j`.
pub fn build_connectors(placement: &[PlacedBubble], viewport: Viewport, rng: &mut JitterRng) -> Vec<Connector> {
    let mut connectors = Vec::with_capacity(connector_count(placement.len()));
    for (i, first) in placement.iter().enumerate() {
        let (x1, y1) = first.absolute(viewport);
        for (j, second) in placement.iter().enumerate().skip(i + 1) {
            let (x2, y2) = second.absolute(viewport);
            let control = Point::new(
                (x1 + x2) * 0.5 + rng.next_offset(CONTROL_SPREAD),
                (y1 + y2) * 0.5 + rng.next_offset(CONTROL_SPREAD),
            );
            connectors.push(Connector {
                from: i,
                to: j,
                start: Point::new(x1, y1),
                end: Point::new(x2, y2),
                base_control: control,
                control,
            });
        }
    }
    connectors
}

pub fn jitter_connectors(connectors: &mut [Connector], rng: &mut JitterRng) {
    for connector in connectors {
        connector.jitter(rng);
    }
}

pub fn jitter_enabled(viewport: Viewport) -> bool {
    viewport.width >= JITTER_MIN_VIEWPORT_WIDTH
}
