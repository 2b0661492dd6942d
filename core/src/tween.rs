use crate::easing::Ease;
use crate::layout::PlacedBubble;

pub const HIDDEN_SCALE: f64 = 0.3;
pub const EXIT_DURATION_MS: f64 = 250.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleStyle {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl BubbleStyle {
    pub fn hidden_at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            scale: HIDDEN_SCALE,
            opacity: 0.0,
        }
    }

    pub fn lerp(&self, target: &BubbleStyle, t: f64) -> BubbleStyle {
        BubbleStyle {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
            scale: self.scale + (target.scale - self.scale) * t,
            opacity: self.opacity + (target.opacity - self.opacity) * t,
        }
    }

    /// CSS transform placing a center-anchored element at this offset.
    pub fn css_transform(&self) -> String {
        format!(
            "translate(-50%, -50%) translate({:.3}px, {:.3}px) scale({:.4})",
            self.x, self.y, self.scale
        )
    }

    /// Overshooting eases can push opacity past its bounds mid-tween.
    pub fn css_opacity(&self) -> String {
        format!("{:.4}", self.opacity.clamp(0.0, 1.0))
    }
}

impl Default for BubbleStyle {
    fn default() -> Self {
        Self::hidden_at(0.0, 0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSpec {
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub ease: Ease,
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: BubbleStyle,
    to: BubbleStyle,
    start_ms: f64,
    duration_ms: f64,
    ease: Ease,
}

impl Tween {
    fn progress(&self, now_ms: f64) -> f64 {
        if now_ms <= self.start_ms {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).min(1.0)
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Track {
    current: BubbleStyle,
    tween: Option<Tween>,
}

/// Per-bubble tween slots. Each slot runs at most one tween; starting a new
/// one replaces whatever was in flight.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    tracks: Vec<Track>,
}

impl Timeline {
    pub fn new(len: usize) -> Self {
        Self {
            tracks: vec![Track::default(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Grows or shrinks the slot list; surviving slots keep their state.
    pub fn resize(&mut self, len: usize) {
        self.tracks.resize(len, Track::default());
    }

    pub fn kill(&mut self, index: usize) {
        if let Some(track) = self.tracks.get_mut(index) {
            track.tween = None;
        }
    }

    pub fn kill_all(&mut self) {
        for track in &mut self.tracks {
            track.tween = None;
        }
    }

    pub fn set(&mut self, index: usize, style: BubbleStyle) {
        if let Some(track) = self.tracks.get_mut(index) {
            track.tween = None;
            track.current = style;
        }
    }

    pub fn to(&mut self, index: usize, target: BubbleStyle, spec: TweenSpec, now_ms: f64) {
        let Some(track) = self.tracks.get_mut(index) else {
            return;
        };
        track.tween = Some(Tween {
            from: track.current,
            to: target,
            start_ms: now_ms + finite_ms(spec.delay_ms),
            duration_ms: finite_ms(spec.duration_ms),
            ease: spec.ease,
        });
    }

    /// Advances every slot to `now_ms`. Returns `true` while any tween is
    /// still pending or running.
    pub fn sample(&mut self, now_ms: f64) -> bool {
        let mut running = false;
        for track in &mut self.tracks {
            let Some(tween) = track.tween else {
                continue;
            };
            let t = tween.progress(now_ms);
            if now_ms < tween.start_ms {
                running = true;
                continue;
            }
            track.current = tween.from.lerp(&tween.to, tween.ease.apply(t));
            if t >= 1.0 {
                track.current = tween.to;
                track.tween = None;
            } else {
                running = true;
            }
        }
        running
    }

    pub fn style(&self, index: usize) -> Option<BubbleStyle> {
        self.tracks.get(index).map(|track| track.current)
    }

    pub fn styles(&self) -> impl Iterator<Item = BubbleStyle> + '_ {
        self.tracks.iter().map(|track| track.current)
    }

    pub fn is_animating(&self) -> bool {
        self.tracks.iter().any(|track| track.tween.is_some())
    }
}

/// Non-finite or negative times collapse to zero so a tween always ends.
fn finite_ms(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Entrance: every bubble snaps to its slot hidden, then grows in with a
/// per-index delay.
pub fn play_entrance(
    timeline: &mut Timeline,
    placement: &[PlacedBubble],
    ease: Ease,
    duration_ms: f64,
    stagger_ms: f64,
    now_ms: f64,
) {
    timeline.resize(placement.len());
    for (index, bubble) in placement.iter().enumerate() {
        let position = bubble.position;
        timeline.kill(index);
        timeline.set(index, BubbleStyle::hidden_at(position.x, position.y));
        timeline.to(
            index,
            BubbleStyle {
                x: position.x,
                y: position.y,
                scale: position.scale,
                opacity: 1.0,
            },
            TweenSpec {
                delay_ms: index as f64 * stagger_ms,
                duration_ms,
                ease,
            },
            now_ms,
        );
    }
}

/// Exit: every bubble shrinks back out together.
pub fn play_exit(timeline: &mut Timeline, placement: &[PlacedBubble], now_ms: f64) {
    timeline.resize(placement.len());
    for (index, bubble) in placement.iter().enumerate() {
        let position = bubble.position;
        timeline.to(
            index,
            BubbleStyle::hidden_at(position.x, position.y),
            TweenSpec {
                delay_ms: 0.0,
                duration_ms: EXIT_DURATION_MS,
                ease: Ease::exit_default(),
            },
            now_ms,
        );
    }
}
