pub const SCROLL_WARNING_TEXT: &str =
    "You cannot scroll while the menu is open. Click here to acknowledge.";

/// One-shot warning latch for scroll attempts made while the menu is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollGuard {
    warned: bool,
    visible: bool,
}

impl ScrollGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when this attempt made the warning appear.
    pub fn note_attempt(&mut self, menu_open: bool) -> bool {
        if !menu_open || self.warned {
            return false;
        }
        self.warned = true;
        self.visible = true;
        true
    }

    /// Hides the banner; the latch stays set.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn rearm(&mut self) {
        self.warned = false;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_latched(&self) -> bool {
        self.warned
    }
}
