use crate::scroll_guard::ScrollGuard;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Opened,
    Closed { selected: Option<usize> },
}

impl MenuEvent {
    /// Value reported to the open-state callback.
    pub fn is_open(self) -> bool {
        matches!(self, MenuEvent::Opened)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    is_open: bool,
    active_index: Option<usize>,
    scroll_guard: ScrollGuard,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Last selected bubble. Once set it is only ever replaced, never cleared.
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn scroll_warning_visible(&self) -> bool {
        self.scroll_guard.is_visible()
    }

    pub fn toggle(&mut self) -> MenuEvent {
        self.scroll_guard.rearm();
        if self.is_open {
            self.close();
            MenuEvent::Closed { selected: None }
        } else {
            self.is_open = true;
            MenuEvent::Opened
        }
    }

    /// Bubble click. Ignored while closed since no bubbles are mounted then.
    pub fn select(&mut self, index: usize) -> Option<MenuEvent> {
        if !self.is_open {
            return None;
        }
        self.active_index = Some(index);
        self.close();
        Some(MenuEvent::Closed {
            selected: Some(index),
        })
    }

    pub fn note_scroll_attempt(&mut self) -> bool {
        self.scroll_guard.note_attempt(self.is_open)
    }

    pub fn dismiss_scroll_warning(&mut self) {
        self.scroll_guard.dismiss();
    }

    fn close(&mut self) {
        self.is_open = false;
        self.scroll_guard.hide();
    }
}
