use bubble_menu_core::{MenuEvent, MenuState};

#[test]
fn toggle_twice_returns_to_closed() {
    let mut state = MenuState::new();
    assert!(!state.is_open());
    assert_eq!(state.toggle(), MenuEvent::Opened);
    assert!(state.is_open());
    assert_eq!(state.toggle(), MenuEvent::Closed { selected: None });
    assert!(!state.is_open());
}

#[test]
fn callback_value_follows_transition() {
    let mut state = MenuState::new();
    assert!(state.toggle().is_open());
    assert!(!state.toggle().is_open());
    state.toggle();
    let event = state.select(2).expect("open menu accepts a selection");
    assert!(!event.is_open());
}

#[test]
fn select_marks_active_and_closes() {
    let mut state = MenuState::new();
    state.toggle();
    assert_eq!(state.select(3), Some(MenuEvent::Closed { selected: Some(3) }));
    assert!(!state.is_open());
    assert_eq!(state.active_index(), Some(3));
}

#[test]
fn active_index_is_sticky() {
    let mut state = MenuState::new();
    state.toggle();
    state.select(1);
    state.toggle();
    state.toggle();
    assert_eq!(state.active_index(), Some(1));
    state.toggle();
    state.select(4);
    assert_eq!(state.active_index(), Some(4));
}

#[test]
fn select_while_closed_is_ignored() {
    let mut state = MenuState::new();
    assert_eq!(state.select(0), None);
    assert_eq!(state.active_index(), None);
    assert!(!state.is_open());
}

#[test]
fn scroll_warning_shows_once_per_open_session() {
    let mut state = MenuState::new();
    assert!(!state.note_scroll_attempt(), "closed menu never warns");
    state.toggle();
    assert!(state.note_scroll_attempt());
    assert!(state.scroll_warning_visible());
    state.dismiss_scroll_warning();
    assert!(!state.note_scroll_attempt());
    assert!(!state.scroll_warning_visible());
}

#[test]
fn dismiss_keeps_menu_open() {
    let mut state = MenuState::new();
    state.toggle();
    state.note_scroll_attempt();
    state.dismiss_scroll_warning();
    assert!(state.is_open());
    assert!(!state.scroll_warning_visible());
}

#[test]
fn scroll_warning_rearms_after_reopen() {
    let mut state = MenuState::new();
    state.toggle();
    assert!(state.note_scroll_attempt());
    state.toggle();
    assert!(!state.scroll_warning_visible(), "closing hides the banner");
    state.toggle();
    assert!(state.note_scroll_attempt());
    assert!(state.scroll_warning_visible());
}

#[test]
fn selection_hides_scroll_warning() {
    let mut state = MenuState::new();
    state.toggle();
    state.note_scroll_attempt();
    state.select(0);
    assert!(!state.scroll_warning_visible());
    state.toggle();
    assert!(state.note_scroll_attempt());
}
