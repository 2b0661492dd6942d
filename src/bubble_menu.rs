use std::cell::RefCell;
use std::rc::Rc;

use bubble_menu_core::config::{
    check_seconds, DEFAULT_ANIMATION_DURATION_SECS, DEFAULT_STAGGER_DELAY_SECS,
};
use bubble_menu_core::easing::DEFAULT_ENTRANCE_EASE;
use bubble_menu_core::{
    border_color_for, build_connectors, compute_positions, jitter_enabled, resolve_items,
    BubbleStyle, Connector, Ease, JitterRng, MenuItem, MenuState, ACCENT_HEX, DEFAULT_ARIA_LABEL,
    SCROLL_WARNING_TEXT,
};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::anchor::scroll_to_anchor;
use crate::animation::{AnimationDriver, EntranceSpec};
use crate::line_jitter::LineJitter;
use crate::listeners::{watch_resize, watch_scroll_attempts};
use crate::scroll_lock::ScrollLock;
use crate::viewport::{current_viewport, filter_id, fresh_seed, next_instance_id};

#[derive(Properties, PartialEq, Clone)]
pub struct BubbleMenuProps {
    /// Navigation targets; an empty list falls back to the built-in five.
    #[prop_or_default]
    pub items: Vec<MenuItem>,
    /// Called with the new open state on every open and close.
    #[prop_or_default]
    pub on_menu_click: Option<Callback<bool>>,
    #[prop_or(AttrValue::Static(DEFAULT_ARIA_LABEL))]
    pub menu_aria_label: AttrValue,
    /// Tint of the glow inside each bubble.
    #[prop_or(AttrValue::Static(ACCENT_HEX))]
    pub menu_content_color: AttrValue,
    #[prop_or(true)]
    pub use_fixed_position: bool,
    #[prop_or(AttrValue::Static(DEFAULT_ENTRANCE_EASE))]
    pub animation_ease: AttrValue,
    /// Seconds.
    #[prop_or(DEFAULT_ANIMATION_DURATION_SECS)]
    pub animation_duration: f64,
    /// Seconds between consecutive bubble entrances.
    #[prop_or(DEFAULT_STAGGER_DELAY_SECS)]
    pub stagger_delay: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
}

#[derive(Clone)]
struct MenuStore {
    state: UseStateHandle<MenuState>,
    live: Rc<RefCell<MenuState>>,
}

impl MenuStore {
    fn new(state: UseStateHandle<MenuState>, live: Rc<RefCell<MenuState>>) -> Self {
        Self { state, live }
    }

    /// Applies `update` to the live state and re-renders only on change.
    fn update<R>(&self, update: impl FnOnce(&mut MenuState) -> R) -> R {
        let (result, before, after) = {
            let mut live = self.live.borrow_mut();
            let before = *live;
            let result = update(&mut live);
            (result, before, *live)
        };
        if before != after {
            self.state.set(after);
        }
        result
    }
}

#[function_component(BubbleMenu)]
pub fn bubble_menu(props: &BubbleMenuProps) -> Html {
    let items = use_memo(props.items.clone(), |items| resolve_items(Some(items)));
    let menu_state = use_state(MenuState::new);
    let menu_live = use_mut_ref(MenuState::new);
    let menu = MenuStore::new(menu_state.clone(), menu_live);
    let state = *menu_state;
    let is_open = state.is_open();

    let viewport = use_state_eq(current_viewport);
    {
        let viewport = viewport.clone();
        use_effect_with((), move |_| {
            let listener = watch_resize(move || viewport.set(current_viewport()));
            move || drop(listener)
        });
    }
    let viewport_value = *viewport;
    let placement = use_memo((items.clone(), viewport_value), |(items, viewport)| {
        compute_positions(items, *viewport, &mut JitterRng::new(fresh_seed()))
    });

    let ease = use_memo(props.animation_ease.clone(), |raw| match raw.parse::<Ease>() {
        Ok(ease) => ease,
        Err(err) => {
            gloo::console::warn!("bubble menu ease", err.to_string());
            Ease::entrance_default()
        }
    });
    let timing = use_memo(
        (props.animation_duration, props.stagger_delay),
        |(duration, stagger)| {
            (
                seconds_or_default("animationDuration", *duration, DEFAULT_ANIMATION_DURATION_SECS),
                seconds_or_default("staggerDelay", *stagger, DEFAULT_STAGGER_DELAY_SECS),
            )
        },
    );
    let entrance = EntranceSpec {
        ease: *ease,
        duration_secs: timing.0,
        stagger_secs: timing.1,
    };

    let bubble_refs = use_memo(placement.len(), |len| {
        (0..*len).map(|_| NodeRef::default()).collect::<Vec<_>>()
    });
    let connectors = use_state(|| Rc::new(Vec::<Connector>::new()));
    let path_refs = use_memo(connectors.len(), |len| {
        (0..*len).map(|_| NodeRef::default()).collect::<Vec<_>>()
    });
    let filter = use_memo((), |_| filter_id(next_instance_id()));

    let driver = use_memo((), |_| AnimationDriver::new());
    driver.set_targets(&bubble_refs);
    {
        let driver = driver.clone();
        use_effect_with((), move |_| move || driver.stop());
    }

    {
        let driver = driver.clone();
        let connectors = connectors.clone();
        let last_open = use_mut_ref(|| false);
        use_effect_with((is_open, placement.clone()), move |(is_open, placement)| {
            let was_open = std::mem::replace(&mut *last_open.borrow_mut(), *is_open);
            if *is_open {
                let mut rng = JitterRng::new(fresh_seed());
                connectors.set(Rc::new(build_connectors(placement, viewport_value, &mut rng)));
                if was_open {
                    driver.settle(placement);
                } else {
                    driver.play_entrance(placement, entrance);
                }
            } else if was_open {
                driver.play_exit(placement);
                connectors.set(Rc::new(Vec::new()));
            }
            || ()
        });
    }

    {
        let path_refs = path_refs.clone();
        use_effect_with(
            (is_open, (*connectors).clone(), viewport_value),
            move |(is_open, connectors, viewport)| {
                let task = (*is_open && jitter_enabled(*viewport) && !connectors.is_empty())
                    .then(|| LineJitter::start_on_refs(&connectors[..], &path_refs, fresh_seed()));
                move || drop(task)
            },
        );
    }

    use_effect_with(is_open, |is_open| {
        let lock = if *is_open { ScrollLock::acquire() } else { None };
        move || drop(lock)
    });

    {
        let menu = menu.clone();
        use_effect_with(is_open, move |is_open| {
            let listeners = if *is_open {
                watch_scroll_attempts(Rc::new(move || {
                    if menu.update(MenuState::note_scroll_attempt) {
                        gloo::console::log!("bubble menu", "scroll blocked while open");
                    }
                }))
            } else {
                Vec::new()
            };
            move || drop(listeners)
        });
    }

    let on_toggle = {
        let menu = menu.clone();
        let on_menu_click = props.on_menu_click.clone();
        Callback::from(move |_: MouseEvent| {
            let event = menu.update(MenuState::toggle);
            gloo::console::log!("bubble menu", if event.is_open() { "open" } else { "closed" });
            if let Some(callback) = on_menu_click.as_ref() {
                callback.emit(event.is_open());
            }
        })
    };

    let on_select = {
        let menu = menu.clone();
        let on_menu_click = props.on_menu_click.clone();
        Callback::from(move |(index, href): (usize, String)| {
            let Some(event) = menu.update(|state| state.select(index)) else {
                return;
            };
            gloo::console::log!("bubble menu", format!("selected {index} {href}"));
            if let Some(callback) = on_menu_click.as_ref() {
                callback.emit(event.is_open());
            }
            // Runs after the scroll lock is released by the close render.
            Timeout::new(0, move || {
                scroll_to_anchor(&href);
            })
            .forget();
        })
    };

    let on_dismiss_warning = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.update(MenuState::dismiss_scroll_warning))
    };

    let nav_class = classes!(
        "bubble-menu",
        if props.use_fixed_position { "fixed" } else { "relative" },
        props.class.clone()
    );
    let mut nav_style = format!(
        "position: {}; top: 1.5rem; right: 1.5rem; display: flex; align-items: center; \
         justify-content: flex-end; pointer-events: none; z-index: 1001;",
        if props.use_fixed_position { "fixed" } else { "relative" }
    );
    if let Some(extra) = props.style.as_deref() {
        nav_style.push(' ');
        nav_style.push_str(extra);
    }

    let toggle = html! {
        <button
            type="button"
            class="bubble-menu__toggle"
            onclick={on_toggle}
            aria-label={props.menu_aria_label.clone()}
            aria-pressed={if is_open { "true" } else { "false" }}
            style={TOGGLE_STYLE}
        >
            <span class="bubble-menu__toggle-glow" style={toggle_glow_style(is_open)} />
            <span class="bubble-menu__bar" style={bar_style(is_open, BarSide::Top)} />
            <span class="bubble-menu__bar" style={bar_style(is_open, BarSide::Bottom)} />
        </button>
    };

    let overlay = if is_open {
        let content_color = props.menu_content_color.to_string();
        let lines = connectors.iter().enumerate().map(|(index, connector)| {
            html! {
                <path
                    key={connector.key()}
                    ref={path_refs.get(index).cloned().unwrap_or_default()}
                    d={connector.path_data()}
                    data-original={connector.base_path_data()}
                    stroke={ACCENT_HEX}
                    stroke-width="2"
                    fill="none"
                    stroke-opacity="0.8"
                    style={format!("filter: url(#{})", filter.as_str())}
                />
            }
        });
        let bubbles = placement.iter().enumerate().map(|(index, bubble)| {
            let active = state.active_index() == Some(index);
            let onclick = {
                let on_select = on_select.clone();
                let href = bubble.item.href.clone();
                Callback::from(move |_: MouseEvent| on_select.emit((index, href.clone())))
            };
            let rest = BubbleStyle::hidden_at(bubble.position.x, bubble.position.y);
            let wrapper_style = format!(
                "position: absolute; left: 50%; top: 50%; display: flex; flex-direction: column; \
                 align-items: center; gap: 0.5rem; pointer-events: auto; z-index: 1100; \
                 transform: {}; opacity: {};",
                rest.css_transform(),
                rest.css_opacity()
            );
            html! {
                <div
                    key={index}
                    ref={bubble_refs.get(index).cloned().unwrap_or_default()}
                    class="bubble-menu__bubble"
                    style={wrapper_style}
                >
                    <button
                        type="button"
                        class={classes!("bubble-menu__bubble-button", active.then_some("active"))}
                        aria-label={bubble.item.label.clone()}
                        style={bubble_button_style(&bubble.item.label, active, &content_color)}
                        {onclick}
                    >
                        <span class="bubble-menu__pulse" style={pulse_style(active)} />
                        <span class="bubble-menu__dot" style={dot_style(&content_color)} />
                    </button>
                    <span class="bubble-menu__label" style={LABEL_STYLE}>
                        { bubble.item.label.clone() }
                    </span>
                </div>
            }
        });
        let warning = if state.scroll_warning_visible() {
            html! {
                <div class="bubble-menu__warning" role="alert" style={WARNING_STYLE}>
                    <p style={WARNING_TEXT_STYLE} onclick={on_dismiss_warning}>
                        { SCROLL_WARNING_TEXT }
                    </p>
                </div>
            }
        } else {
            html! {}
        };
        html! {
            <div class="bubble-menu__overlay" style={OVERLAY_STYLE}>
                <svg class="bubble-menu__filters" style="position: absolute; width: 0; height: 0;">
                    <defs>
                        <filter
                            id={filter.as_str().to_string()}
                            color-interpolation-filters="sRGB"
                            x="-50%"
                            y="-50%"
                            width="200%"
                            height="200%"
                        >
                            <@{"feTurbulence"}
                                type="turbulence"
                                baseFrequency="0.02"
                                numOctaves="3"
                                result="turb"
                            />
                            <@{"feDisplacementMap"}
                                in="SourceGraphic"
                                in2="turb"
                                scale="20"
                                xChannelSelector="R"
                                yChannelSelector="B"
                            />
                        </filter>
                    </defs>
                </svg>
                <svg class="bubble-menu__lines" style={LINES_STYLE}>
                    { for lines }
                </svg>
                <div class="bubble-menu__bubbles" style={BUBBLES_STYLE}>
                    { for bubbles }
                </div>
                { warning }
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <>
            <nav class={nav_class} style={nav_style}>
                { toggle }
            </nav>
            { overlay }
        </>
    }
}

const TOGGLE_STYLE: &str = "position: relative; display: inline-flex; flex-direction: column; \
    align-items: center; justify-content: center; pointer-events: auto; width: 2.75rem; \
    height: 2.75rem; border-radius: 9999px; backdrop-filter: blur(12px); \
    background: rgba(255,255,255,0.05); border: 1px solid rgba(22,163,74,0.45); \
    box-shadow: 0 0 12px rgba(22,163,74,0.55), inset 0 0 10px rgba(22,163,74,0.18); \
    transition: all 0.3s; cursor: pointer;";
const OVERLAY_STYLE: &str = "position: fixed; inset: 0; z-index: 1000; display: flex; \
    justify-content: center; align-items: center; pointer-events: auto; \
    backdrop-filter: blur(12px); background-color: rgba(0,0,0,0.5);";
const LINES_STYLE: &str = "position: absolute; inset: 0; width: 100%; height: 100%; \
    z-index: 1001; pointer-events: none;";
const BUBBLES_STYLE: &str = "position: absolute; inset: 0; display: flex; \
    justify-content: center; align-items: center; pointer-events: none;";
const LABEL_STYLE: &str = "font-size: 0.75rem; color: #4ade80; letter-spacing: 0.025em;";
const WARNING_STYLE: &str = "position: fixed; bottom: 15rem; left: 50%; \
    transform: translateX(-50%); background: #000; padding: 1rem; border-radius: 0.25rem; \
    box-shadow: 0 10px 15px rgba(0,0,0,0.4); z-index: 1200;";
const WARNING_TEXT_STYLE: &str = "color: #4ade80; text-align: center; cursor: pointer; margin: 0;";

#[derive(Clone, Copy)]
enum BarSide {
    Top,
    Bottom,
}

fn bar_style(is_open: bool, side: BarSide) -> String {
    let (margin, transform) = match side {
        BarSide::Top => (0, "translateY(4px) rotate(45deg)"),
        BarSide::Bottom => (5, "translateY(-4px) rotate(-45deg)"),
    };
    format!(
        "display: block; margin-top: {margin}px; width: 22px; height: 2px; \
         background: {ACCENT_HEX}; box-shadow: 0 0 6px {ACCENT_HEX}; \
         transform: {}; transition: transform 0.25s ease;",
        if is_open { transform } else { "none" }
    )
}

fn toggle_glow_style(is_open: bool) -> String {
    let glow = if is_open {
        format!("0 0 18px {ACCENT_HEX}")
    } else {
        "0 0 10px rgba(22,163,74,0.35)".to_string()
    };
    format!("position: absolute; inset: 0; border-radius: 9999px; pointer-events: none; box-shadow: {glow};")
}

fn bubble_button_style(label: &str, active: bool, content_color: &str) -> String {
    let border = if active {
        ACCENT_HEX
    } else {
        border_color_for(label).unwrap_or(ACCENT_HEX)
    };
    let shadow = if active {
        format!("0 0 26px {ACCENT_HEX}, inset 0 0 14px {content_color}")
    } else {
        format!(
            "0 0 12px {}, inset 0 0 6px {}",
            with_alpha(ACCENT_HEX, "55"),
            with_alpha(content_color, "22")
        )
    };
    format!(
        "position: relative; width: 3.5rem; height: 3.5rem; border-radius: 9999px; \
         background: #0f172a; border: 1px solid {border}; display: flex; \
         align-items: center; justify-content: center; cursor: pointer; \
         transition: transform 0.2s; box-shadow: {shadow};"
    )
}

fn pulse_style(active: bool) -> String {
    let glow = if active {
        with_alpha(ACCENT_HEX, "aa")
    } else {
        with_alpha(ACCENT_HEX, "55")
    };
    let radius = if active { 28 } else { 18 };
    format!(
        "position: absolute; inset: 0; border-radius: 9999px; \
         box-shadow: 0 0 {radius}px {glow};"
    )
}

fn dot_style(content_color: &str) -> String {
    format!(
        "width: 0.75rem; height: 0.75rem; border-radius: 9999px; \
         background: {content_color}; box-shadow: 0 0 12px {content_color};"
    )
}

fn seconds_or_default(field: &'static str, value: f64, default: f64) -> f64 {
    match check_seconds(field, value) {
        Ok(()) => value,
        Err(err) => {
            gloo::console::warn!("bubble menu", err.to_string());
            default
        }
    }
}

/// Appends a two-digit alpha to `#rrggbb` colors; other color syntaxes are
/// returned untouched.
fn with_alpha(color: &str, alpha: &str) -> String {
    let is_rgb_hex = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|ch| ch.is_ascii_hexdigit());
    if is_rgb_hex {
        format!("{color}{alpha}")
    } else {
        color.to_string()
    }
}
