use std::cell::RefCell;
use std::rc::Rc;

use bubble_menu_core::{
    play_entrance, play_exit, secs_to_ms, BubbleStyle, Ease, PlacedBubble, Timeline,
};
use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::HtmlElement;
use yew::NodeRef;

use crate::viewport::now_ms;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct EntranceSpec {
    pub(crate) ease: Ease,
    pub(crate) duration_secs: f64,
    pub(crate) stagger_secs: f64,
}

/// Plays bubble tweens and pushes the sampled styles onto the bubble
/// elements once per animation frame while anything is moving.
pub(crate) struct AnimationDriver {
    timeline: RefCell<Timeline>,
    targets: RefCell<Vec<NodeRef>>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl AnimationDriver {
    pub(crate) fn new() -> Self {
        Self {
            timeline: RefCell::new(Timeline::default()),
            targets: RefCell::new(Vec::new()),
            frame: RefCell::new(None),
        }
    }

    pub(crate) fn set_targets(&self, targets: &[NodeRef]) {
        *self.targets.borrow_mut() = targets.to_vec();
    }

    pub(crate) fn play_entrance(self: &Rc<Self>, placement: &[PlacedBubble], spec: EntranceSpec) {
        {
            let mut timeline = self.timeline.borrow_mut();
            play_entrance(
                &mut timeline,
                placement,
                spec.ease,
                secs_to_ms(spec.duration_secs),
                secs_to_ms(spec.stagger_secs),
                now_ms(),
            );
        }
        self.apply_styles();
        self.ensure_frame();
    }

    pub(crate) fn play_exit(self: &Rc<Self>, placement: &[PlacedBubble]) {
        play_exit(&mut self.timeline.borrow_mut(), placement, now_ms());
        self.ensure_frame();
    }

    /// Moves every bubble straight to its resting style, e.g. after a resize
    /// while open.
    pub(crate) fn settle(&self, placement: &[PlacedBubble]) {
        {
            let mut timeline = self.timeline.borrow_mut();
            timeline.resize(placement.len());
            for (index, bubble) in placement.iter().enumerate() {
                let position = bubble.position;
                timeline.set(
                    index,
                    BubbleStyle {
                        x: position.x,
                        y: position.y,
                        scale: position.scale,
                        opacity: 1.0,
                    },
                );
            }
        }
        self.apply_styles();
    }

    pub(crate) fn stop(&self) {
        self.frame.borrow_mut().take();
        self.timeline.borrow_mut().kill_all();
    }

    fn ensure_frame(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let driver = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            driver.frame.borrow_mut().take();
            driver.on_frame();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>) {
        let running = self.timeline.borrow_mut().sample(now_ms());
        self.apply_styles();
        if running {
            self.ensure_frame();
        }
    }

    fn apply_styles(&self) {
        let timeline = self.timeline.borrow();
        let targets = self.targets.borrow();
        for (target, style) in targets.iter().zip(timeline.styles()) {
            let Some(element) = target.cast::<HtmlElement>() else {
                continue;
            };
            write_style(&element, &style);
        }
    }
}

fn write_style(element: &HtmlElement, style: &BubbleStyle) {
    let css = element.style();
    let _ = css.set_property("transform", &style.css_transform());
    let _ = css.set_property("opacity", &style.css_opacity());
}

