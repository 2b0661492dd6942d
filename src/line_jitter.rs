use std::cell::{Cell, RefCell};
use std::rc::Rc;

use bubble_menu_core::{jitter_connectors, Connector, JitterRng};
use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::Element;
use yew::NodeRef;

struct JitterState {
    connectors: RefCell<Vec<Connector>>,
    paths: Vec<Element>,
    rng: RefCell<JitterRng>,
    live: Cell<bool>,
    frame: RefCell<Option<AnimationFrame>>,
}

/// Per-frame shimmer of the connector paths.
///
/// The loop runs until the handle is dropped; dropping clears the liveness
/// flag and cancels the pending frame, so no frame is scheduled afterwards.
pub(crate) struct LineJitter {
    state: Rc<JitterState>,
}

impl LineJitter {
    /// Starts on the currently mounted path elements. Refs that are not
    /// attached yet are skipped along with their connector.
    pub(crate) fn start_on_refs(connectors: &[Connector], paths: &[NodeRef], seed: u32) -> Self {
        let (connectors, paths) = connectors
            .iter()
            .zip(paths)
            .filter_map(|(connector, path)| Some((connector.clone(), path.cast::<Element>()?)))
            .unzip();
        Self::start(connectors, paths, seed)
    }

    pub(crate) fn start(connectors: Vec<Connector>, paths: Vec<Element>, seed: u32) -> Self {
        let state = Rc::new(JitterState {
            connectors: RefCell::new(connectors),
            paths,
            rng: RefCell::new(JitterRng::new(seed)),
            live: Cell::new(true),
            frame: RefCell::new(None),
        });
        schedule(&state);
        Self { state }
    }
}

impl Drop for LineJitter {
    fn drop(&mut self) {
        self.state.live.set(false);
        self.state.frame.borrow_mut().take();
    }
}

fn schedule(state: &Rc<JitterState>) {
    if !state.live.get() {
        return;
    }
    let next = Rc::clone(state);
    let handle = request_animation_frame(move |_| {
        next.frame.borrow_mut().take();
        if !next.live.get() {
            return;
        }
        step(&next);
        schedule(&next);
    });
    *state.frame.borrow_mut() = Some(handle);
}

fn step(state: &JitterState) {
    let mut connectors = state.connectors.borrow_mut();
    jitter_connectors(&mut connectors, &mut state.rng.borrow_mut());
    for (connector, path) in connectors.iter().zip(&state.paths) {
        let _ = path.set_attribute("d", &connector.path_data());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubble_menu_core::{build_connectors, compute_positions, default_menu_items, Viewport};
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const SVG_NS: &str = "http://www.w3.org/2000/svg";

    fn connectors() -> Vec<Connector> {
        let viewport = Viewport::new(1280.0, 800.0);
        let mut rng = JitterRng::new(7);
        let placement = compute_positions(&default_menu_items(), viewport, &mut rng);
        build_connectors(&placement, viewport, &mut rng)
    }

    fn path_elements(connectors: &[Connector]) -> Vec<Element> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        connectors
            .iter()
            .map(|connector| {
                let path = document
                    .create_element_ns(Some(SVG_NS), "path")
                    .expect("create path");
                path.set_attribute("d", &connector.path_data())
                    .expect("seed d");
                path
            })
            .collect()
    }

    fn read_d(path: &Element) -> String {
        path.get_attribute("d").expect("d attribute present")
    }

    #[wasm_bindgen_test(async)]
    async fn paths_shimmer_until_dropped() {
        let connectors = connectors();
        let paths = path_elements(&connectors);
        let initial = read_d(&paths[0]);
        let jitter = LineJitter::start(connectors.clone(), paths.clone(), 99);

        TimeoutFuture::new(80).await;
        let first = read_d(&paths[0]);
        assert_ne!(first, initial);
        TimeoutFuture::new(80).await;
        let second = read_d(&paths[0]);
        assert_ne!(second, first);
        assert!(second.starts_with(&format!(
            "M{},{} Q",
            connectors[0].start.x, connectors[0].start.y
        )));

        drop(jitter);
        let frozen: Vec<String> = paths.iter().map(read_d).collect();
        TimeoutFuture::new(120).await;
        let after: Vec<String> = paths.iter().map(read_d).collect();
        assert_eq!(after, frozen);
    }

    #[wasm_bindgen_test(async)]
    async fn unattached_refs_are_skipped() {
        let connectors = connectors();
        let refs = vec![NodeRef::default(); connectors.len()];
        let jitter = LineJitter::start_on_refs(&connectors, &refs, 3);
        assert!(jitter.state.paths.is_empty());
        assert!(jitter.state.connectors.borrow().is_empty());
        TimeoutFuture::new(40).await;
        drop(jitter);
    }
}
