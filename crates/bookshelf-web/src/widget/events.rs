//! Browser event wiring
//!
//! Pointer-down on the strip or the axis thumb starts a drag and attaches
//! move/up/cancel listeners on the window; pointer-up or a cancelled pointer
//! detaches them again. Search
//! runs on button click or Enter in the query input.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use bookshelf_carousel::DragSource;
use bookshelf_catalog::{search, SearchQuery};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, KeyboardEvent, MouseEvent, Window};

use crate::fetch::FetchCatalog;
use crate::subscription::Subscription;
use crate::util::log;
use super::state::WidgetState;

type SharedState = Rc<RefCell<WidgetState>>;

/// Window-level move/up/cancel listeners, attached only while dragging
pub(super) struct DragListeners {
    on_move: Subscription,
    on_up: Subscription,
    on_cancel: Subscription,
}

impl DragListeners {
    pub fn new(window: &Window, state: &SharedState) -> Rc<Self> {
        let move_target = Rc::downgrade(state);
        let up_target = Rc::downgrade(state);
        let cancel_target = Rc::downgrade(state);

        Rc::new_cyclic(|listeners: &Weak<DragListeners>| {
            let up_listeners = listeners.clone();
            let cancel_listeners = listeners.clone();
            DragListeners {
                on_move: Subscription::new(window, "pointermove", move |event| {
                    let x = match client_x(&event) {
                        Some(x) => x,
                        None => return,
                    };
                    if let Some(state) = move_target.upgrade() {
                        state.borrow_mut().pointer_move(x);
                    }
                }),
                on_up: Subscription::new(window, "pointerup", move |_| {
                    if let Some(state) = up_target.upgrade() {
                        state.borrow_mut().pointer_up();
                    }
                    if let Some(listeners) = up_listeners.upgrade() {
                        listeners.detach();
                    }
                }),
                on_cancel: Subscription::new(window, "pointercancel", move |_| {
                    if let Some(state) = cancel_target.upgrade() {
                        state.borrow_mut().cancel_drag();
                    }
                    if let Some(listeners) = cancel_listeners.upgrade() {
                        listeners.detach();
                    }
                }),
            }
        })
    }

    fn attach(&self) {
        let attached = self
            .on_move
            .attach()
            .and_then(|_| self.on_up.attach())
            .and_then(|_| self.on_cancel.attach());
        if let Err(e) = attached {
            log(&format!("[bookshelf] Failed to attach drag listeners: {:?}", e));
        }
    }

    fn detach(&self) {
        self.on_move.detach();
        self.on_up.detach();
        self.on_cancel.detach();
    }
}

/// Register every page-lifetime listener
pub(super) fn wire(state: &SharedState, drag: &Rc<DragListeners>) -> Result<Vec<Subscription>, JsValue> {
    let (window, search_button, input, carousel, thumb) = {
        let s = state.borrow();
        (
            s.dom.window.clone(),
            s.dom.search_button.clone(),
            s.dom.input.clone(),
            s.dom.carousel.clone(),
            s.dom.axis_thumb.clone(),
        )
    };

    let mut subscriptions = Vec::with_capacity(5);

    let target = Rc::downgrade(state);
    subscriptions.push(Subscription::listen(&search_button, "click", move |_| {
        if let Some(state) = target.upgrade() {
            search_from_input(&state);
        }
    })?);

    let target = Rc::downgrade(state);
    subscriptions.push(Subscription::listen(&input, "keydown", move |event| {
        let is_enter = event
            .dyn_ref::<KeyboardEvent>()
            .map(|e| e.key() == "Enter")
            .unwrap_or(false);
        if !is_enter {
            return;
        }
        if let Some(state) = target.upgrade() {
            search_from_input(&state);
        }
    })?);

    subscriptions.push(drag_start(&carousel, DragSource::Surface, state, drag)?);
    subscriptions.push(drag_start(&thumb, DragSource::Thumb, state, drag)?);

    let target = Rc::downgrade(state);
    subscriptions.push(Subscription::listen(&window, "resize", move |_| {
        if let Some(state) = target.upgrade() {
            state.borrow_mut().resize();
        }
    })?);

    Ok(subscriptions)
}

/// Start a search with the given text; blank text does nothing
///
/// Searches are not coordinated: whichever response arrives last is shown.
pub(super) fn run_search(state: &SharedState, raw: &str) {
    let query = match SearchQuery::parse(raw) {
        Ok(query) => query,
        Err(_) => return,
    };

    let config = {
        let s = state.borrow();
        s.dom.set_hint(&s.catalog.hints.searching);
        s.catalog.clone()
    };

    let target = Rc::downgrade(state);
    spawn_local(async move {
        let source = FetchCatalog::new(config.clone());
        let outcome = match search(&source, &query, &config).await {
            Some(outcome) => outcome,
            None => return,
        };
        if let Some(state) = target.upgrade() {
            state.borrow_mut().show_outcome(outcome);
        }
    });
}

fn search_from_input(state: &SharedState) {
    let raw = state.borrow().dom.input.value();
    run_search(state, &raw);
}

fn drag_start(
    element: &web_sys::HtmlElement,
    source: DragSource,
    state: &SharedState,
    drag: &Rc<DragListeners>,
) -> Result<Subscription, JsValue> {
    let target = Rc::downgrade(state);
    let drag = Rc::downgrade(drag);
    Subscription::listen(element, "pointerdown", move |event| {
        let x = match client_x(&event) {
            Some(x) => x,
            None => return,
        };
        let started = match target.upgrade() {
            Some(state) => state.borrow_mut().pointer_down(source, x),
            None => false,
        };
        if started {
            if let Some(drag) = drag.upgrade() {
                drag.attach();
            }
        }
    })
}

fn client_x(event: &Event) -> Option<f32> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|e| e.client_x() as f32)
}
