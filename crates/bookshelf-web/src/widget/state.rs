//! Shared widget state
//!
//! One owned object behind `Rc<RefCell<_>>`. Browser callbacks hold `Weak`
//! references and go through the mutators here; nothing else writes the
//! carousel offset.

use std::cell::RefCell;
use std::rc::Weak;

use bookshelf_carousel::{BookEntry, CarouselEngine, DragSource, TimerCommand};
use bookshelf_catalog::{CatalogConfig, ResultSource, SearchOutcome};
use wasm_bindgen::prelude::*;

use crate::config::WidgetConfig;
use crate::dom::DomRefs;
use crate::render;
use crate::subscription::Subscription;
use crate::timer::AutoAdvanceTimer;
use crate::util::{js_error_text, log};

pub(crate) struct WidgetState {
    pub(super) dom: DomRefs,
    pub(super) engine: CarouselEngine,
    pub(super) catalog: CatalogConfig,
    timer: AutoAdvanceTimer,
    /// Click handlers of the currently rendered result cards
    result_handlers: Vec<Subscription>,
    self_ref: Weak<RefCell<WidgetState>>,
}

impl WidgetState {
    pub fn new(dom: DomRefs, config: WidgetConfig, self_ref: Weak<RefCell<WidgetState>>) -> Self {
        let tick_target = self_ref.clone();
        let on_tick = Closure::wrap(Box::new(move || {
            if let Some(state) = tick_target.upgrade() {
                if let Ok(mut state) = state.try_borrow_mut() {
                    state.tick();
                }
            }
        }) as Box<dyn FnMut()>);

        let timer = AutoAdvanceTimer::new(dom.window.clone(), config.carousel.tick_interval_ms, on_tick);

        Self {
            dom,
            engine: CarouselEngine::new(config.carousel),
            catalog: config.catalog,
            timer,
            result_handlers: Vec::new(),
            self_ref,
        }
    }

    // =========================================================================
    // Shelf
    // =========================================================================

    /// Seed the shelf at mount
    pub fn seed(&mut self, entries: Vec<BookEntry>) {
        let command = self.engine.extend(entries);
        self.after_shelf_change(command);
    }

    /// Append a picked entry to the shelf
    pub fn add_book(&mut self, entry: BookEntry) {
        log(&format!("[bookshelf] Added \"{}\" to shelf", entry.title));
        let command = self.engine.append(entry);
        self.after_shelf_change(command);
    }

    fn after_shelf_change(&mut self, command: TimerCommand) {
        if let Err(e) = render::render_shelf(&self.dom, self.engine.shelf().entries()) {
            log(&format!("[bookshelf] Failed to render shelf: {}", js_error_text(&e)));
        }
        self.redraw();
        self.timer.apply(command);
    }

    // =========================================================================
    // Motion
    // =========================================================================

    /// Auto-advance tick from the interval timer
    pub fn tick(&mut self) -> bool {
        let applied = self.engine.tick();
        if applied {
            self.redraw();
        }
        applied
    }

    /// Pointer pressed on the strip or thumb; true if a drag started
    pub fn pointer_down(&mut self, source: DragSource, x: f32) -> bool {
        let result = self.engine.pointer_down(source, x);
        self.timer.apply(result.timer());
        result.is_handled()
    }

    pub fn pointer_move(&mut self, x: f32) {
        if self.engine.pointer_move(x).is_handled() {
            self.redraw();
        }
    }

    /// Pointer released; true if a drag ended
    pub fn pointer_up(&mut self) -> bool {
        let result = self.engine.pointer_up();
        self.timer.apply(result.timer());
        result.is_handled()
    }

    /// Pointer cancelled by the browser; the offset stays where the drag left it
    pub fn cancel_drag(&mut self) {
        let command = self.engine.cancel_drag();
        self.timer.apply(command);
    }

    /// Re-measure the axis track and re-project
    pub fn resize(&mut self) {
        let width = self.dom.track_width();
        self.engine.resize(width);
        self.redraw();
    }

    fn redraw(&self) {
        if let Err(e) = render::apply_frame(&self.dom, &self.engine.frame()) {
            log(&format!("[bookshelf] Failed to apply frame: {}", js_error_text(&e)));
        }
    }

    // =========================================================================
    // Search results
    // =========================================================================

    /// Show a finished search
    pub fn show_outcome(&mut self, outcome: SearchOutcome) {
        if let Some(err) = &outcome.error {
            log(&format!("[bookshelf] Showing recommendations: {}", err));
        } else if outcome.source == ResultSource::Catalog {
            log(&format!("[bookshelf] Showing {} results", outcome.results.len()));
        }
        self.dom.set_hint(&outcome.hint);
        self.show_results(outcome.results);
    }

    /// Render result cards; each card's button appends its entry to the shelf
    pub fn show_results(&mut self, entries: Vec<BookEntry>) {
        self.result_handlers.clear();

        let buttons = match render::render_results(&self.dom, &entries) {
            Ok(buttons) => buttons,
            Err(e) => {
                log(&format!("[bookshelf] Failed to render results: {}", js_error_text(&e)));
                return;
            }
        };

        for (button, entry) in buttons.iter().zip(entries) {
            let target = self.self_ref.clone();
            let handler = Subscription::listen(button, "click", move |_| {
                if let Some(state) = target.upgrade() {
                    state.borrow_mut().add_book(entry.clone());
                }
            });
            match handler {
                Ok(handler) => self.result_handlers.push(handler),
                Err(e) => log(&format!("[bookshelf] Failed to bind result card: {}", js_error_text(&e))),
            }
        }
    }
}
