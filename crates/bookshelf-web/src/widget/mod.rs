//! Mounted bookshelf widget
//!
//! [`BookshelfWidget`] is the single JS-facing handle. Constructing it looks up
//! the page elements, seeds the shelf with the recommendations and starts the
//! carousel; the listeners live as long as the handle.

mod events;
mod state;

use std::cell::RefCell;
use std::rc::Rc;

use bookshelf_carousel::BookEntry;
use bookshelf_catalog::fallback_books;
use wasm_bindgen::prelude::*;

use crate::config::WidgetConfig;
use crate::dom::DomRefs;
use crate::subscription::Subscription;
use crate::util::log;
use events::DragListeners;
use state::WidgetState;

#[wasm_bindgen]
pub struct BookshelfWidget {
    state: Rc<RefCell<WidgetState>>,
    _drag: Rc<DragListeners>,
    _listeners: Vec<Subscription>,
}

#[wasm_bindgen]
impl BookshelfWidget {
    /// Mount on the current document
    ///
    /// `config_json` is an optional JSON object, see [`WidgetConfig`].
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<BookshelfWidget, JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let config = WidgetConfig::from_json(config_json.as_deref()).map_err(|e| JsValue::from_str(&e))?;
        let dom = DomRefs::lookup()?;
        let window = dom.window.clone();

        let state = Rc::new_cyclic(|self_ref| RefCell::new(WidgetState::new(dom, config, self_ref.clone())));
        let drag = DragListeners::new(&window, &state);
        let listeners = events::wire(&state, &drag)?;

        {
            let mut s = state.borrow_mut();
            s.show_results(fallback_books());
            s.seed(fallback_books());
            s.resize();
            log(&format!(
                "[bookshelf] mounted with {} books, driver={}",
                s.engine.shelf().len(),
                s.engine.driver().as_str()
            ));
        }

        Ok(BookshelfWidget {
            state,
            _drag: drag,
            _listeners: listeners,
        })
    }

    /// Run a catalog search as if typed into the input
    pub fn search(&self, query: &str) {
        events::run_search(&self.state, query);
    }

    /// Append a book to the shelf
    pub fn add_book(&self, title: &str, author: &str, cover_url: &str) {
        self.state
            .borrow_mut()
            .add_book(BookEntry::new(title, author, cover_url));
    }

    /// Current frame (offset, card layouts, thumb position) as JSON
    pub fn frame_json(&self) -> Result<String, JsValue> {
        let frame = self.state.borrow().engine.frame();
        serde_json::to_string(&frame).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Shelf entries as JSON
    pub fn shelf_json(&self) -> Result<String, JsValue> {
        let state = self.state.borrow();
        serde_json::to_string(state.engine.shelf().entries()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current carousel offset (fractional shelf index)
    pub fn offset(&self) -> f32 {
        self.state.borrow().engine.offset()
    }

    /// "idle", "autoAdvancing" or "manualDragging"
    pub fn driver(&self) -> String {
        self.state.borrow().engine.driver().as_str().to_string()
    }

    /// Advance one auto step by hand; false unless auto-advancing
    pub fn tick(&self) -> bool {
        self.state.borrow_mut().tick()
    }

    /// Re-measure the axis track after a layout change the window did not report
    pub fn resize(&self) {
        self.state.borrow_mut().resize();
    }
}
