//! DOM element lookup

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTemplateElement, Window};

use crate::constants::*;

/// Elements the widget reads and writes
pub(crate) struct DomRefs {
    pub window: Window,
    pub search_button: Element,
    pub input: HtmlInputElement,
    pub results: Element,
    pub hint: Element,
    pub carousel: HtmlElement,
    pub axis_track: Element,
    pub axis_thumb: HtmlElement,
    pub result_template: HtmlTemplateElement,
    pub book_template: HtmlTemplateElement,
}

impl DomRefs {
    /// Look up every element by id; fails on the first one missing
    pub fn lookup() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        Ok(Self {
            search_button: by_id(&document, SEARCH_BUTTON_ID)?,
            input: by_id_as(&document, QUERY_INPUT_ID)?,
            results: by_id(&document, RESULTS_ID)?,
            hint: by_id(&document, SEARCH_HINT_ID)?,
            carousel: by_id_as(&document, CAROUSEL_ID)?,
            axis_track: by_id(&document, AXIS_TRACK_ID)?,
            axis_thumb: by_id_as(&document, AXIS_THUMB_ID)?,
            result_template: by_id_as(&document, RESULT_TEMPLATE_ID)?,
            book_template: by_id_as(&document, BOOK_TEMPLATE_ID)?,
            window,
        })
    }

    /// Current axis track width in pixels
    pub fn track_width(&self) -> f32 {
        self.axis_track.client_width() as f32
    }

    /// Replace the hint text
    pub fn set_hint(&self, text: &str) {
        self.hint.set_text_content(Some(text));
    }
}

fn by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))
}

fn by_id_as<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    by_id(document, id)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{} has the wrong type", id)))
}
