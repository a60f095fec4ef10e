//! Card rendering
//!
//! Cards are cloned from `<template>` elements in the page. Layout values come
//! from the carousel engine's [`Frame`]; nothing here computes positions.

use bookshelf_carousel::{BookEntry, CardLayout, Frame};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DocumentFragment, Element, HtmlElement, HtmlImageElement, HtmlTemplateElement};

use crate::constants::*;
use crate::dom::DomRefs;

/// Render search result cards, returning each card's add button in order
pub(crate) fn render_results(dom: &DomRefs, entries: &[BookEntry]) -> Result<Vec<Element>, JsValue> {
    dom.results.set_inner_html("");

    let mut buttons = Vec::with_capacity(entries.len());
    for entry in entries {
        let card = clone_template(&dom.result_template)?;
        fill_cover(&card, RESULT_COVER_SELECTOR, entry)?;
        fill_text(&card, RESULT_TITLE_SELECTOR, &entry.title)?;
        fill_text(&card, RESULT_META_SELECTOR, &entry.author)?;

        let button = card
            .query_selector(RESULT_BUTTON_SELECTOR)?
            .ok_or_else(|| JsValue::from_str("result template has no button"))?;
        buttons.push(button);

        dom.results.append_child(&card)?;
    }
    Ok(buttons)
}

/// Rebuild the carousel strip with one card per shelf entry
pub(crate) fn render_shelf(dom: &DomRefs, entries: &[BookEntry]) -> Result<(), JsValue> {
    dom.carousel.set_inner_html("");

    for entry in entries {
        let card = clone_template(&dom.book_template)?;
        fill_cover(&card, BOOK_COVER_SELECTOR, entry)?;
        fill_text(&card, BOOK_NAME_SELECTOR, &entry.title)?;
        dom.carousel.append_child(&card)?;
    }
    Ok(())
}

/// Apply a projected frame to the rendered cards and the axis thumb
pub(crate) fn apply_frame(dom: &DomRefs, frame: &Frame) -> Result<(), JsValue> {
    let cards = dom.carousel.children();
    for layout in &frame.cards {
        let card = match cards.item(layout.index as u32) {
            Some(card) => card,
            None => break,
        };
        style_card(&card, layout)?;
    }

    dom.axis_thumb
        .style()
        .set_property("left", &format!("{}px", frame.thumb_position))
}

fn style_card(card: &Element, layout: &CardLayout) -> Result<(), JsValue> {
    if let Some(element) = card.dyn_ref::<HtmlElement>() {
        let style = element.style();
        style.set_property("transform", &layout.css_transform())?;
        style.set_property("opacity", &layout.opacity.to_string())?;
        style.set_property("z-index", &layout.z_index.to_string())?;
    }
    card.class_list()
        .toggle_with_force(CENTER_CLASS, layout.centered)
        .map(|_| ())
}

fn clone_template(template: &HtmlTemplateElement) -> Result<DocumentFragment, JsValue> {
    template
        .content()
        .clone_node_with_deep(true)?
        .dyn_into::<DocumentFragment>()
        .map_err(|_| JsValue::from_str("template content is not a fragment"))
}

fn fill_cover(card: &DocumentFragment, selector: &str, entry: &BookEntry) -> Result<(), JsValue> {
    let image = card
        .query_selector(selector)?
        .and_then(|e| e.dyn_into::<HtmlImageElement>().ok());
    if let Some(image) = image {
        if entry.has_cover() {
            image.set_src(&entry.cover_url);
        }
        image.set_alt(&entry.title);
    }
    Ok(())
}

fn fill_text(card: &DocumentFragment, selector: &str, text: &str) -> Result<(), JsValue> {
    if let Some(element) = card.query_selector(selector)? {
        element.set_text_content(Some(text));
    }
    Ok(())
}
