//! Catalog lookups through the browser `fetch` API

use bookshelf_carousel::BookEntry;
use bookshelf_catalog::{
    decode_suggestions, CatalogConfig, CatalogError, CatalogSource, FailureReason, SearchQuery,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::util::{js_error_text, log};

/// [`CatalogSource`] backed by `window.fetch`
///
/// One GET per query, no timeout and no cancellation.
pub(crate) struct FetchCatalog {
    config: CatalogConfig,
}

impl FetchCatalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    async fn fetch_body(&self, url: &str) -> Result<String, FailureReason> {
        let window =
            web_sys::window().ok_or_else(|| FailureReason::Transport("no window".to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport)?
            .dyn_into::<Response>()
            .map_err(transport)?;

        if !response.ok() {
            return Err(FailureReason::Status(response.status()));
        }

        let text = JsFuture::from(response.text().map_err(transport)?)
            .await
            .map_err(transport)?;
        text.as_string()
            .ok_or_else(|| FailureReason::Malformed("body is not text".to_string()))
    }
}

impl CatalogSource for FetchCatalog {
    async fn lookup(&self, query: &SearchQuery) -> Result<Vec<BookEntry>, CatalogError> {
        let url = query.request_url(&self.config)?;
        log(&format!("[catalog] GET {}", url));

        let body = self.fetch_body(&url).await.map_err(|reason| {
            log(&format!("[catalog] lookup failed: {}", reason));
            reason
        })?;

        let entries = decode_suggestions(body.as_bytes(), &self.config.unknown_author)?;
        log(&format!(
            "[catalog] {} candidates for \"{}\"",
            entries.len(),
            query.as_str()
        ));
        Ok(entries)
    }
}

fn transport(value: JsValue) -> FailureReason {
    FailureReason::Transport(js_error_text(&value))
}
