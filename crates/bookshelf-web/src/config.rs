//! Widget configuration
//!
//! The constructor accepts an optional JSON object; every key is optional and
//! missing keys keep their defaults.
//!
//! ```json
//! {
//!   "carousel": { "spacing": 180, "tickIntervalMs": 16 },
//!   "catalog": { "proxy": "", "maxResults": 6 }
//! }
//! ```

use bookshelf_carousel::CarouselConfig;
use bookshelf_catalog::CatalogConfig;
use serde::Deserialize;

/// Combined widget configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Carousel motion and layout
    pub carousel: CarouselConfig,
    /// Catalog lookup
    pub catalog: CatalogConfig,
}

impl WidgetConfig {
    /// Parse optional JSON; `None` or blank text gives the defaults
    pub fn from_json(json: Option<&str>) -> Result<Self, String> {
        match json.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(text) => serde_json::from_str(text).map_err(|e| format!("invalid config: {}", e)),
        }
    }
}
