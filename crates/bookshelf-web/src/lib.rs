//! Bookshelf widget for the browser
//!
//! Binds the pure carousel engine and the catalog lookup to a host page.
//! The page provides the elements listed in [`constants`]; JavaScript creates
//! one [`BookshelfWidget`] after the document has loaded:
//!
//! ```text
//! import init, { BookshelfWidget } from "./pkg/bookshelf_web.js";
//! await init();
//! const widget = new BookshelfWidget();
//! ```
//!
//! # Architecture
//!
//! ```text
//! DOM events ──► widget::events ──► WidgetState ──► CarouselEngine
//!                     │                 │                │
//!                     │ spawn_local     │ TimerCommand   │ Frame
//!                     ▼                 ▼                ▼
//!               FetchCatalog     AutoAdvanceTimer    render::apply_frame
//! ```

pub mod config;
pub mod constants;
mod dom;
mod fetch;
mod render;
mod subscription;
mod timer;
mod util;
mod widget;

pub use config::WidgetConfig;
pub use widget::BookshelfWidget;
