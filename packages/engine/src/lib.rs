//! Rapport Engine
//!
//! Report generation library behind the rapport HTTP service.
//! This library provides functionality for:
//! - Splitting oversized table rows into width-bounded `<tr>` fragments
//! - An enumerated registry of embedded handlebars report templates
//! - Rendering JSON data through a template into an HTML document
//! - Converting the HTML document into downloadable PDF bytes
//!
//! # Example
//!
//! ```ignore
//! use rapport_engine::{html_to_pdf, ReportRenderer, TemplateId};
//! use serde_json::json;
//!
//! let renderer = ReportRenderer::new()?;
//! let data = json!({
//!     "title": "Inventory",
//!     "rows": [["Widget", "pcs", "a long description <br> second line"]],
//! });
//! let html = renderer.render(TemplateId::Info, &data, "td { padding: 2px; }")?;
//! let pdf = html_to_pdf(&html)?;
//! ```

pub mod config;
pub mod error;
pub mod helper;
pub mod pdf;
pub mod render;
pub mod splitter;
pub mod templates;

// Re-export commonly used items
pub use error::{ReportError, Result};
pub use helper::split_row_helper;
pub use pdf::html_to_pdf;
pub use render::ReportRenderer;
pub use splitter::{chunk_text, split_row, split_row_default};
pub use templates::TemplateId;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
