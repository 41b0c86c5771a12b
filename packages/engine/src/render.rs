//! Report rendering: handlebars engine wiring and context assembly.

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::helper::split_row_helper;
use crate::templates::TemplateId;

/// Context handed to every report template: the caller's data plus the
/// stylesheet to inline into the document head.
#[derive(Serialize)]
struct ReportContext<'a> {
    data: &'a Value,
    css: &'a str,
}

/// Configured template engine for report rendering.
///
/// Construction registers the `splitRow` helper and every template in
/// the registry. The renderer is immutable afterwards and safe to share
/// behind an `Arc` across concurrent requests.
pub struct ReportRenderer {
    engine: Handlebars<'static>,
}

impl ReportRenderer {
    pub fn new() -> Result<Self> {
        let mut engine = Handlebars::new();
        engine.register_helper("splitRow", Box::new(split_row_helper));
        for template in TemplateId::ALL {
            engine.register_template_string(template.name(), template.source())?;
        }
        Ok(Self { engine })
    }

    /// Render `data` through `template`, inlining `css` into the document.
    pub fn render(&self, template: TemplateId, data: &Value, css: &str) -> Result<String> {
        let context = ReportContext { data, css };
        Ok(self.engine.render(template.name(), &context)?)
    }
}
