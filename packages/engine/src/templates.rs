//! Enumerated registry of embedded report templates.
//!
//! Template lookup is an explicit mapping from identifier to embedded
//! resource, so an unknown name is a distinct not-found outcome instead
//! of a sentinel value a caller could mistake for an empty template.

use crate::error::{ReportError, Result};

/// Identifier of an embedded report template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    /// General-purpose tabular info report.
    Info,
}

impl TemplateId {
    /// All registered templates.
    pub const ALL: &'static [TemplateId] = &[TemplateId::Info];

    /// Registry name, as used in requests and template registration.
    pub fn name(self) -> &'static str {
        match self {
            TemplateId::Info => "info",
        }
    }

    /// Embedded handlebars source.
    pub fn source(self) -> &'static str {
        match self {
            TemplateId::Info => include_str!("../templates/info.html"),
        }
    }

    /// Look up a template by registry name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Like [`TemplateId::from_name`], with an explicit not-found error.
    pub fn resolve(name: &str) -> Result<Self> {
        Self::from_name(name).ok_or_else(|| ReportError::TemplateNotFound(name.to_string()))
    }
}
