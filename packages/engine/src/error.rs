//! Error types for the rapport engine

use thiserror::Error;

/// Main error type for report generation.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Target column index is outside the row
    #[error("column index {index} out of range for row with {len} columns")]
    ColumnOutOfRange { index: usize, len: usize },

    /// Requested template name is not in the registry
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Template source failed to compile at registration time
    #[error("template compilation failed: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// Template rendering failed
    #[error("template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),

    /// HTML-to-PDF conversion failed
    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// Result type alias for report generation.
pub type Result<T> = std::result::Result<T, ReportError>;
