//! HTML-to-PDF conversion via printpdf.

use std::collections::BTreeMap;

use printpdf::{GeneratePdfOptions, PdfDocument, PdfSaveOptions};

use crate::error::{ReportError, Result};

/// Convert a rendered HTML document into PDF bytes.
///
/// Layout and save warnings are logged and otherwise ignored; only a
/// hard conversion failure is an error.
pub fn html_to_pdf(html: &str) -> Result<Vec<u8>> {
    let images = BTreeMap::new();
    let fonts = BTreeMap::new();
    let options = GeneratePdfOptions::default();

    let mut warnings = Vec::new();
    let doc = PdfDocument::from_html(html, &images, &fonts, &options, &mut warnings)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    for warning in &warnings {
        tracing::warn!(?warning, "PDF generation warning");
    }

    let mut save_warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut save_warnings);
    for warning in &save_warnings {
        tracing::warn!(?warning, "PDF save warning");
    }
    Ok(bytes)
}
