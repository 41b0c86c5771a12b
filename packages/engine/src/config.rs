//! Configuration constants for report generation.

/// Default maximum chunk width for the row splitter, in characters.
pub const DEFAULT_MAX_CHARS: usize = 60;

/// Token that forces a chunk boundary in wrapped text.
///
/// The token is consumed as a boundary signal and never appears in the
/// output.
pub const FORCED_BREAK_MARKER: &str = "<br>";

/// Placeholder rendered in the label cells of continuation rows.
///
/// Keeps table columns aligned when a logical row spans multiple
/// physical rows.
pub const LABEL_PLACEHOLDER: &str = "&nbsp;";

/// Filename under which generated documents are offered for download.
pub const DOWNLOAD_FILENAME: &str = "generated.pdf";
