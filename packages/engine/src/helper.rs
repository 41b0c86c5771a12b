//! Handlebars integration for the row splitter.

use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderErrorReason,
};

use crate::config::DEFAULT_MAX_CHARS;
use crate::splitter::split_row;

/// `{{{splitRow row targetColumn [maxChars]}}}`
///
/// Renders one logical table row as width-bounded `<tr>` fragments.
/// The helper emits raw markup, so templates must invoke it with triple
/// braces to bypass HTML escaping. Negative `maxChars` values saturate
/// to 0 and fall into the word-per-chunk degenerate behavior.
pub fn split_row_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let row = h
        .param(0)
        .and_then(|v| v.value().as_array())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("splitRow", 0))?;
    let target_column = h
        .param(1)
        .and_then(|v| v.value().as_u64())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("splitRow", 1))?
        as usize;
    let max_chars = match h.param(2) {
        Some(param) => param
            .value()
            .as_i64()
            .map(|n| usize::try_from(n).unwrap_or(0))
            .ok_or(RenderErrorReason::ParamNotFoundForIndex("splitRow", 2))?,
        None => DEFAULT_MAX_CHARS,
    };

    let html = split_row(row, target_column, max_chars)
        .map_err(|e| RenderErrorReason::Other(e.to_string()))?;
    out.write(&html)?;
    Ok(())
}
