use crate::core::logic::Consolidation;
use crate::errors::AppResult;
use crate::export::RenderOptions;

/// Forest as JSON; with diagnostics the document is `{contexts, diagnostics}`.
pub(crate) fn render_json(consolidation: &Consolidation, opts: &RenderOptions) -> AppResult<String> {
    let json = match (opts.with_diagnostics, opts.pretty) {
        (true, true) => serde_json::to_string_pretty(consolidation)?,
        (true, false) => serde_json::to_string(consolidation)?,
        (false, true) => serde_json::to_string_pretty(&consolidation.contexts)?,
        (false, false) => serde_json::to_string(&consolidation.contexts)?,
    };
    Ok(json)
}
