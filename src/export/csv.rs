use crate::errors::{AppError, AppResult};
use crate::export::model::forest_to_rows;
use crate::models::consolidated::ConsolidatedContext;

/// CSV with one row per node (header included thanks to serde).
pub(crate) fn render_csv(forest: &[ConsolidatedContext]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for row in forest_to_rows(forest) {
        wtr.serialize(row)?;
    }

    let bytes = wtr.into_inner().map_err(|e| AppError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Other(format!("CSV is not UTF-8: {e}")))
}
