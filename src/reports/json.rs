//! JSON report rendering.

use serde_json::json;

use crate::error::{ReportErrorKind, Result, UnimatchError};

use super::MatchReport;

/// Render a report as pretty-printed JSON, wrapped in a tool envelope.
pub fn render_json(report: &MatchReport) -> Result<String> {
    let envelope = json!({
        "tool": "unimatch",
        "version": env!("CARGO_PKG_VERSION"),
        "report": report,
    });
    serde_json::to_string_pretty(&envelope).map_err(|err| {
        UnimatchError::report(
            "serializing match report",
            ReportErrorKind::JsonSerialization(err.to_string()),
        )
    })
}
