//! Human-readable summary rendering.

use super::MatchReport;

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Render a report as plain text for terminal output.
///
/// Colors are suppressed when `no_color` is set or the `NO_COLOR`
/// environment variable is present.
#[must_use]
pub fn render_summary(report: &MatchReport, no_color: bool) -> String {
    let use_color = !no_color && std::env::var("NO_COLOR").is_err();
    let mut lines = Vec::new();

    lines.push(format!("Program matches: {} total", report.total));
    lines.push(String::new());

    for (name, bucket) in report.buckets() {
        let color = if use_color {
            match name {
                "Safety" => GREEN,
                "Target" => YELLOW,
                _ => RED,
            }
        } else {
            ""
        };
        let reset = if use_color { RESET } else { "" };

        lines.push(format!("{color}{name} ({}){reset}", bucket.len()));
        for entry in bucket {
            let program = &entry.program;
            lines.push(format!(
                "  {:>3}  {} — {} [{}]",
                entry.result.overall_score,
                program.title,
                program.university_name,
                program.country_code
            ));
            if let Some(reason) = entry.result.reasons.first() {
                lines.push(format!("       {reason}"));
            }
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
