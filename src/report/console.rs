use crate::contents::error::ContentsError;
use crate::report::report_model::DescribeReport;

// ============================================================================
// Console reporter
// ============================================================================

/// Format a describe report for terminal output.
///
/// Produces output like:
/// ```text
/// === Element descriptions (en-US) ===
///
/// ✓ com.example:id/play  "Play" [user_label]
/// ✗ com.example:id/menu  (no description, needs label)
///
/// === 1 of 2 described, 1 needs a label ===
/// ```
pub fn format_console_report(report: &DescribeReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Element descriptions ({}) ===\n\n", report.locale));

    for el in &report.elements {
        match &el.description {
            Some(description) => {
                out.push_str(&format!(
                    "\u{2713} {}  \"{}\" [{}]\n",
                    el.element, description.text, description.source
                ));
            }
            None => {
                let suffix = if el.needs_label { ", needs label" } else { "" };
                out.push_str(&format!("\u{2717} {}  (no description{})\n", el.element, suffix));
            }
        }
    }

    let noun = if report.needing_label == 1 { "needs" } else { "need" };
    out.push_str(&format!(
        "\n=== {} of {} described, {} {} a label ===\n",
        report.described, report.total, report.needing_label, noun
    ));

    out
}

/// Pretty-printed JSON rendering of the report.
pub fn format_json_report(report: &DescribeReport) -> Result<String, ContentsError> {
    serde_json::to_string_pretty(report).map_err(|e| ContentsError::JsonSerialize {
        context: "describe report".to_string(),
        source: e,
    })
}

/// One line per element that needs a label.
pub fn format_needs_label(report: &DescribeReport) -> String {
    let mut out = String::new();
    for el in report.elements.iter().filter(|e| e.needs_label) {
        out.push_str(&el.element);
        out.push('\n');
    }
    out
}
