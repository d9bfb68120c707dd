use crate::model::RunSummary;

const HEADERS: [&str; 4] = ["TestId", "TestCase", "Result", "Message"];

/// Renders the console results table plus a totals line.
///
/// The message column carries a short verdict; full details go to the
/// results file and the report.
#[must_use]
pub fn table_lines(summary: &RunSummary) -> Vec<String> {
    let rows: Vec<[String; 4]> = summary
        .outcomes
        .iter()
        .map(|outcome| {
            let message = if outcome.passed {
                "Test passed"
            } else {
                "Test failed"
            };
            [
                outcome.id.clone(),
                outcome.name.clone(),
                outcome.passed.to_string(),
                message.to_owned(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = border_line(&widths);
    let mut lines = Vec::with_capacity(rows.len().saturating_add(5));
    lines.push(border.clone());
    lines.push(row_line(&widths, &HEADERS.map(str::to_owned)));
    lines.push(border.clone());
    for row in &rows {
        lines.push(row_line(&widths, row));
    }
    lines.push(border);
    lines.push(format!(
        "Total: {}  Passed: {}  Failed: {}  Skipped: {}",
        summary.total(),
        summary.passed(),
        summary.failed(),
        summary.skipped
    ));
    lines
}

fn border_line(widths: &[usize; 4]) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|width| "-".repeat(width.saturating_add(2)))
        .collect();
    format!("+{}+", segments.join("+"))
}

fn row_line(widths: &[usize; 4], cells: &[String; 4]) -> String {
    let segments: Vec<String> = widths
        .iter()
        .zip(cells.iter())
        .map(|(width, cell)| {
            let padding = width.saturating_sub(cell.chars().count());
            format!(" {}{} ", cell, " ".repeat(padding))
        })
        .collect();
    format!("|{}|", segments.join("|"))
}
