use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{AppError, AppResult, SinkError};
use crate::model::{HistoryEntry, TestOutcome};

use super::format::{escape_html, write_line};

/// Messages longer than this get a show-more toggle.
const COLLAPSE_AFTER_CHARS: usize = 15;

const STYLE: &str = r#"<style>
body { font-family: Roboto, Arial, sans-serif; background: #f4f4f9; margin: 0; padding: 20px; color: #333; }
h1, h2 { text-align: center; color: #444; }
.summary { text-align: center; margin-bottom: 10px; }
.summary span { margin: 0 12px; font-weight: bold; }
table { width: 100%; border-collapse: collapse; background: white; margin: 20px auto; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1); }
th, td { padding: 12px 15px; text-align: left; border: 1px solid #ddd; vertical-align: top; font-size: 14px; }
th { background: #007bff; color: white; text-transform: uppercase; }
tr:nth-child(even) { background: #f9f9f9; }
.status-pass { color: #28a745; font-weight: bold; }
.status-fail { color: #dc3545; font-weight: bold; }
.message { max-width: 480px; overflow: hidden; white-space: nowrap; text-overflow: ellipsis; }
.message.expanded { white-space: pre-wrap; }
.toggle { color: #007bff; cursor: pointer; text-decoration: underline; font-size: 12px; }
</style>"#;

const SCRIPT: &str = r#"<script>
function toggleMessage(id) {
  const cell = document.getElementById(id);
  const expanded = cell.classList.toggle('expanded');
  document.getElementById('btn-' + id).innerText = expanded ? 'Show less' : 'Show more';
}
</script>"#;

/// Renders the static HTML report for a run, optionally with history.
///
/// # Errors
///
/// Returns an error if writing into the output buffer fails.
pub fn render_report(
    outcomes: &[TestOutcome],
    history: Option<&[HistoryEntry]>,
    generated_at: DateTime<Utc>,
) -> AppResult<String> {
    let mut output = String::new();
    let passed = outcomes.iter().filter(|outcome| outcome.passed).count();
    let failed = outcomes.len().saturating_sub(passed);

    write_line(&mut output, "<!DOCTYPE html>")?;
    write_line(&mut output, "<html lang=\"en\">")?;
    write_line(&mut output, "<head>")?;
    write_line(&mut output, "<meta charset=\"UTF-8\">")?;
    write_line(
        &mut output,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">",
    )?;
    write_line(&mut output, "<title>API Test Report</title>")?;
    write_line(&mut output, STYLE)?;
    write_line(&mut output, SCRIPT)?;
    write_line(&mut output, "</head>")?;
    write_line(&mut output, "<body>")?;
    write_line(&mut output, "<h1>API Test Report</h1>")?;
    write_line(
        &mut output,
        &format!(
            "<div class=\"summary\">Generated {}<br><span>Total: {}</span><span class=\"status-pass\">Passed: {}</span><span class=\"status-fail\">Failed: {}</span></div>",
            escape_html(&generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)),
            outcomes.len(),
            passed,
            failed
        ),
    )?;

    write_line(&mut output, "<table id=\"results\">")?;
    write_line(
        &mut output,
        "<tr><th>TestId</th><th>TestCase</th><th>Result</th><th>Message</th></tr>",
    )?;
    for (index, outcome) in outcomes.iter().enumerate() {
        let cell_id = format!("message-{}", index);
        write_line(&mut output, "<tr>")?;
        write_line(&mut output, &format!("<td>{}</td>", escape_html(&outcome.id)))?;
        write_line(&mut output, &format!("<td>{}</td>", escape_html(&outcome.name)))?;
        write_line(&mut output, &status_cell(outcome.passed))?;
        write_line(&mut output, &message_cell(&cell_id, &outcome.detail))?;
        write_line(&mut output, "</tr>")?;
    }
    write_line(&mut output, "</table>")?;

    if let Some(history) = history {
        write_line(&mut output, "<h2>History</h2>")?;
        write_line(&mut output, "<table id=\"history\">")?;
        write_line(
            &mut output,
            "<tr><th>Run date</th><th>TestId</th><th>TestCase</th><th>Result</th><th>Message</th></tr>",
        )?;
        for (index, entry) in history.iter().enumerate() {
            let cell_id = format!("history-{}", index);
            write_line(&mut output, "<tr>")?;
            write_line(
                &mut output,
                &format!(
                    "<td>{}</td>",
                    escape_html(&entry.run_at.to_rfc3339_opts(SecondsFormat::Secs, true))
                ),
            )?;
            write_line(&mut output, &format!("<td>{}</td>", escape_html(&entry.id)))?;
            write_line(&mut output, &format!("<td>{}</td>", escape_html(&entry.name)))?;
            write_line(&mut output, &status_cell(entry.passed))?;
            write_line(&mut output, &message_cell(&cell_id, &entry.detail))?;
            write_line(&mut output, "</tr>")?;
        }
        write_line(&mut output, "</table>")?;
    }

    write_line(&mut output, "</body>")?;
    write_line(&mut output, "</html>")?;
    Ok(output)
}

fn status_cell(passed: bool) -> String {
    if passed {
        "<td class=\"status-pass\">Passed</td>".to_owned()
    } else {
        "<td class=\"status-fail\">Failed</td>".to_owned()
    }
}

fn message_cell(cell_id: &str, detail: &str) -> String {
    let toggle = if detail.chars().count() > COLLAPSE_AFTER_CHARS {
        format!(
            "<span class=\"toggle\" id=\"btn-{0}\" onclick=\"toggleMessage('{0}')\">Show more</span>",
            cell_id
        )
    } else {
        String::new()
    };
    format!(
        "<td><div id=\"{}\" class=\"message\">{}</div>{}</td>",
        cell_id,
        escape_html(detail),
        toggle
    )
}

/// # Errors
///
/// Returns an error if the report file cannot be written.
pub fn write_report(path: &Path, html: &str) -> AppResult<()> {
    std::fs::write(path, html).map_err(|err| {
        AppError::sink(SinkError::WriteReport {
            path: path.to_path_buf(),
            source: err,
        })
    })
}
