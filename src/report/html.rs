// HTML reporter - standalone summary page with a per-test table

use crate::state::{Report, TestStatus};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Placeholder for the duration column; durations are not collected.
pub const DURATION_PLACEHOLDER: &str = "0.00";

const STYLE: &str = r#"    body {
      font-family: Arial, sans-serif;
      background-color: #f4f4f4;
      padding: 20px;
    }
    .container {
      background-color: white;
      border: 1px solid #ccc;
      width: 600px;
      margin: auto;
      box-shadow: 0 0 10px rgba(0,0,0,0.1);
    }
    .header {
      background-color: #512b8b;
      color: white;
      padding: 10px 20px;
      font-size: 20px;
      font-weight: bold;
    }
    .content {
      padding: 20px;
    }
    .content p {
      margin: 5px 0;
    }
    .label {
      font-weight: bold;
    }
    .green { color: green; }
    .red { color: red; }
    .orange { color: orange; }
    .table {
      width: 100%;
      border-collapse: collapse;
    }
    .table th {
      background-color: #512b8b;
      color: white;
      padding: 10px;
    }
    .table td {
      padding: 10px;
      border-top: 1px solid #ccc;
      text-align: center;
    }
"#;

/// Visual treatment of a count or status cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Positive,
    Negative,
    Warning,
}

impl StatusTone {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "green",
            Self::Negative => "red",
            Self::Warning => "orange",
        }
    }
}

impl From<&TestStatus> for StatusTone {
    fn from(status: &TestStatus) -> Self {
        match status {
            TestStatus::Failed => Self::Negative,
            TestStatus::Skipped => Self::Warning,
            // Anything not failed or skipped renders like a pass
            TestStatus::Passed
            | TestStatus::TimedOut
            | TestStatus::Interrupted
            | TestStatus::Unknown(_) => Self::Positive,
        }
    }
}

/// HTML report writer
pub struct HtmlReporter {
    output_path: PathBuf,
}

impl HtmlReporter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Render `report` and write it, replacing any existing file
    pub fn write(&self, report: &Report) -> Result<()> {
        render_html_report(report, &self.output_path)?;
        info!("HTML report written to {}", self.output_path.display());
        Ok(())
    }
}

/// Render `report` and write the page to `path`.
pub fn render_html_report(report: &Report, path: &Path) -> Result<()> {
    let html = render_html(report);

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create HTML report file: {}", path.display()))?;
    file.write_all(html.as_bytes())
        .with_context(|| format!("Failed to write HTML report file: {}", path.display()))?;

    Ok(())
}

/// Render `report` as a self-contained HTML page
pub fn render_html(report: &Report) -> String {
    let summary = report.summary();

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n");
    html.push_str("<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <title>Test Summary Report</title>\n");
    html.push_str("  <style>\n");
    html.push_str(STYLE);
    html.push_str("  </style>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str("  <div class=\"container\">\n");
    html.push_str("    <div class=\"header\">Test Summary</div>\n");
    html.push_str("    <div class=\"content\">\n");
    html.push_str(&format!(
        "      <p><span class=\"label\">Total Tests:</span> {}</p>\n",
        summary.total
    ));
    html.push_str("      <p>\n");
    html.push_str(&format!(
        "        <span class=\"label {}\">Passed:</span> {} &nbsp;\n",
        StatusTone::Positive.css_class(),
        summary.passed
    ));
    html.push_str(&format!(
        "        <span class=\"label {}\">Failed:</span> {} &nbsp;\n",
        StatusTone::Negative.css_class(),
        summary.failed
    ));
    html.push_str(&format!(
        "        <span class=\"label {}\">Skipped:</span> {}\n",
        StatusTone::Warning.css_class(),
        summary.skipped
    ));
    html.push_str("      </p>\n");
    html.push_str("      <table class=\"table\">\n");
    html.push_str("        <tr>\n");
    html.push_str("          <th>Test Case</th>\n");
    html.push_str("          <th>Status</th>\n");
    html.push_str("          <th>Duration</th>\n");
    html.push_str("        </tr>\n");

    for test in report.tests() {
        let tone = StatusTone::from(&test.status);
        html.push_str("        <tr>\n");
        html.push_str(&format!(
            "          <td>{}</td>\n",
            escape_html(&test.test_name)
        ));
        html.push_str(&format!(
            "          <td class=\"{}\">{}</td>\n",
            tone.css_class(),
            escape_html(test.status.as_str())
        ));
        html.push_str(&format!("          <td>{}</td>\n", DURATION_PLACEHOLDER));
        html.push_str("        </tr>\n");
    }

    html.push_str("      </table>\n");
    html.push_str("    </div>\n");
    html.push_str("  </div>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");

    html
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
