//! Output formatting for CLI

use flashfit_core::FitReport;
use tabled::{settings::Style, Table, Tabled};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Table,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "table" => OutputFormat::Table,
            _ => OutputFormat::Text,
        }
    }
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Property")]
    property: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Format a run report based on selected format
pub fn format_report(report: &FitReport, format: &str) -> String {
    match OutputFormat::from(format) {
        OutputFormat::Json => report.to_json(),
        OutputFormat::Table => Table::new(rows(report)).with(Style::rounded()).to_string(),
        OutputFormat::Text => rows(report)
            .into_iter()
            .map(|r| format!("{:10} {}", format!("{}:", r.property), r.value))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn rows(report: &FitReport) -> Vec<Row> {
    let b = &report.borders;
    vec![
        Row {
            property: "Process",
            value: report.pid.map_or_else(|| "planned".to_string(), |pid| pid.to_string()),
        },
        Row { property: "File", value: report.path.display().to_string() },
        Row { property: "Window", value: report.window.to_string() },
        Row { property: "Display", value: report.display.to_string() },
        Row {
            property: "Borders",
            value: format!("l{} r{} t{} b{}", b.left, b.right, b.top, b.bottom),
        },
        Row { property: "Placement", value: report.placement.to_string() },
    ]
}
