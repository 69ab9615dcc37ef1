//! Output formatting functionality
//!
//! This module renders an [`AnalysisResult`] as JSON, text or CSV.

use crate::error::{ImportyError, Result};
use crate::models::analysis::AnalysisResult;
use ansi_term::Colour::{Blue, Cyan, Green, Yellow};
use ansi_term::Style;

/// Format analysis results as text
pub fn format_results_text(results: &AnalysisResult, use_colors: bool) -> String {
    let mut output = String::new();
    let summary = &results.summary;

    let header = format!("Imports of {}", summary.library);
    if use_colors {
        output.push_str(&format!("{}\n\n", Blue.bold().paint(header)));
    } else {
        output.push_str(&format!("{}\n\n", header));
    }

    output.push_str(&format!("Files scanned: {}\n", summary.files_scanned));
    output.push_str(&format!("Components found: {}\n", summary.components_found));
    output.push_str(&format!("Total imports: {}\n", summary.total_imports));

    if results.components.is_empty() {
        let message = format!("\nNo imports from '{}' were found\n", summary.library);
        if use_colors {
            output.push_str(&Yellow.paint(message).to_string());
        } else {
            output.push_str(&message);
        }
        return output;
    }

    output.push_str("\nComponents:\n");
    for (component, files) in &results.components {
        let count = format!(
            "({} {})",
            files.len(),
            if files.len() == 1 { "file" } else { "files" }
        );

        if use_colors {
            output.push_str(&format!(
                "  {} {}\n",
                Green.bold().paint(component.as_str()),
                Style::new().dimmed().paint(count)
            ));
        } else {
            output.push_str(&format!("  {} {}\n", component, count));
        }

        for file in files {
            if use_colors {
                output.push_str(&format!("    {}\n", Cyan.paint(file.as_str())));
            } else {
                output.push_str(&format!("    {}\n", file));
            }
        }
    }

    output
}

/// One-line summary used in quiet mode
pub fn format_summary_line(results: &AnalysisResult) -> String {
    let summary = &results.summary;
    format!(
        "{}: {} components, {} imports across {} files\n",
        summary.library, summary.components_found, summary.total_imports, summary.files_scanned
    )
}

/// Format analysis results as JSON
pub fn format_results_json(results: &AnalysisResult, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(results)
    } else {
        serde_json::to_string(results)
    };

    rendered
        .map(|mut json| {
            json.push('\n');
            json
        })
        .map_err(|e| ImportyError::JsonSerialize { source: e })
}

/// Format analysis results as CSV, one `component,file` row per import
pub fn format_results_csv(results: &AnalysisResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(["component", "file"])?;

    for (component, files) in &results.components {
        for file in files {
            writer.write_record([component.as_str(), file.as_str()])?;
        }
    }

    let bytes = writer.into_inner().map_err(|e| ImportyError::Csv {
        source: csv::Error::from(e.into_error()),
    })?;

    String::from_utf8(bytes).map_err(|e| ImportyError::Analysis {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}
