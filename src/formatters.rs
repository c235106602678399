use crate::featuring::FeatureReport;
use crate::pipeline::RunSummary;
use crate::ranking::RankedResults;

const HEADERS: [&str; 7] = [
    "Description",
    "Color",
    "Condition",
    "Part Number",
    "Type",
    "Sellers",
    "Quantity Available",
];

/// Render ranked results as an aligned text table
pub fn format_results_table(results: &RankedResults) -> String {
    let rows: Vec<[String; 7]> = results
        .iter()
        .map(|r| {
            [
                r.description.clone(),
                r.color.clone(),
                r.condition.to_string(),
                r.part_number.clone(),
                r.part_type.clone(),
                r.sellers_display(),
                r.quantity_display(),
            ]
        })
        .collect();

    let mut widths: [usize; 7] = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    output.push_str("Rarest Parts\n");
    output.push_str("------------\n\n");

    if rows.is_empty() {
        output.push_str("No parts could be matched in the catalog.\n");
        return output;
    }

    output.push_str(&format_line(HEADERS.iter().copied(), &widths));
    let separators: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&format_line(separators.iter().map(String::as_str), &widths));
    for row in &rows {
        output.push_str(&format_line(row.iter().map(String::as_str), &widths));
    }

    output
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}

/// One-paragraph summary of a pipeline run
pub fn format_run_summary(summary: &RunSummary) -> String {
    let mut output = format!(
        "Processed {} rows: {} ranked parts, {} duplicates skipped, {} not found in catalog",
        summary.rows, summary.records, summary.duplicates, summary.unresolved
    );
    if summary.blank > 0 {
        output.push_str(&format!(" ({} rows without description ignored)", summary.blank));
    }
    output.push('\n');
    output
}

pub fn format_feature_report(report: &FeatureReport) -> String {
    format!(
        "Marked {} of the {} rarest parts as featured ({} found in store)\n",
        report.updated, report.considered, report.matched
    )
}
