use crate::error::{ApiError, ApiResult};
use crate::models::{Condition, InventoryRow};
use crate::ranking::RankedResults;
use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;

const DESCRIPTION_COLUMN: &str = "Description";
const COLOR_COLUMN: &str = "Color";
const CONDITION_COLUMN: &str = "Condition";

/// Read an inventory CSV export from disk
pub fn read_inventory(path: impl AsRef<Path>) -> ApiResult<Vec<InventoryRow>> {
    let path = path.as_ref();
    log::info!("Reading inventory from: {}", path.display());
    let file = std::fs::File::open(path)?;
    read_inventory_from(file)
}

/// Read inventory rows from any CSV source.
///
/// Every data row is returned, blank descriptions included; the pipeline
/// decides what to skip. Extra columns are ignored. A missing `Description`,
/// `Color` or `Condition` header is an error.
pub fn read_inventory_from<R: Read>(reader: R) -> ApiResult<Vec<InventoryRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ApiError::MissingColumn(name.to_string()))
    };
    let description_idx = column(DESCRIPTION_COLUMN)?;
    let color_idx = column(COLOR_COLUMN)?;
    let condition_idx = column(CONDITION_COLUMN)?;

    let mut rows = Vec::new();

    for (source_index, result) in rdr.records().enumerate() {
        let record = result?;
        rows.push(InventoryRow {
            description: record.get(description_idx).unwrap_or("").to_string(),
            color: record.get(color_idx).unwrap_or("").to_string(),
            condition: Condition::parse(record.get(condition_idx).unwrap_or("")),
            source_index,
        });
    }

    log::info!("Loaded {} rows from inventory", rows.len());

    Ok(rows)
}

#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Color")]
    color: &'a str,
    #[serde(rename = "Condition")]
    condition: &'static str,
    #[serde(rename = "Part Number")]
    part_number: &'a str,
    #[serde(rename = "Type")]
    part_type: &'a str,
    #[serde(rename = "Sellers")]
    sellers: String,
    #[serde(rename = "Quantity Available")]
    quantity_available: String,
}

/// Write ranked results as CSV, in ranked order
pub fn write_results_to<W: Write>(writer: W, results: &RankedResults) -> ApiResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    if results.is_empty() {
        // serde only emits headers alongside the first record
        wtr.write_record([
            "Description",
            "Color",
            "Condition",
            "Part Number",
            "Type",
            "Sellers",
            "Quantity Available",
        ])?;
    }

    for record in results.iter() {
        wtr.serialize(ExportRow {
            description: &record.description,
            color: &record.color,
            condition: record.condition.as_str(),
            part_number: &record.part_number,
            part_type: &record.part_type,
            sellers: record.sellers_display(),
            quantity_available: record.quantity_display(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write ranked results to a CSV file
pub fn write_results(path: impl AsRef<Path>, results: &RankedResults) -> ApiResult<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_results_to(file, results)?;
    log::info!("Wrote {} results to: {}", results.len(), path.display());
    Ok(())
}
