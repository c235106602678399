use rarest_parts::io::{read_inventory, read_inventory_from, write_results_to};
use rarest_parts::models::{Condition, ResultRecord};
use rarest_parts::{ApiError, RankedResults};
use std::io::Write;
use tempfile::NamedTempFile;

// Test fixtures - sample data for testing

fn create_sample_inventory() -> String {
    r#"Item No,Description,Color,Condition,Qty,Price
3001,Brick 2 x 4,Red,New,10,0.12
3001,Brick 2 x 4,Red,New,4,0.10
3023,Plate 1 x 2,Blue,Used,25,0.03
,,Black,Used,1,0.50
3070b,Tile 1 x 1 with Groove,,Used,3,0.05"#
        .to_string()
}

fn write_temp(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

fn record(description: &str, condition: Condition, sellers: Option<u32>, qty: Option<u32>) -> ResultRecord {
    ResultRecord {
        description: description.to_string(),
        color: "Red".to_string(),
        condition,
        part_number: "3001".to_string(),
        part_type: "PART".to_string(),
        seller_count: sellers,
        quantity_available: qty,
    }
}

// Tests for read_inventory

#[test]
fn test_read_inventory_valid_file() {
    let temp_file = write_temp(&create_sample_inventory());

    let rows = read_inventory(temp_file.path()).unwrap();

    // Rows without a description are kept; the pipeline skips them
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[3].description, "");

    assert_eq!(rows[0].description, "Brick 2 x 4");
    assert_eq!(rows[0].color, "Red");
    assert_eq!(rows[0].condition, Condition::New);
    assert_eq!(rows[0].source_index, 0);

    assert_eq!(rows[2].description, "Plate 1 x 2");
    assert_eq!(rows[2].condition, Condition::Used);
}

#[test]
fn test_read_inventory_keeps_source_index_and_blank_color() {
    let temp_file = write_temp(&create_sample_inventory());

    let rows = read_inventory(temp_file.path()).unwrap();

    assert_eq!(rows[4].description, "Tile 1 x 1 with Groove");
    assert_eq!(rows[4].source_index, 4);
    assert_eq!(rows[4].color, "");
}

#[test]
fn test_read_inventory_keeps_duplicates() {
    let temp_file = write_temp(&create_sample_inventory());

    let rows = read_inventory(temp_file.path()).unwrap();

    // Dedup happens in the pipeline, not while reading
    assert_eq!(rows[0].dedup_key(), rows[1].dedup_key());
}

#[test]
fn test_read_inventory_nonexistent_file() {
    let result = read_inventory("/this/file/does/not/exist.csv");
    assert!(matches!(result, Err(ApiError::Io(_))));
}

#[test]
fn test_read_inventory_missing_column() {
    let temp_file = write_temp("Description,Color,Qty\nBrick 2 x 4,Red,1");

    match read_inventory(temp_file.path()) {
        Err(ApiError::MissingColumn(name)) => assert_eq!(name, "Condition"),
        other => panic!("Expected ApiError::MissingColumn, got: {other:?}"),
    }
}

#[test]
fn test_read_inventory_empty_file() {
    let temp_file = NamedTempFile::new().unwrap();
    // No header row at all

    let result = read_inventory(temp_file.path());
    assert!(matches!(result, Err(ApiError::MissingColumn(_))));
}

#[test]
fn test_read_inventory_only_headers() {
    let temp_file = write_temp("Description,Color,Condition");

    let rows = read_inventory(temp_file.path()).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_read_inventory_with_whitespace() {
    let content = "  Description , Color ,Condition\n  Brick 1 x 1  ,  White  ,  New  \n";

    let rows = read_inventory_from(content.as_bytes()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "Brick 1 x 1");
    assert_eq!(rows[0].color, "White");
    assert_eq!(rows[0].condition, Condition::New);
}

#[test]
fn test_read_inventory_condition_mapping() {
    let content = "Description,Color,Condition\nA,Red,New\nB,Red,Used\nC,Red,\nD,Red,new\n";

    let rows = read_inventory_from(content.as_bytes()).unwrap();
    let conditions: Vec<Condition> = rows.iter().map(|r| r.condition).collect();
    assert_eq!(
        conditions,
        vec![Condition::New, Condition::Used, Condition::Used, Condition::New]
    );
}

#[test]
fn test_read_inventory_with_special_characters() {
    let content = "Description,Color,Condition\n\"Plate, Round 1 x 1 \"\"Dot\"\"\",Trans-Clear,Used\n";

    let rows = read_inventory_from(content.as_bytes()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, r#"Plate, Round 1 x 1 "Dot""#);
    assert_eq!(rows[0].color, "Trans-Clear");
}

// Tests for write_results

#[test]
fn test_write_results_headers_and_sentinels() {
    let results = RankedResults::new(vec![
        record("Unknown stock", Condition::Used, None, None),
        record("Rare brick", Condition::New, Some(2), Some(5)),
    ]);

    let mut buffer = Vec::new();
    write_results_to(&mut buffer, &results).unwrap();
    let csv = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines[0],
        "Description,Color,Condition,Part Number,Type,Sellers,Quantity Available"
    );
    assert_eq!(lines[1], "Rare brick,Red,New,3001,PART,2,5");
    assert_eq!(lines[2], "Unknown stock,Red,Used,3001,PART,N/A,N/A");
}

#[test]
fn test_write_results_empty_still_has_headers() {
    let mut buffer = Vec::new();
    write_results_to(&mut buffer, &RankedResults::default()).unwrap();

    let csv = String::from_utf8(buffer).unwrap();
    assert_eq!(
        csv.trim_end(),
        "Description,Color,Condition,Part Number,Type,Sellers,Quantity Available"
    );
}

#[test]
fn test_write_results_to_file() {
    let temp_file = NamedTempFile::new().unwrap();
    let results = RankedResults::new(vec![record("Brick", Condition::New, Some(1), Some(1))]);

    rarest_parts::write_results(temp_file.path(), &results).unwrap();

    let written = std::fs::read_to_string(temp_file.path()).unwrap();
    assert_eq!(written.lines().count(), 2);
    assert!(written.contains("Brick,Red,New,3001,PART,1,1"));
}
