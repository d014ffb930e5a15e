//! Boundary Tests for xlsxsched
//!
//! Empty sheets, out-of-bounds rectangles, malformed ranges and invalid inputs.

use std::path::PathBuf;

use rust_xlsxwriter::*;
use tempfile::TempDir;
use xlsxsched::{ExtractorBuilder, Labels, ScheduleError, ScheduleRecord, SheetSelector};

// Helper module for generating boundary test fixtures
mod fixtures {
    use super::*;

    /// Generate a workbook with an empty sheet (no cells)
    pub fn generate_empty_sheet() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("EmptySheet")?;
        Ok(workbook.save_to_buffer()?)
    }

    /// Generate a small sheet populated only in A1:B2
    pub fn generate_small_sheet() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_number(0, 0, 44197.0)?;
        worksheet.write_number(0, 1, 44198.0)?;
        worksheet.write_string(1, 0, "Лекция\nФизика\n301")?;
        worksheet.write_string(1, 1, "Практика\nХимия\n105")?;
        Ok(workbook.save_to_buffer()?)
    }

    /// Generate cells around the serial-date edge cases
    pub fn generate_serial_edges() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        // Epoch and 1970-01-01
        worksheet.write_number(0, 0, 0.0)?;
        worksheet.write_number(0, 1, 25569.0)?;
        // Not dates: fractional and negative
        worksheet.write_number(0, 2, 44197.5)?;
        worksheet.write_number(0, 3, -1.0)?;
        // Not jobs: booleans and plain text
        worksheet.write_boolean(1, 0, true)?;
        worksheet.write_string(1, 1, "СР")?;

        // A date cell formatted as a date
        let format = Format::new().set_num_format("dd.mm.yy");
        let date = ExcelDateTime::from_ymd(2021, 1, 1)?;
        worksheet.write_datetime_with_format(0, 4, &date, &format)?;

        Ok(workbook.save_to_buffer()?)
    }

    /// Generate a corrupted/invalid Excel file
    pub fn generate_corrupted_file() -> Vec<u8> {
        b"This is not a valid Excel file content".to_vec()
    }
}

fn write_fixture(bytes: Vec<u8>) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixture.xlsx");
    std::fs::write(&path, bytes).unwrap();
    (dir, path)
}

fn extractor() -> xlsxsched::Extractor {
    ExtractorBuilder::new()
        .with_labels(Labels::default().with_field_separator("\n"))
        .build()
        .unwrap()
}

#[test]
fn test_empty_sheet() {
    let (_dir, path) = write_fixture(fixtures::generate_empty_sheet().unwrap());

    let records = extractor().extract_records(&path, "D6:Z34").unwrap();
    assert!(records.is_empty(), "Empty sheet should yield no records");

    let subjects = extractor().read_subjects(&path, "A1:D10").unwrap();
    assert!(subjects.is_empty());

    let entries = extractor().read_curriculum(&path, "A39:O51").unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_record_count_matches_columns() {
    let (_dir, path) = write_fixture(fixtures::generate_small_sheet().unwrap());

    for (range, expected) in [("A1:A1", 1), ("A1:B2", 2), ("A1:Z2", 26), ("B1:AB40", 27)] {
        let records = extractor().extract_records(&path, range).unwrap();
        assert_eq!(records.len(), expected, "range {}", range);
    }
}

#[test]
fn test_rectangle_beyond_sheet_extent() {
    let (_dir, path) = write_fixture(fixtures::generate_small_sheet().unwrap());

    let records = extractor().extract_records(&path, "A1:D100").unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].jobs.len(), 1);
    assert_eq!(records[2], ScheduleRecord::default());
    assert_eq!(records[3], ScheduleRecord::default());
}

#[test]
fn test_rectangle_entirely_outside_sheet() {
    let (_dir, path) = write_fixture(fixtures::generate_small_sheet().unwrap());

    let records = extractor().extract_records(&path, "X500:Z520").unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| *r == ScheduleRecord::default()));
}

#[test]
fn test_last_column_of_sheet() {
    let (_dir, path) = write_fixture(fixtures::generate_small_sheet().unwrap());

    let records = extractor().extract_records(&path, "XFC1:XFD20").unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn test_serial_date_edges() {
    let (_dir, path) = write_fixture(fixtures::generate_serial_edges().unwrap());

    let records = extractor().extract_records(&path, "A1:E2").unwrap();

    assert_eq!(records.len(), 5);
    assert_eq!(records[0].date.unwrap().to_string(), "1899-12-30");
    assert_eq!(records[1].date.unwrap().to_string(), "1970-01-01");
    assert!(records[2].date.is_none());
    assert!(records[3].date.is_none());
    assert_eq!(records[4].date.unwrap().to_string(), "2021-01-01");
    assert!(records.iter().all(|r| r.jobs.is_empty()));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.xlsx");

    match extractor().extract_records(&path, "D6:Z34") {
        Err(ScheduleError::InvalidPath(p)) => assert_eq!(p, path),
        other => panic!("Expected InvalidPath, got {:?}", other),
    }
}

#[test]
fn test_directory_path() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(
        extractor().extract(dir.path(), "D6:Z34"),
        Err(ScheduleError::InvalidPath(_))
    ));
    assert!(matches!(
        extractor().read_sheet(dir.path()),
        Err(ScheduleError::InvalidPath(_))
    ));
}

#[test]
fn test_malformed_ranges() {
    let (_dir, path) = write_fixture(fixtures::generate_small_sheet().unwrap());

    for range in ["D6Z34", "D0:Z34", "Z34:D6", "D34:Z6", "6D:Z34", "D6:", "", "Д6:Z34"] {
        let result = extractor().extract_records(&path, range);
        assert!(
            matches!(result, Err(ScheduleError::MalformedRange(_))),
            "range {:?} should be malformed, got {:?}",
            range,
            result
        );
    }
}

#[test]
fn test_malformed_range_checked_before_parsing() {
    let (_dir, path) = write_fixture(fixtures::generate_corrupted_file());

    assert!(matches!(
        extractor().extract_records(&path, "D6Z34"),
        Err(ScheduleError::MalformedRange(_))
    ));
}

#[test]
fn test_corrupted_file() {
    let (_dir, path) = write_fixture(fixtures::generate_corrupted_file());

    assert!(matches!(
        extractor().extract_records(&path, "D6:Z34"),
        Err(ScheduleError::Parse(_))
    ));
}

#[test]
fn test_sheet_index_out_of_range() {
    let (_dir, path) = write_fixture(fixtures::generate_small_sheet().unwrap());
    let extractor = ExtractorBuilder::new()
        .with_sheet_selector(SheetSelector::Index(3))
        .build()
        .unwrap();

    match extractor.extract_records(&path, "A1:B2") {
        Err(ScheduleError::Config(msg)) => {
            assert_eq!(msg, "Sheet index 3 is out of range (total: 1)")
        }
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_sheet_name_not_found() {
    let (_dir, path) = write_fixture(fixtures::generate_small_sheet().unwrap());
    let extractor = ExtractorBuilder::new()
        .with_sheet_selector(SheetSelector::Name("Расписание".to_string()))
        .build()
        .unwrap();

    assert!(matches!(
        extractor.read_sheet(&path),
        Err(ScheduleError::Config(msg)) if msg.contains("Расписание")
    ));
}

#[test]
fn test_file_size_limit() {
    let (_dir, path) = write_fixture(fixtures::generate_small_sheet().unwrap());
    let extractor = ExtractorBuilder::new()
        .with_max_file_size(16)
        .build()
        .unwrap();

    assert!(matches!(
        extractor.extract_records(&path, "A1:B2"),
        Err(ScheduleError::SecurityViolation(_))
    ));
}
