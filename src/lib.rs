//! xlsxsched - Weekly class schedule extraction from spreadsheet ranges
//!
//! This crate reads a rectangular region of a spreadsheet whose cells mix serial
//! date numbers, multi-line class descriptions and empty cells, and turns it into
//! one record per column: a calendar date plus the normalized class descriptions.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xlsxsched::ExtractorBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create an extractor with default settings (first sheet, English labels)
//!     let extractor = ExtractorBuilder::new().build()?;
//!
//!     // One record per column of D..Z
//!     let records = extractor.extract_records("schedule.xlsx", "D6:Z34")?;
//!     for record in &records {
//!         println!("{:?}: {:?}", record.date, record.jobs);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use xlsxsched::{DateFormat, EmptyCellPolicy, ExtractorBuilder, Labels, OutputShape};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let extractor = ExtractorBuilder::new()
//!         .with_output_shape(OutputShape::FlatCellList)   // display strings per column
//!         .with_empty_cell_policy(EmptyCellPolicy::self_study())  // "Сампо" for free slots
//!         .with_date_format(DateFormat::russian_short())  // dd.mm.yy
//!         .with_labels(Labels::russian())
//!         .build()?;
//!
//!     let extraction = extractor.extract("schedule.xlsx", "D6:Z34")?;
//!     extraction.write_json(std::io::stdout())?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # In-memory Classification
//!
//! ```rust
//! use xlsxsched::{build_records, select, CellValue, Labels, RawSheet};
//!
//! let sheet = RawSheet::new(vec![
//!     vec![CellValue::Number(44197.0)],
//!     vec![CellValue::String("Лекция\r\nФизика\r\n301".to_string())],
//! ]);
//! let columns = select(&sheet, "A1:B2".parse().unwrap());
//! let records = build_records(&columns, &Labels::default());
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].jobs, vec!["Type: Лекция, discipline: Физика, room: 301"]);
//! assert!(records[1].date.is_none());
//! ```

mod api;
mod builder;
mod classifier;
mod error;
mod formatter;
mod grid;
mod labels;
mod output;
mod parser;
mod roster;
mod security;
mod types;

use chrono::NaiveDate;

// 公開API
pub use api::{DateFormat, EmptyCellPolicy, OutputShape, SheetSelector};
pub use builder::{Extractor, ExtractorBuilder};
pub use classifier::{build_cells, build_records};
pub use error::ScheduleError;
pub use grid::{Column, RawSheet};
pub use labels::Labels;
pub use roster::{CurriculumEntry, Subject, CURRICULUM_RANGE};
pub use types::{CellCoord, CellRange, CellValue, Extraction, ScheduleRecord};

/// 矩形範囲を列単位で切り出す
///
/// 戻り値の長さは常に範囲の列数と一致します。
pub fn select(sheet: &RawSheet, range: CellRange) -> Vec<Column> {
    sheet.select(range)
}

/// シリアル日付（1899-12-30起点の日数）をカレンダー日付に変換する
///
/// 負の値、小数、非有限値は`None`です。
///
/// ```rust
/// use xlsxsched::decode_serial_date;
///
/// assert_eq!(decode_serial_date(44197.0).unwrap().to_string(), "2021-01-01");
/// assert_eq!(decode_serial_date(1.5), None);
/// ```
pub fn decode_serial_date(serial: f64) -> Option<NaiveDate> {
    formatter::DateFormatter::decode(serial)
}
