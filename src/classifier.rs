//! Classifier Module
//!
//! 切り出した列を上から順に走査し、各セルを分類して結果を組み立てるモジュール。
//!
//! 個々のセルの異常でエラーになることはありません。意味を持たないセル
//! （レイアウト用の数値や区切りのない文字列）は黙って無視されます。

use chrono::NaiveDate;

use crate::api::{DateFormat, EmptyCellPolicy, OutputShape};
use crate::formatter::{describe_job, DateFormatter};
use crate::grid::Column;
use crate::labels::Labels;
use crate::types::{CellValue, Extraction, ScheduleRecord};

/// セルの分類
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CellKind {
    /// シリアル日付
    SerialDate(NaiveDate),

    /// 整形済みの授業説明文
    Job(String),

    /// 空セル
    Empty,

    /// 時間割として意味を持たないセル
    Other,
}

pub(crate) fn classify(cell: &CellValue, labels: &Labels) -> CellKind {
    match cell {
        CellValue::Number(n) => DateFormatter::decode(*n)
            .map(CellKind::SerialDate)
            .unwrap_or(CellKind::Other),
        CellValue::String(s) if s.is_empty() => CellKind::Empty,
        CellValue::String(s) => describe_job(s, labels)
            .map(CellKind::Job)
            .unwrap_or(CellKind::Other),
        CellValue::Empty => CellKind::Empty,
        CellValue::Bool(_) | CellValue::Error(_) => CellKind::Other,
    }
}

/// 列ごとに1つの`ScheduleRecord`を組み立てる
///
/// レコードは列と同じ位置に事前に確保され、その場で埋められます。
/// 日付セルは列の`date`を上書きする（最後の日付が勝つ）一方、
/// 授業セルは常に`jobs`に追加されます。空セルはスキップされます。
///
/// ```rust
/// use xlsxsched::{build_records, CellValue, Labels};
///
/// let columns = vec![vec![
///     CellValue::Number(44197.0),
///     CellValue::String("Лекция\r\nФизика\r\n301".to_string()),
///     CellValue::Empty,
/// ]];
/// let records = build_records(&columns, &Labels::default());
///
/// assert_eq!(records[0].date.unwrap().to_string(), "2021-01-01");
/// assert_eq!(records[0].jobs, vec!["Type: Лекция, discipline: Физика, room: 301"]);
/// ```
pub fn build_records(columns: &[Column], labels: &Labels) -> Vec<ScheduleRecord> {
    let mut records = vec![ScheduleRecord::default(); columns.len()];

    for (record, column) in records.iter_mut().zip(columns) {
        for cell in column {
            match classify(cell, labels) {
                CellKind::SerialDate(date) => record.date = Some(date),
                CellKind::Job(job) => record.jobs.push(job),
                CellKind::Empty | CellKind::Other => {}
            }
        }
    }

    records
}

/// 列ごとに表示用文字列のリストを組み立てる
///
/// 日付セルは`date_format`で文字列化され、空セルは`empty_cells`に従って
/// 出力またはスキップされます。その他のセルは無視されます。
pub fn build_cells(
    columns: &[Column],
    labels: &Labels,
    empty_cells: &EmptyCellPolicy,
    date_format: &DateFormat,
) -> Vec<Vec<String>> {
    columns
        .iter()
        .map(|column| {
            column
                .iter()
                .filter_map(|cell| match classify(cell, labels) {
                    CellKind::SerialDate(date) => Some(DateFormatter::format(date, date_format)),
                    CellKind::Job(job) => Some(job),
                    CellKind::Empty => match empty_cells {
                        EmptyCellPolicy::Placeholder(text) => Some(text.clone()),
                        EmptyCellPolicy::Skip => None,
                    },
                    CellKind::Other => None,
                })
                .collect()
        })
        .collect()
}

/// 出力形に応じて`build_records`または`build_cells`を呼び分ける
pub(crate) fn build(
    columns: &[Column],
    shape: OutputShape,
    labels: &Labels,
    empty_cells: &EmptyCellPolicy,
    date_format: &DateFormat,
) -> Extraction {
    match shape {
        OutputShape::PerColumnRecord => Extraction::Records(build_records(columns, labels)),
        OutputShape::FlatCellList => {
            Extraction::Cells(build_cells(columns, labels, empty_cells, date_format))
        }
    }
}
