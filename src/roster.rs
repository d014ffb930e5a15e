//! Roster Module
//!
//! 時間割ファイルに付随する表（科目一覧とカリキュラム）の読み取り。

use serde::Serialize;

use crate::grid::{Column, RawSheet};
use crate::types::{CellRange, CellValue};

/// カリキュラム表の既定の範囲
pub const CURRICULUM_RANGE: &str = "A39:O51";

/// 科目一覧の1行
///
/// 範囲の1〜4列目（空セルを詰めた後）がそれぞれ略称・名称・学科番号・担当教員に対応します。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub abbr: String,
    pub title: Option<String>,
    pub department: i64,
    pub lecturer: Option<String>,
}

/// カリキュラム表の1行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurriculumEntry {
    pub code: CellValue,
    pub name: CellValue,
    pub kind: CellValue,
    pub hours: CellValue,
}

/// 真偽値として評価したときに真となる値か
///
/// 0、空文字列、`false`、空セルは偽です。
fn is_truthy(cell: &CellValue) -> bool {
    match cell {
        CellValue::Number(n) => *n != 0.0 && !n.is_nan(),
        CellValue::Bool(b) => *b,
        other => other.is_present(),
    }
}

/// セル値の整数部分（数値として解釈できない場合は0）
fn integer_part(cell: &CellValue) -> i64 {
    let value = match cell {
        CellValue::Number(n) => *n,
        CellValue::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        CellValue::Bool(true) => 1.0,
        _ => 0.0,
    };
    if value.is_finite() {
        value.trunc() as i64
    } else {
        0
    }
}

/// 切り出した列から科目一覧を組み立てる
///
/// 各列を真となるセルだけに詰め、空になった列は取り除きます。
/// 行数は最初の列の長さで決まり、他の列に対応するセルがない場合は`None`（学科番号は0）です。
pub fn subjects_from_columns(columns: Vec<Column>) -> Vec<Subject> {
    let compacted: Vec<Column> = columns
        .into_iter()
        .map(|column| column.into_iter().filter(is_truthy).collect::<Column>())
        .filter(|column| !column.is_empty())
        .collect();

    let Some(abbreviations) = compacted.first() else {
        return Vec::new();
    };
    let text_at = |col: usize, row: usize| {
        compacted
            .get(col)
            .and_then(|column| column.get(row))
            .map(CellValue::as_raw_string)
    };

    abbreviations
        .iter()
        .enumerate()
        .map(|(row, abbr)| Subject {
            abbr: abbr.as_raw_string(),
            title: text_at(1, row),
            department: compacted
                .get(2)
                .and_then(|column| column.get(row))
                .map(integer_part)
                .unwrap_or(0),
            lecturer: text_at(3, row),
        })
        .collect()
}

/// シートの範囲からカリキュラム表を読み取る
///
/// 行ごとに範囲の1〜4列目をコード・名称・種別・時間数として取り出し、
/// 名称が偽となる行は除外します。範囲が4列未満の場合、足りない列は空セルです。
pub fn curriculum_from_sheet(sheet: &RawSheet, range: CellRange) -> Vec<CurriculumEntry> {
    let (_, width) = range.size();
    let cell = |row: u32, offset: u32| {
        if offset >= width {
            return CellValue::Empty;
        }
        sheet
            .get(row, range.start.col + offset)
            .cloned()
            .unwrap_or_default()
    };

    range
        .rows()
        .map(|row| CurriculumEntry {
            code: cell(row, 0),
            name: cell(row, 1),
            kind: cell(row, 2),
            hours: cell(row, 3),
        })
        .filter(|entry| is_truthy(&entry.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> CellValue {
        CellValue::String(text.to_string())
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(&CellValue::Empty));
        assert!(!is_truthy(&s("")));
        assert!(!is_truthy(&CellValue::Number(0.0)));
        assert!(!is_truthy(&CellValue::Bool(false)));
        assert!(is_truthy(&CellValue::Number(12.0)));
        assert!(is_truthy(&s("x")));
        assert!(is_truthy(&CellValue::Error("#N/A".to_string())));
    }

    #[test]
    fn test_integer_part() {
        assert_eq!(integer_part(&CellValue::Number(611.9)), 611);
        assert_eq!(integer_part(&s(" 42 ")), 42);
        assert_eq!(integer_part(&s("кафедра")), 0);
        assert_eq!(integer_part(&CellValue::Empty), 0);
        assert_eq!(integer_part(&CellValue::Number(-3.7)), -3);
    }

    #[test]
    fn test_subjects_compact_columns() {
        let columns = vec![
            vec![s("ФИЗ"), CellValue::Empty, s("ХИМ")],
            vec![],
            vec![s("Физика"), s("Химия")],
            vec![CellValue::Number(611.0), s("612")],
            vec![s("Иванов И.И."), CellValue::Empty, s("Петров П.П.")],
        ];
        let subjects = subjects_from_columns(columns);

        assert_eq!(
            subjects,
            vec![
                Subject {
                    abbr: "ФИЗ".to_string(),
                    title: Some("Физика".to_string()),
                    department: 611,
                    lecturer: Some("Иванов И.И.".to_string()),
                },
                Subject {
                    abbr: "ХИМ".to_string(),
                    title: Some("Химия".to_string()),
                    department: 612,
                    lecturer: Some("Петров П.П.".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_subjects_missing_columns() {
        let columns = vec![vec![s("ФИЗ"), s("ХИМ")], vec![s("Физика")]];
        let subjects = subjects_from_columns(columns);

        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[1].title, None);
        assert_eq!(subjects[1].department, 0);
        assert_eq!(subjects[1].lecturer, None);
    }

    #[test]
    fn test_subjects_empty_selection() {
        assert!(subjects_from_columns(vec![vec![CellValue::Empty], vec![]]).is_empty());
    }

    #[test]
    fn test_curriculum_rows() {
        let sheet = RawSheet::new(vec![
            vec![s("Б1.1"), s("Математика"), s("экзамен"), CellValue::Number(144.0)],
            vec![s("Б1.2"), CellValue::Empty, s("зачет"), CellValue::Number(72.0)],
            vec![s("Б1.3"), s("История")],
        ]);
        let entries = curriculum_from_sheet(&sheet, "A1:O5".parse().unwrap());

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, s("Математика"));
        assert_eq!(entries[0].hours, CellValue::Number(144.0));
        assert_eq!(entries[1].code, s("Б1.3"));
        assert_eq!(entries[1].kind, CellValue::Empty);
    }

    #[test]
    fn test_curriculum_narrow_range() {
        let sheet = RawSheet::new(vec![vec![s("Б1.1"), s("Математика"), s("экзамен")]]);
        let entries = curriculum_from_sheet(&sheet, "A1:B1".parse().unwrap());

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, CellValue::Empty);
    }

    #[test]
    fn test_curriculum_json() {
        let entry = CurriculumEntry {
            code: s("Б1.1"),
            name: s("Математика"),
            kind: CellValue::Empty,
            hours: CellValue::Number(144.0),
        };
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"code":"Б1.1","name":"Математика","kind":null,"hours":144.0}"#
        );
    }

    #[test]
    fn test_curriculum_range_constant() {
        let range: CellRange = CURRICULUM_RANGE.parse().unwrap();
        assert_eq!(range.size(), (13, 15));
    }
}
