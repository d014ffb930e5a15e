//! Grid Module
//!
//! シートを稠密な2次元配列として保持し、矩形範囲を列単位で切り出すモジュール。
//!
//! 座標はシート上の絶対位置（行0・列0がA1）です。実体化された範囲外の位置は
//! 空セルとして扱われ、エラーにはなりません。

use calamine::{Data, Range};

use crate::types::{CellRange, CellValue};

/// 選択された1列分のセル値（上から順）
pub type Column = Vec<CellValue>;

/// シート全体のセル値
///
/// 行ごとの長さは揃っていない場合があります（末尾の空セルは保持しない）。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSheet {
    rows: Vec<Vec<CellValue>>,
}

impl RawSheet {
    /// 行のリストからシートを生成する
    ///
    /// 行0がシートの1行目、各行の要素0がA列に対応します。
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// calamineの`Range`から生成する
    ///
    /// `Range`は最初の使用セルを起点とする相対座標を持つため、
    /// ここで絶対座標に配置し直します。
    pub(crate) fn from_range(range: &Range<Data>) -> Self {
        let Some((start_row, start_col)) = range.start() else {
            return Self::default();
        };

        let mut rows: Vec<Vec<CellValue>> = Vec::new();
        for (rel_row, rel_col, data) in range.used_cells() {
            let row = start_row as usize + rel_row;
            let col = start_col as usize + rel_col;

            if rows.len() <= row {
                rows.resize_with(row + 1, Vec::new);
            }
            let cells = &mut rows[row];
            if cells.len() <= col {
                cells.resize(col + 1, CellValue::Empty);
            }
            cells[col] = CellValue::from(data);
        }

        Self { rows }
    }

    /// 値を持つセルが1つもないか
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.iter().all(CellValue::is_empty))
    }

    /// 実体化された行数
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// 最も長い行の列数
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// 指定位置のセル値（範囲外は`None`）
    pub fn get(&self, row: u32, col: u32) -> Option<&CellValue> {
        self.rows.get(row as usize)?.get(col as usize)
    }

    /// 範囲全体が実体化された領域の外にあるか
    pub fn is_outside(&self, range: CellRange) -> bool {
        range.start.row as usize >= self.height() || range.start.col as usize >= self.width()
    }

    /// 矩形範囲を列単位で切り出す
    ///
    /// 左から`range.start.col..=range.end.col`の各列について、
    /// 上から`range.start.row..=range.end.row`のセル値を返します。
    /// 存在しない行・セルは`CellValue::Empty`になります。
    ///
    /// 空の列も省略せずに出力するため、戻り値の長さは常に範囲の列数と一致します。
    pub fn select(&self, range: CellRange) -> Vec<Column> {
        range
            .columns()
            .map(|col| {
                range
                    .rows()
                    .map(|row| self.get(row, col).cloned().unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}
