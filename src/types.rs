//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use calamine::Data;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Excelの最大行数（1,048,576）
pub(crate) const MAX_ROWS: u32 = 1_048_576;

/// Excelの最大列数（16,384 = XFD）
pub(crate) const MAX_COLS: u32 = 16_384;

/// セルの値を表す列挙型
///
/// JSONには型タグなしでシリアライズされます（数値・文字列・論理値・`null`）。
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    /// 数値（f64）。日付書式付きのセルもシリアル値としてここに入ります。
    Number(f64),

    /// 文字列
    String(String),

    /// 論理値
    Bool(bool),

    /// エラー値（例: #DIV/0!）
    Error(String),

    /// 空セル
    #[default]
    Empty,
}

impl CellValue {
    /// 値が空かどうかを判定
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// 空でない値かどうかを判定
    ///
    /// 空文字列も空として扱います。
    pub fn is_present(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// 値を文字列として取得（書式適用前）
    pub fn as_raw_string(&self) -> String {
        match self {
            CellValue::Number(n) => n.to_string(),
            CellValue::String(s) => s.clone(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Error(e) => e.clone(),
            CellValue::Empty => String::new(),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            // 日付書式のセルもシリアル値として扱う
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::String(s) => CellValue::String(decode_ooxml_escapes(s).into_owned()),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::Error(e) => CellValue::Error(e.to_string()),
            Data::Empty => CellValue::Empty,
            // ISO 8601の日時・期間文字列（ODS由来）
            other => CellValue::String(other.to_string()),
        }
    }
}

/// OOXMLの`_xHHHH_`エスケープを復元する
///
/// xlsxの共有文字列では改行の`\r`が`_x000D_`として保存され、calamineはこれをそのまま返します。
/// リテラルの`_x000D_`は`_x005F_x000D_`として保存されるため、復元した`_`は再走査しません。
pub(crate) fn decode_ooxml_escapes(text: &str) -> Cow<'_, str> {
    if !text.contains("_x") {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find("_x") {
        let (head, tail) = rest.split_at(pos);
        out.push_str(head);
        match decode_escape(tail) {
            Some(c) => {
                out.push(c);
                rest = &tail[7..];
            }
            None => {
                out.push_str("_x");
                rest = &tail[2..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// `_xHHHH_`で始まる場合、その文字を返す
fn decode_escape(s: &str) -> Option<char> {
    let bytes = s.as_bytes();
    if bytes.len() < 7 || bytes[6] != b'_' || !bytes[2..6].iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let code = u32::from_str_radix(s.get(2..6)?, 16).ok()?;
    char::from_u32(code)
}

/// セル座標（0始まり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub row: u32,
    pub col: u32,
}

impl CellCoord {
    /// 新しい座標を生成
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// A1形式のアドレスを解析する（例: `"D6"` → row 5, col 3）
    ///
    /// 列文字は大文字・小文字を区別しません。前後の空白は無視されます。
    ///
    /// # 戻り値
    ///
    /// * `Ok(CellCoord)` - 解析に成功した場合
    /// * `Err(ScheduleError::MalformedRange)` - 列文字や行番号が不正な場合、
    ///   またはExcelの最大行数・列数を超える場合
    pub fn from_a1(address: &str) -> Result<Self, ScheduleError> {
        let address = address.trim();
        let malformed = || ScheduleError::MalformedRange(format!("invalid cell address '{}'", address));

        let split = address
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(address.len());
        let (letters, digits) = address.split_at(split);

        if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let mut col: u32 = 0;
        for b in letters.bytes() {
            let digit = u32::from(b.to_ascii_uppercase() - b'A') + 1;
            col = col
                .checked_mul(26)
                .and_then(|c| c.checked_add(digit))
                .filter(|c| *c <= MAX_COLS)
                .ok_or_else(malformed)?;
        }

        let row: u32 = digits.parse().map_err(|_| malformed())?;
        if row == 0 || row > MAX_ROWS {
            return Err(malformed());
        }

        Ok(Self::new(row - 1, col - 1))
    }

    /// A1形式の文字列に変換（例: (0, 0) -> "A1"）
    #[allow(clippy::wrong_self_convention)]
    pub fn to_a1_notation(&self) -> String {
        format!("{}{}", col_index_to_letter(self.col), self.row + 1)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_notation())
    }
}

/// 列インデックスを文字列に変換（0 -> "A", 25 -> "Z", 26 -> "AA"）
pub(crate) fn col_index_to_letter(mut col: u32) -> String {
    let mut result = String::new();
    loop {
        let remainder = col % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    result
}

/// セル範囲（両端を含む矩形）
///
/// 不変条件: `start.row <= end.row` かつ `start.col <= end.col`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start: CellCoord,
    pub end: CellCoord,
}

impl CellRange {
    /// 座標の順序を検証して範囲を生成
    ///
    /// # 戻り値
    ///
    /// * `Err(ScheduleError::MalformedRange)` - 左上が右下より後ろにある場合
    pub fn new(start: CellCoord, end: CellCoord) -> Result<Self, ScheduleError> {
        if start.row > end.row || start.col > end.col {
            return Err(ScheduleError::MalformedRange(format!(
                "top-left {} is not before bottom-right {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// 範囲のサイズ（行数 × 列数）を計算
    pub fn size(&self) -> (u32, u32) {
        let rows = self.end.row - self.start.row + 1;
        let cols = self.end.col - self.start.col + 1;
        (rows, cols)
    }

    /// 列インデックスを左から順に返す
    pub fn columns(&self) -> std::ops::RangeInclusive<u32> {
        self.start.col..=self.end.col
    }

    /// 行インデックスを上から順に返す
    pub fn rows(&self) -> std::ops::RangeInclusive<u32> {
        self.start.row..=self.end.row
    }
}

impl FromStr for CellRange {
    type Err = ScheduleError;

    /// `"D6:Z34"`形式の範囲式を解析する
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s.split_once(':').ok_or_else(|| {
            ScheduleError::MalformedRange(format!("missing ':' separator in '{}'", s))
        })?;
        CellRange::new(CellCoord::from_a1(start)?, CellCoord::from_a1(end)?)
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// 1列（1日）分の時間割レコード
///
/// `date`は列内で最後に見つかった日付セルの値です。日付セルがない列では`None`。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// カレンダー日付（ISO 8601でシリアライズ）
    pub date: Option<NaiveDate>,

    /// 正規化された授業の説明文（上から順）
    pub jobs: Vec<String>,
}

/// 抽出結果
///
/// `OutputShape`に応じていずれかの形になります。JSONには型タグなしで出力されます。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Extraction {
    /// 列ごとのレコード（`OutputShape::PerColumnRecord`）
    Records(Vec<ScheduleRecord>),

    /// 列ごとの表示文字列（`OutputShape::FlatCellList`）
    Cells(Vec<Vec<String>>),
}

impl Extraction {
    /// 列数（空の結果の場合は0）
    pub fn len(&self) -> usize {
        match self {
            Extraction::Records(records) => records.len(),
            Extraction::Cells(cells) => cells.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
