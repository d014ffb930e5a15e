//! Workbook Reader
//!
//! calamineのラッパーとして、ワークブックを開きシートを実体化します。

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook_auto, Reader, Sheets};

use crate::api::SheetSelector;
use crate::error::ScheduleError;
use crate::grid::RawSheet;

/// ワークブックリーダー
///
/// 形式（xlsx / xlsm / xlsb / xls / ods）は拡張子と内容から自動判定されます。
/// ファイルハンドルはリーダーの破棄時に閉じられます。
pub(crate) struct WorkbookReader {
    workbook: Sheets<BufReader<File>>,
}

impl WorkbookReader {
    /// ワークブックを開く
    ///
    /// パスの検証は呼び出し側（`security::validate_input_path`）で行います。
    ///
    /// # 戻り値
    ///
    /// * `Err(ScheduleError::Parse)` - スプレッドシートとして開けない場合
    pub fn open(path: &Path) -> Result<Self, ScheduleError> {
        let workbook = open_workbook_auto(path)?;
        tracing::debug!(path = %path.display(), "opened workbook");
        Ok(Self { workbook })
    }

    /// すべてのシート名を取得
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    /// シート選択方式に基づいてシート名を決定
    ///
    /// # 戻り値
    ///
    /// * `Err(ScheduleError::Config)` - シートが見つからない、またはインデックスが範囲外の場合
    pub fn select_sheet(&self, selector: &SheetSelector) -> Result<String, ScheduleError> {
        let all_sheet_names = self.sheet_names();

        match selector {
            SheetSelector::Index(index) => all_sheet_names.get(*index).cloned().ok_or_else(|| {
                ScheduleError::Config(format!(
                    "Sheet index {} is out of range (total: {})",
                    index,
                    all_sheet_names.len()
                ))
            }),

            SheetSelector::Name(name) => {
                if !all_sheet_names.contains(name) {
                    return Err(ScheduleError::Config(format!("Sheet '{}' not found", name)));
                }
                Ok(name.clone())
            }
        }
    }

    /// 選択したシートを読み込み、`RawSheet`に変換する
    ///
    /// 1行目もヘッダーではなくデータとして扱います。
    pub fn read_sheet(&mut self, selector: &SheetSelector) -> Result<RawSheet, ScheduleError> {
        let sheet_name = self.select_sheet(selector)?;
        let range = self.workbook.worksheet_range(&sheet_name)?;
        let sheet = RawSheet::from_range(&range);

        tracing::debug!(
            sheet = %sheet_name,
            rows = sheet.height(),
            cols = sheet.width(),
            "materialized sheet"
        );
        Ok(sheet)
    }
}

// テストは統合テスト（tests/）で実装します。
// 実際のXLSXファイルが必要なため、単体テストではなく統合テストとして実装します。
