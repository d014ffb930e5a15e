//! Parser Module
//!
//! calamineを使用したスプレッドシートの読み込み。
//! 選択したシートを`RawSheet`として実体化します。

mod workbook;

pub(crate) use workbook::WorkbookReader;
