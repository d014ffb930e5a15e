//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use std::path::PathBuf;

use thiserror::Error;

/// xlsxschedクレート全体で使用するエラー型
///
/// 時間割の抽出処理（ファイルの検証、ワークブックの読み込み、範囲式の解析）
/// で発生するすべてのエラーを統一的に扱います。
///
/// # エラーの種類
///
/// - `InvalidPath`: 入力パスが存在しない、またはディレクトリである
/// - `MalformedRange`: 範囲式（例: `"D6:Z34"`）を2つの座標に解析できない
/// - `Parse`: スプレッドシートの解析中に発生したエラー（calamine由来）
/// - `Config`: ビルダー設定の検証に失敗した
///
/// 空のシートはエラーではありません。空の結果が返され、警告ログが出力されます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxsched::{ExtractorBuilder, ScheduleError};
///
/// # fn main() -> Result<(), ScheduleError> {
/// let extractor = ExtractorBuilder::new().build()?;
/// match extractor.extract_records("schedule.xlsx", "D6:Z34") {
///     Err(ScheduleError::InvalidPath(path)) => eprintln!("not a file: {}", path.display()),
///     Err(e) => return Err(e),
///     Ok(records) => println!("{} days", records.len()),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// スプレッドシートの解析中に発生したエラー
    ///
    /// ファイル形式が不正、破損したファイル、サポートされていない形式などが
    /// 原因となります。
    #[error("Failed to parse spreadsheet: {0}")]
    Parse(#[from] calamine::Error),

    /// 入力パスが通常のファイルを指していない
    ///
    /// 解析を試みる前に検出されます。
    #[error("Path is not a file: {}", .0.display())]
    InvalidPath(PathBuf),

    /// 範囲式を2つのセル座標に解析できない
    ///
    /// `:`区切りがない、列文字が不正、行番号が0、左上と右下が逆転している
    /// などの場合に発生します。
    #[error("Malformed range expression: {0}")]
    MalformedRange(String),

    /// 設定の検証に失敗したエラー
    ///
    /// `ExtractorBuilder::build()`時、またはシート選択時に発生します。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use xlsxsched::{EmptyCellPolicy, ExtractorBuilder, ScheduleError};
    ///
    /// let result = ExtractorBuilder::new()
    ///     .with_empty_cell_policy(EmptyCellPolicy::Placeholder("-".to_string()))
    ///     .build();
    ///
    /// if let Err(ScheduleError::Config(msg)) = result {
    ///     println!("設定エラー: {}", msg);
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力ファイルのサイズが上限を超えた場合に発生します。
    #[error("Security violation: {0}")]
    SecurityViolation(String),

    /// JSONシリアライズ中に発生したエラー
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
