//! Builder Module
//!
//! Fluent Builder APIを提供し、`Extractor`インスタンスを段階的に構築する。

use std::path::Path;

use crate::api::{DateFormat, EmptyCellPolicy, OutputShape, SheetSelector};
use crate::classifier::{build, build_cells, build_records};
use crate::error::ScheduleError;
use crate::formatter::DateFormatter;
use crate::grid::{Column, RawSheet};
use crate::labels::Labels;
use crate::parser::WorkbookReader;
use crate::roster::{curriculum_from_sheet, subjects_from_columns, CurriculumEntry, Subject};
use crate::security::{validate_input_path, SecurityConfig};
use crate::types::{CellRange, Extraction, ScheduleRecord};

/// 抽出処理の設定を保持する内部構造体
#[derive(Debug, Clone, Default)]
pub(crate) struct ExtractionConfig {
    /// シート選択方式
    pub sheet_selector: SheetSelector,

    /// 出力の形
    pub output_shape: OutputShape,

    /// 空セルの処理方針
    pub empty_cell_policy: EmptyCellPolicy,

    /// 日付形式（`FlatCellList`のみ）
    pub date_format: DateFormat,

    /// 表示用文字列
    pub labels: Labels,

    /// 入力ファイルの制限
    pub security: SecurityConfig,
}

/// Fluent Builder APIを提供する構造体
///
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxsched::{DateFormat, EmptyCellPolicy, ExtractorBuilder, Labels, OutputShape};
///
/// # fn main() -> Result<(), xlsxsched::ScheduleError> {
/// let extractor = ExtractorBuilder::new()
///     .with_output_shape(OutputShape::FlatCellList)
///     .with_empty_cell_policy(EmptyCellPolicy::self_study())
///     .with_date_format(DateFormat::russian_short())
///     .with_labels(Labels::russian())
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ExtractorBuilder {
    /// 内部設定（構築中）
    config: ExtractionConfig,
}

impl ExtractorBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート選択: 最初のシート
    /// - 出力の形: 列ごとのレコード
    /// - 空セル: スキップ
    /// - 日付形式: ISO 8601 (YYYY-MM-DD)
    /// - 表示用文字列: 英語
    /// - 入力ファイルの上限: 2GB
    pub fn new() -> Self {
        Self::default()
    }

    /// 抽出対象のシートを選択する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use xlsxsched::{ExtractorBuilder, SheetSelector};
    ///
    /// let builder = ExtractorBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Name("Расписание".to_string()));
    /// ```
    pub fn with_sheet_selector(mut self, selector: SheetSelector) -> Self {
        self.config.sheet_selector = selector;
        self
    }

    /// `extract()`が返す結果の形を指定する
    pub fn with_output_shape(mut self, shape: OutputShape) -> Self {
        self.config.output_shape = shape;
        self
    }

    /// 空セルの処理方針を指定する
    ///
    /// `Placeholder`は`OutputShape::FlatCellList`と組み合わせた場合のみ有効です。
    pub fn with_empty_cell_policy(mut self, policy: EmptyCellPolicy) -> Self {
        self.config.empty_cell_policy = policy;
        self
    }

    /// 表示用文字列を指定する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use xlsxsched::{ExtractorBuilder, Labels};
    ///
    /// let builder = ExtractorBuilder::new()
    ///     .with_labels(Labels::russian().with_field_separator("\n"));
    /// ```
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.config.labels = labels;
        self
    }

    /// 日付の出力形式を指定する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use xlsxsched::{DateFormat, ExtractorBuilder};
    ///
    /// let builder = ExtractorBuilder::new()
    ///     .with_date_format(DateFormat::Custom("%d/%m/%Y".to_string()));
    /// ```
    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.config.date_format = format;
        self
    }

    /// 入力ファイルの最大サイズ（バイト）を指定する
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.config.security.max_input_file_size = bytes;
        self
    }

    /// 設定を検証し、`Extractor`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `ScheduleError::Config(String)`: 設定の検証に失敗した場合
    ///   * `EmptyCellPolicy::Placeholder`と`OutputShape::PerColumnRecord`の組み合わせ
    ///   * カスタム日付形式が不正な書式文字列
    ///   * フィールド区切りまたは学科マーカーが空文字列
    pub fn build(self) -> Result<Extractor, ScheduleError> {
        // 1. 空セル方針と出力の形の組み合わせ
        if self.config.output_shape == OutputShape::PerColumnRecord
            && matches!(self.config.empty_cell_policy, EmptyCellPolicy::Placeholder(_))
        {
            return Err(ScheduleError::Config(
                "Empty-cell placeholder requires the flat cell list output shape".to_string(),
            ));
        }

        // 2. カスタム日付形式の検証
        DateFormatter::validate(&self.config.date_format)?;

        // 3. 表示用文字列の検証
        if self.config.labels.field_separator.is_empty() {
            return Err(ScheduleError::Config(
                "Field separator must not be empty".to_string(),
            ));
        }
        if self.config.labels.department_marker.is_empty() {
            return Err(ScheduleError::Config(
                "Department marker must not be empty".to_string(),
            ));
        }

        Ok(Extractor {
            config: self.config,
        })
    }
}

/// 時間割抽出のファサード
///
/// 不変の設定のみを保持するため、スレッド間で共有できます。
/// 各呼び出しは独自にファイルを開き、どの終了経路でも閉じます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxsched::ExtractorBuilder;
///
/// # fn main() -> Result<(), xlsxsched::ScheduleError> {
/// let extractor = ExtractorBuilder::new().build()?;
/// let extraction = extractor.extract("schedule.xlsx", "D6:Z34")?;
/// println!("{}", extraction.to_json_string()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Extractor {
    /// 抽出設定
    config: ExtractionConfig,
}

impl Extractor {
    /// 設定されたシートを読み込む
    ///
    /// # 戻り値
    ///
    /// * `Err(ScheduleError::InvalidPath)` - パスが存在しない、またはディレクトリの場合
    /// * `Err(ScheduleError::Parse)` - スプレッドシートとして解析できない場合
    /// * `Err(ScheduleError::Config)` - 選択したシートが存在しない場合
    pub fn read_sheet<P: AsRef<Path>>(&self, path: P) -> Result<RawSheet, ScheduleError> {
        let path = path.as_ref();
        validate_input_path(path, &self.config.security)?;
        self.open_sheet(path)
    }

    /// 範囲を抽出し、設定された形で返す
    ///
    /// # 処理フロー
    ///
    /// 1. 入力パスの検証
    /// 2. 範囲式の解析
    /// 3. シートの読み込み
    /// 4. 矩形の切り出し
    /// 5. セルの分類と結果の組み立て
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use xlsxsched::{Extraction, ExtractorBuilder};
    ///
    /// # fn main() -> Result<(), xlsxsched::ScheduleError> {
    /// let extractor = ExtractorBuilder::new().build()?;
    /// if let Extraction::Records(records) = extractor.extract("schedule.xlsx", "D6:Z34")? {
    ///     for record in records {
    ///         println!("{:?}: {} jobs", record.date, record.jobs.len());
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn extract<P: AsRef<Path>>(
        &self,
        path: P,
        range: &str,
    ) -> Result<Extraction, ScheduleError> {
        let (sheet, range) = self.load(path.as_ref(), range)?;
        Ok(self.extract_from_sheet(&sheet, range))
    }

    /// 範囲を列ごとのレコードとして抽出する（設定された出力の形によらない）
    pub fn extract_records<P: AsRef<Path>>(
        &self,
        path: P,
        range: &str,
    ) -> Result<Vec<ScheduleRecord>, ScheduleError> {
        let (sheet, range) = self.load(path.as_ref(), range)?;
        let columns = self.select_columns(&sheet, range);
        Ok(build_records(&columns, &self.config.labels))
    }

    /// 範囲を列ごとの表示文字列として抽出する（設定された出力の形によらない）
    pub fn extract_cells<P: AsRef<Path>>(
        &self,
        path: P,
        range: &str,
    ) -> Result<Vec<Vec<String>>, ScheduleError> {
        let (sheet, range) = self.load(path.as_ref(), range)?;
        let columns = self.select_columns(&sheet, range);
        Ok(build_cells(
            &columns,
            &self.config.labels,
            &self.config.empty_cell_policy,
            &self.config.date_format,
        ))
    }

    /// 読み込み済みのシートから抽出する
    ///
    /// 空のシートは警告を出力し、空の結果を返します。
    pub fn extract_from_sheet(&self, sheet: &RawSheet, range: CellRange) -> Extraction {
        let columns = self.select_columns(sheet, range);
        build(
            &columns,
            self.config.output_shape,
            &self.config.labels,
            &self.config.empty_cell_policy,
            &self.config.date_format,
        )
    }

    /// 範囲から科目一覧を読み取る
    pub fn read_subjects<P: AsRef<Path>>(
        &self,
        path: P,
        range: &str,
    ) -> Result<Vec<Subject>, ScheduleError> {
        let (sheet, range) = self.load(path.as_ref(), range)?;
        Ok(subjects_from_columns(self.select_columns(&sheet, range)))
    }

    /// 範囲からカリキュラム表を読み取る
    ///
    /// 通常の範囲は`CURRICULUM_RANGE`です。
    pub fn read_curriculum<P: AsRef<Path>>(
        &self,
        path: P,
        range: &str,
    ) -> Result<Vec<CurriculumEntry>, ScheduleError> {
        let (sheet, range) = self.load(path.as_ref(), range)?;
        if sheet.is_empty() {
            tracing::warn!("sheet is empty, nothing to extract");
            return Ok(Vec::new());
        }
        Ok(curriculum_from_sheet(&sheet, range))
    }

    /// パスを検証し、範囲式を解析してからシートを読み込む
    ///
    /// 範囲式の誤りはファイルを開く前に検出されます。
    fn load(&self, path: &Path, range: &str) -> Result<(RawSheet, CellRange), ScheduleError> {
        validate_input_path(path, &self.config.security)?;
        let range: CellRange = range.parse()?;
        let sheet = self.open_sheet(path)?;
        Ok((sheet, range))
    }

    fn open_sheet(&self, path: &Path) -> Result<RawSheet, ScheduleError> {
        let mut reader = WorkbookReader::open(path)?;
        reader.read_sheet(&self.config.sheet_selector)
    }

    fn select_columns(&self, sheet: &RawSheet, range: CellRange) -> Vec<Column> {
        if sheet.is_empty() {
            tracing::warn!("sheet is empty, nothing to extract");
            return Vec::new();
        }
        if sheet.is_outside(range) {
            tracing::warn!(
                range = %range,
                rows = sheet.height(),
                cols = sheet.width(),
                "selection lies outside the populated sheet"
            );
        }

        let (rows, cols) = range.size();
        tracing::debug!(range = %range, rows, cols, "selecting rectangle");
        sheet.select(range)
    }
}
