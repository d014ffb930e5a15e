//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// 抽出対象のシート選択方式
///
/// 時間割ファイルは通常、最初のシートにのみデータを持つため、
/// デフォルトは`Index(0)`です。選択されなかったシートは無視されます。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SheetSelector {
    /// インデックスで単一シートを指定（0始まり）
    Index(usize),

    /// シート名で単一シートを指定
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Index(0)
    }
}

/// 抽出結果の形
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OutputShape {
    /// 列ごとに1つの`ScheduleRecord`（日付と授業リスト）を出力
    ///
    /// # 出力例（JSON）
    ///
    /// ```json
    /// [
    ///   {"date": "2021-01-01", "jobs": ["Type: Лекция, discipline: Физика, room: 301"]},
    ///   {"date": null, "jobs": []}
    /// ]
    /// ```
    #[default]
    PerColumnRecord,

    /// 列ごとに表示用文字列のリストを出力
    ///
    /// 日付セルは`DateFormat`に従って文字列化され、空セルは
    /// `EmptyCellPolicy`に従って処理されます。
    ///
    /// # 出力例（JSON）
    ///
    /// ```json
    /// [
    ///   ["01.01.21", "Сампо", "Тип занятия: Лекция, дисциплина: Физика, аудитория: 301"]
    /// ]
    /// ```
    FlatCellList,
}

/// 空セルの処理方針
///
/// `OutputShape::FlatCellList`でのみ意味を持ちます。
/// `PerColumnRecord`では空セルは常にスキップされ、`Placeholder`との組み合わせは
/// `build()`時に設定エラーになります。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum EmptyCellPolicy {
    /// 空セルを出力しない
    #[default]
    Skip,

    /// 空セルの位置に指定した文字列を出力する
    Placeholder(String),
}

impl EmptyCellPolicy {
    /// 空きコマを「Сампо」（самоподготовка、自習）として出力する
    pub fn self_study() -> Self {
        EmptyCellPolicy::Placeholder("Сампо".to_string())
    }
}

/// 日付の出力形式
///
/// `FlatCellList`で日付セルを文字列化する際の形式を指定します。
/// `PerColumnRecord`の`date`フィールドは常にISO 8601としてシリアライズされます。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum DateFormat {
    /// ISO 8601形式（YYYY-MM-DD）
    ///
    /// 例: `2021-01-01`
    #[default]
    Iso8601,

    /// カスタム形式（chrono互換フォーマット文字列）
    ///
    /// # フォーマット指定子（主要なもの）
    ///
    /// - `%Y`: 4桁の年、`%y`: 2桁の年
    /// - `%m`: 2桁の月
    /// - `%d`: 2桁の日
    ///
    /// 例: `DateFormat::Custom("%d.%m.%y".to_string())` → `01.01.21`
    Custom(String),
}

impl DateFormat {
    /// ロシア語ロケールの短い日付形式（`dd.mm.yy`）
    pub fn russian_short() -> Self {
        DateFormat::Custom("%d.%m.%y".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(SheetSelector::default(), SheetSelector::Index(0));
        assert_eq!(OutputShape::default(), OutputShape::PerColumnRecord);
        assert_eq!(EmptyCellPolicy::default(), EmptyCellPolicy::Skip);
        assert_eq!(DateFormat::default(), DateFormat::Iso8601);
    }

    #[test]
    fn test_russian_short() {
        assert_eq!(
            DateFormat::russian_short(),
            DateFormat::Custom("%d.%m.%y".to_string())
        );
    }
}
