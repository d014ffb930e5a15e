//! Formatter Module
//!
//! セル値の変換処理を提供するモジュール。
//! シリアル日付値のデコードと、複数フィールドの授業セルのテンプレート整形を行います。

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{Days, NaiveDate};

use crate::api::DateFormat;
use crate::error::ScheduleError;
use crate::labels::Labels;

/// 日付フォーマッター
///
/// スプレッドシートのシリアル日付値をカレンダー日付に変換します。
///
/// # エポックシステム
///
/// 1900年システム: 1899年12月30日起算（1900年うるう年バグを考慮済み）
///
/// - シリアル値25569 = 1970-01-01
/// - シリアル値44197 = 2021-01-01
#[derive(Debug)]
pub(crate) struct DateFormatter;

impl DateFormatter {
    /// 数値がシリアル日付として扱われるかを判定
    ///
    /// 文字列化したときに数字のみになる値、つまり0以上の整数が対象です。
    pub fn is_serial(value: f64) -> bool {
        value.is_finite() && value >= 0.0 && value.fract() == 0.0
    }

    /// シリアル値をカレンダー日付に変換
    ///
    /// # 戻り値
    ///
    /// * `Some(NaiveDate)` - シリアル日付の場合
    /// * `None` - 整数でない、負の値、または表現可能な日付範囲を超える場合
    pub fn decode(serial: f64) -> Option<NaiveDate> {
        if !Self::is_serial(serial) || serial > u32::MAX as f64 {
            return None;
        }
        NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_days(Days::new(serial as u64))
    }

    /// 日付を文字列化
    ///
    /// `Extractor`経由では`build()`時に検証済みのフォーマットのみが渡されます。
    /// ISO 8601へのフォールバックは、未検証のフォーマットで直接呼び出した場合にのみ発生します。
    pub fn format(date: NaiveDate, format: &DateFormat) -> String {
        match format {
            DateFormat::Iso8601 => date.format("%Y-%m-%d").to_string(),
            DateFormat::Custom(format_str) => {
                let mut out = String::new();
                match write!(out, "{}", date.format(format_str)) {
                    Ok(()) => out,
                    Err(_) => date.format("%Y-%m-%d").to_string(),
                }
            }
        }
    }

    /// カスタム日付形式を検証
    pub fn validate(format: &DateFormat) -> Result<(), ScheduleError> {
        if let DateFormat::Custom(format_str) = format {
            if format_str.is_empty()
                || StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error))
            {
                return Err(ScheduleError::Config(format!(
                    "Invalid date format string: '{}'",
                    format_str
                )));
            }
        }
        Ok(())
    }
}

/// 複数フィールドの授業セルを説明文に整形
///
/// セルが区切り文字列を含まない場合は`None`を返します。
///
/// 最初のフィールドに学科マーカーが含まれる場合はフィールド`[0, 0, 1]`、
/// それ以外は`[0, 1, 2]`を種別・科目・教室として使用します。
/// 2番目以降のフィールドが欠けている（または空の）場合は`not_specified`で置き換えます。
pub(crate) fn describe_job(text: &str, labels: &Labels) -> Option<String> {
    let separator = labels.field_separator.as_str();
    if !text.contains(separator) {
        return None;
    }

    let fields: Vec<&str> = text.split(separator).collect();
    let field = |index: usize| {
        fields
            .get(index)
            .copied()
            .filter(|f| !f.is_empty())
            .unwrap_or(labels.not_specified.as_str())
    };

    let kind = fields[0];
    let rendered = if kind.contains(labels.department_marker.as_str()) {
        labels.render(kind, kind, field(1))
    } else {
        labels.render(kind, field(1), field(2))
    };
    Some(rendered)
}
