//! Labels Module
//!
//! 授業の説明文テンプレートで使用する表示用文字列。
//! 配備先のロケールに合わせて差し替えられるよう、プロトコル値ではなく設定として扱います。

use serde::{Deserialize, Serialize};

/// 表示用文字列とセル区切りの設定
///
/// テンプレート: `"{kind}: {type}, {discipline}: {discipline}, {room}: {room}"`
///
/// `#[serde(default)]`により、JSONで一部のフィールドだけを上書きできます。
///
/// ```rust
/// use xlsxsched::Labels;
///
/// let labels: Labels = serde_json::from_str(r#"{"room": "aud."}"#).unwrap();
/// assert_eq!(labels.room, "aud.");
/// assert_eq!(labels.kind, "Type");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// 授業種別のラベル
    pub kind: String,

    /// 科目のラベル
    pub discipline: String,

    /// 教室のラベル
    pub room: String,

    /// 欠けているフィールドの代替文字列
    pub not_specified: String,

    /// 学科マーカー。最初のフィールドに含まれる場合、フィールド`[0, 0, 1]`で描画する
    pub department_marker: String,

    /// 複数フィールドセルの区切り文字列
    pub field_separator: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            kind: "Type".to_string(),
            discipline: "discipline".to_string(),
            room: "room".to_string(),
            not_specified: "not specified".to_string(),
            department_marker: "СР".to_string(),
            field_separator: "\r\n".to_string(),
        }
    }
}

impl Labels {
    /// ロシア語の表示用文字列
    pub fn russian() -> Self {
        Self {
            kind: "Тип занятия".to_string(),
            discipline: "дисциплина".to_string(),
            room: "аудитория".to_string(),
            not_specified: "Не указана".to_string(),
            ..Self::default()
        }
    }

    /// 区切り文字列を変更する
    pub fn with_field_separator(mut self, separator: impl Into<String>) -> Self {
        self.field_separator = separator.into();
        self
    }

    /// テンプレートに値を埋め込む
    pub(crate) fn render(&self, kind: &str, discipline: &str, room: &str) -> String {
        format!(
            "{}: {}, {}: {}, {}: {}",
            self.kind, kind, self.discipline, discipline, self.room, room
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default() {
        let labels = Labels::default();
        assert_eq!(
            labels.render("Лекция", "Физика", "301"),
            "Type: Лекция, discipline: Физика, room: 301"
        );
    }

    #[test]
    fn test_render_russian() {
        let labels = Labels::russian();
        assert_eq!(
            labels.render("Лекция", "Физика", "301"),
            "Тип занятия: Лекция, дисциплина: Физика, аудитория: 301"
        );
        assert_eq!(labels.not_specified, "Не указана");
        assert_eq!(labels.field_separator, "\r\n");
    }

    #[test]
    fn test_partial_deserialize() {
        let labels: Labels = serde_json::from_str(r#"{"field_separator": "\n"}"#).unwrap();
        assert_eq!(labels.field_separator, "\n");
        assert_eq!(labels.department_marker, "СР");
    }

    #[test]
    fn test_with_field_separator() {
        let labels = Labels::default().with_field_separator("\n");
        assert_eq!(labels.field_separator, "\n");
    }
}
