//! Output Module
//!
//! 抽出結果をJSONとして出力するモジュール。
//!
//! 出力は`serde_json`の整形済み形式です。同じ入力に対しては常に同じバイト列になります。

use std::io::Write;

use crate::error::ScheduleError;
use crate::types::Extraction;

impl Extraction {
    /// 整形済みJSON文字列に変換する
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use xlsxsched::{Extraction, ScheduleRecord};
    ///
    /// let extraction = Extraction::Records(vec![ScheduleRecord::default()]);
    /// let json = extraction.to_json_string().unwrap();
    /// assert!(json.contains("\"date\": null"));
    /// ```
    pub fn to_json_string(&self) -> Result<String, ScheduleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 整形済みJSONをライターに書き出す
    ///
    /// # 引数
    ///
    /// * `writer` - 出力先のライター（末尾に改行を1つ付加します）
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<(), ScheduleError> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
