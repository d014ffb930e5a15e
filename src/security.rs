//! Security Module
//!
//! 入力ファイルの検証を行うモジュール。
//! 解析を始める前に、パスが通常のファイルであることとサイズ上限を確認します。

use std::fs;
use std::io;
use std::path::Path;

use crate::error::ScheduleError;

/// セキュリティ設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    /// デフォルト: 2GB (2_147_483_648 bytes)
    pub max_input_file_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: 2_147_483_648, // 2GB
        }
    }
}

/// 入力パスの検証
///
/// # 戻り値
///
/// * `Ok(())` - 通常のファイルで、サイズが上限以内の場合
/// * `Err(ScheduleError::InvalidPath)` - 存在しない、またはディレクトリなど通常のファイルでない場合
/// * `Err(ScheduleError::SecurityViolation)` - サイズが上限を超える場合
pub(crate) fn validate_input_path(path: &Path, config: &SecurityConfig) -> Result<(), ScheduleError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ScheduleError::InvalidPath(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };

    if !metadata.is_file() {
        return Err(ScheduleError::InvalidPath(path.to_path_buf()));
    }

    if metadata.len() > config.max_input_file_size {
        return Err(ScheduleError::SecurityViolation(format!(
            "Input file size exceeds maximum: {} bytes (max: {} bytes)",
            metadata.len(),
            config.max_input_file_size
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.xlsx");
        match validate_input_path(&path, &SecurityConfig::default()) {
            Err(ScheduleError::InvalidPath(p)) => assert_eq!(p, path),
            other => panic!("Expected InvalidPath, got {:?}", other),
        }
    }

    #[test]
    fn test_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            validate_input_path(dir.path(), &SecurityConfig::default()),
            Err(ScheduleError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_regular_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"data").unwrap();
        assert!(validate_input_path(file.path(), &SecurityConfig::default()).is_ok());
    }

    #[test]
    fn test_size_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 64]).unwrap();
        let config = SecurityConfig {
            max_input_file_size: 16,
        };
        assert!(matches!(
            validate_input_path(file.path(), &config),
            Err(ScheduleError::SecurityViolation(msg)) if msg.contains("64 bytes")
        ));
    }
}
