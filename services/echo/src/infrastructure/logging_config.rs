// ログ出力設定
//
// 環境変数からログ出力形式を読み込むインフラストラクチャ層コンポーネント。

use std::str::FromStr;

use thiserror::Error;

/// ログ出力形式を指定する環境変数名
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// ログ設定エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggingConfigError {
    #[error("Invalid LOG_FORMAT value: {0} (expected \"json\" or \"pretty\")")]
    InvalidLogFormat(String),
}

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON形式（Lambda/CloudWatch向け、標準出力）
    Json,
    /// 人間が読みやすい形式（ローカル実行向け、標準エラー出力）
    Pretty,
}

impl FromStr for LogFormat {
    type Err = LoggingConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(LoggingConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

/// ログ設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl LoggingConfig {
    /// 環境変数から設定を読み込み
    ///
    /// - LOG_FORMAT: `json` または `pretty`（大文字小文字を区別しない）
    ///
    /// 未設定または空文字の場合は`default_format`を使用する。
    ///
    /// # Errors
    /// LOG_FORMATが認識できない値の場合は`LoggingConfigError::InvalidLogFormat`
    pub fn from_env_or(default_format: LogFormat) -> Result<Self, LoggingConfigError> {
        let format = match std::env::var(LOG_FORMAT_ENV) {
            Ok(value) if !value.trim().is_empty() => value.parse()?,
            _ => default_format,
        };

        Ok(Self { format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Rust 2024エディションでset_var/remove_varはunsafe
    unsafe fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) };
    }

    unsafe fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    #[test]
    fn test_log_format_parses_case_insensitively() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(" Pretty ".parse::<LogFormat>(), Ok(LogFormat::Pretty));
    }

    #[test]
    fn test_log_format_rejects_unknown_value() {
        assert_eq!(
            "xml".parse::<LogFormat>(),
            Err(LoggingConfigError::InvalidLogFormat("xml".to_string()))
        );
    }

    #[test]
    #[serial(log_format_env)]
    fn test_from_env_or_uses_default_when_unset() {
        unsafe { remove_env(LOG_FORMAT_ENV) };

        let config = LoggingConfig::from_env_or(LogFormat::Pretty).unwrap();

        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    #[serial(log_format_env)]
    fn test_from_env_or_treats_empty_as_unset() {
        unsafe { set_env(LOG_FORMAT_ENV, "  ") };

        let config = LoggingConfig::from_env_or(LogFormat::Json).unwrap();

        assert_eq!(config.format, LogFormat::Json);
        unsafe { remove_env(LOG_FORMAT_ENV) };
    }

    #[test]
    #[serial(log_format_env)]
    fn test_from_env_or_reads_env_var() {
        unsafe { set_env(LOG_FORMAT_ENV, "pretty") };

        let config = LoggingConfig::from_env_or(LogFormat::Json).unwrap();

        assert_eq!(config.format, LogFormat::Pretty);
        unsafe { remove_env(LOG_FORMAT_ENV) };
    }

    #[test]
    #[serial(log_format_env)]
    fn test_from_env_or_returns_error_for_invalid_value() {
        unsafe { set_env(LOG_FORMAT_ENV, "yaml") };

        let result = LoggingConfig::from_env_or(LogFormat::Json);

        assert!(matches!(
            result,
            Err(LoggingConfigError::InvalidLogFormat(ref v)) if v == "yaml"
        ));
        unsafe { remove_env(LOG_FORMAT_ENV) };
    }
}
