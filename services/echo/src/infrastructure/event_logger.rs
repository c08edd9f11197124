// EventLoggerの実装
//
// 本番用のtracing出力と、テストやローカル検証用のメモリ記録を提供する。

use std::sync::Mutex;

use tracing::info;

use crate::domain::EventLogger;

/// tracing経由で受信イベントを記録する
///
/// `event`フィールドにシリアライズ済みイベントを持つinfoログを1件出力する。
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventLogger;

impl EventLogger for TracingEventLogger {
    fn log_event(&self, serialized_event: &str) {
        info!(event = serialized_event, "Received event: {}", serialized_event);
    }
}

/// 受信イベントをメモリ上に記録する
///
/// ログ行は`Received event: <json>`の形式で保持される。
#[derive(Debug, Default)]
pub struct MemoryEventLogger {
    lines: Mutex<Vec<String>>,
}

impl MemoryEventLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録済みのログ行を取得
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl EventLogger for MemoryEventLogger {
    fn log_event(&self, serialized_event: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(format!("Received event: {serialized_event}"));
    }
}
