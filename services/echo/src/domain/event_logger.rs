/// イベントログ出力の抽象
///
/// ハンドラーは受信イベントの記録をこのトレイト経由で行う。
/// 本番では`tracing`ベースの実装、テストではメモリ上に記録する実装を注入する。
pub trait EventLogger: Send + Sync {
    /// シリアライズ済みのイベントを1件記録する
    fn log_event(&self, serialized_event: &str);
}
