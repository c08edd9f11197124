/// ローカル実行用エントリポイント
///
/// 固定のサンプルイベントでハンドラーを1回呼び出し、
/// レスポンスをJSONとして標準出力に書き出す。
use echo_function::application::EchoHandler;
use echo_function::infrastructure::{LogFormat, LoggingConfig, TracingEventLogger, init_logging};
use lambda_runtime::Error;
use serde_json::{Value, json};

fn main() -> Result<(), Error> {
    let config = LoggingConfig::from_env_or(LogFormat::Pretty)?;
    init_logging(config.format);

    let echo_handler = EchoHandler::new(TracingEventLogger);
    let response = echo_handler.handle(sample_event())?;

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

/// API Gatewayリクエスト風のサンプルイベント
fn sample_event() -> Value {
    json!({"httpMethod": "GET", "path": "/data"})
}
