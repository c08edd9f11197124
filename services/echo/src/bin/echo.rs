/// エコーLambdaエントリポイント
///
/// 受信したイベントを記録し、挨拶文とイベントをJSON bodyに詰めた
/// `{statusCode, headers, body}`形式のレスポンスを返却する。
use echo_function::application::EchoHandler;
use echo_function::domain::EventLogger;
use echo_function::infrastructure::{LogFormat, LoggingConfig, TracingEventLogger, init_logging};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::{info, info_span};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    let config = LoggingConfig::from_env_or(LogFormat::Json)?;
    init_logging(config.format);

    info!("エコーLambda関数を初期化");

    // warm start間でハンドラーを共有する
    let echo_handler = EchoHandler::new(TracingEventLogger);
    let echo_handler = &echo_handler;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(echo_handler, event).await
    }))
    .await
}

/// Lambda関数のメインハンドラー
///
/// コンテキストはリクエストIDをspanに付与するためだけに使用する。
async fn handler<L: EventLogger>(
    echo_handler: &EchoHandler<L>,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let (payload, context) = event.into_parts();

    let span = info_span!("invocation", request_id = %context.request_id);
    let _guard = span.enter();

    let response = echo_handler.handle(payload)?;

    Ok(serde_json::to_value(response)?)
}
