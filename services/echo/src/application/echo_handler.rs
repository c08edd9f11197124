// エコーハンドラー
//
// 受信イベントを1件のログとして記録し、挨拶文と受信イベントを
// JSON bodyに詰めた固定形状のレスポンスを生成する。

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::{EchoBody, EchoResponse, EventLogger};

/// エコーハンドラーのエラー
#[derive(Debug, Error)]
pub enum EchoHandlerError {
    /// イベントまたはbodyのJSONシリアライズ失敗
    #[error("Failed to serialize event: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// イベントをレスポンスへ変換するハンドラー
///
/// 呼び出し間で状態を持たない。ログ出力は注入された`EventLogger`に委譲する。
pub struct EchoHandler<L> {
    logger: L,
}

impl<L: EventLogger> EchoHandler<L> {
    /// 新しいハンドラーを作成
    ///
    /// # Arguments
    /// * `logger` - 受信イベントの記録先
    pub fn new(logger: L) -> Self {
        Self { logger }
    }

    /// 注入されたロガーへの参照
    #[cfg(test)]
    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// イベントを処理してレスポンスを生成
    ///
    /// # Arguments
    /// * `event` - 受信イベント（スキーマ不定、そのままbodyの`input`に入る）
    ///
    /// # Returns
    /// * `Ok(EchoResponse)` - ステータス200、JSONヘッダー、エコーbody
    /// * `Err(EchoHandlerError::Serialization)` - シリアライズ失敗
    pub fn handle(&self, event: Value) -> Result<EchoResponse, EchoHandlerError> {
        let serialized_event = serde_json::to_string(&event)?;
        self.logger.log_event(&serialized_event);

        let body = EchoBody::new(event).to_json()?;
        debug!(body_length = body.len(), "レスポンスbody生成");

        Ok(EchoResponse::ok_json(body))
    }

    /// 任意のシリアライズ可能な値をイベントとして処理
    ///
    /// 型付きのイベントを持つ呼び出し元向けのエントリポイント。
    /// Lambdaランタイム経由の呼び出しは`handle`を使用する。
    /// 値を`serde_json::Value`へ変換してから`handle`に渡す。
    /// 変換できない値（文字列以外のマップキーなど）は入力を加工せず
    /// `EchoHandlerError::Serialization`で失敗する。
    pub fn handle_serializable<E>(&self, event: &E) -> Result<EchoResponse, EchoHandlerError>
    where
        E: Serialize + ?Sized,
    {
        let event = serde_json::to_value(event)?;
        self.handle(event)
    }
}
