// エコーレスポンスのドメインモデル
//
// ホスティングプラットフォームへ返却する固定形状のレスポンスと、
// bodyに埋め込むJSONドキュメントを定義する。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// bodyの`message`フィールドに常に入る挨拶文
pub const GREETING_MESSAGE: &str = "Hello from Azure Functions (migrated from AWS Lambda)!";

/// 成功時のステータスコード（現バージョンでは常にこの値）
pub const STATUS_OK: u16 = 200;

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// レスポンスbodyのJSONドキュメント
///
/// `{"message": <挨拶文>, "input": <受信イベント>}` の形でシリアライズされる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EchoBody {
    pub message: String,
    /// 受信したイベントをそのまま保持する
    pub input: Value,
}

impl EchoBody {
    /// 受信イベントから挨拶文付きのbodyを作成
    pub fn new(input: Value) -> Self {
        Self {
            message: GREETING_MESSAGE.to_string(),
            input,
        }
    }

    /// bodyをJSON文字列に変換
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// プラットフォームへ返却するレスポンス
///
/// サーバーレスプラットフォームが期待する慣例的な形状
/// （`statusCode`, `headers`, `body`）でシリアライズされる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// シリアライズ済みの`EchoBody`
    pub body: String,
}

impl EchoResponse {
    /// JSON bodyを持つ200レスポンスを作成
    ///
    /// # Arguments
    /// * `body` - シリアライズ済みのJSON文字列
    pub fn ok_json(body: String) -> Self {
        Self {
            status_code: STATUS_OK,
            headers: json_headers(),
            body,
        }
    }

    /// bodyを`EchoBody`としてパース
    pub fn parse_body(&self) -> Result<EchoBody, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// `{"Content-Type": "application/json"}` の単一エントリヘッダー
fn json_headers() -> BTreeMap<String, String> {
    BTreeMap::from([(CONTENT_TYPE_HEADER.to_string(), APPLICATION_JSON.to_string())])
}
