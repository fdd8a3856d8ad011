// Plaidプロキシハンドラー
//
// パス末尾の操作名からPlaid操作を解決し、ボディまたはクエリのパラメータを
// 操作の位置引数に並べ替えて呼び出す。結果は必ずJSONレスポンスに整形する。

use std::error::Error as StdError;

use lambda_http::http::StatusCode;
use lambda_http::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, HeaderMap,
    HeaderValue,
};
use lambda_http::{Body, Response};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{error, info};

use super::proxy_request::ProxyRequest;
use crate::domain::{
    DEFAULT_DISPLAY_MESSAGE, ErrorBody, PlaidOperation, UnknownOperation, normalize_keys,
};
use crate::infrastructure::{Arguments, PlaidClient, PlaidClientError};

/// Access-Control-Allow-Headersの値
pub const CORS_ALLOW_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept";

/// ハンドラーのエラー型
///
/// どの種別もHTTP 500のエラーレスポンスに変換される。
#[derive(Debug, Error)]
pub enum ProxyError {
    /// 未知の操作名
    #[error(transparent)]
    UnknownOperation(#[from] UnknownOperation),

    /// ボディがJSONとして不正
    #[error("Invalid JSON body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// パラメータがJSONオブジェクトではない
    #[error("Request parameters must be a JSON object, got {0}")]
    InvalidParameters(&'static str),

    /// Plaid API呼び出しの失敗
    #[error(transparent)]
    Client(#[from] PlaidClientError),
}

/// Plaid操作を中継するハンドラー
pub struct PlaidHandler<C>
where
    C: PlaidClient,
{
    /// Plaidクライアント
    client: C,
}

impl<C> PlaidHandler<C>
where
    C: PlaidClient,
{
    /// 新しいPlaidHandlerを作成
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// リクエストを処理してHTTPレスポンスを生成
    ///
    /// 失敗はすべて500のエラーレスポンスに変換するため、このメソッド自体は失敗しない。
    pub async fn handle(&self, request: &ProxyRequest) -> Response<Body> {
        match self.dispatch(request).await {
            Ok(result) => success_response(&result),
            Err(err) => {
                error!(path = %request.path, error = %err, "Plaidリクエスト処理エラー");
                error_response(&err)
            }
        }
    }

    /// 操作を解決して呼び出す
    ///
    /// # 処理フロー
    /// 1. パス末尾から操作を解決（未知ならパラメータを解析せずに終了）
    /// 2. ボディ（優先）またはクエリからパラメータを取得
    /// 3. キーをcamelCaseに正規化
    /// 4. 操作のパラメータ順に位置引数を構築
    /// 5. Plaidクライアントを呼び出す
    pub async fn dispatch(&self, request: &ProxyRequest) -> Result<Value, ProxyError> {
        let operation = PlaidOperation::from_path(&request.path)?;

        let parameters = normalize_keys(parse_parameters(request)?);
        let arguments = order_arguments(operation, &parameters);

        info!(
            operation = %operation,
            provided = arguments.iter().filter(|arg| arg.is_some()).count(),
            expected = arguments.len(),
            "Plaid操作を呼び出し"
        );

        Ok(self.client.invoke(operation, arguments).await?)
    }
}

/// リクエストからパラメータを取得
///
/// ボディがあればJSONとして解析し、なければクエリパラメータを使う。
/// JSONオブジェクト以外（配列・null等）や不正なUTF-8はエラー。
pub fn parse_parameters(request: &ProxyRequest) -> Result<Map<String, Value>, ProxyError> {
    let Some(body) = &request.body else {
        return Ok(request.query_parameters.clone());
    };

    match serde_json::from_slice::<Value>(body)? {
        Value::Object(parameters) => Ok(parameters),
        Value::Null => Err(ProxyError::InvalidParameters("null")),
        Value::Bool(_) => Err(ProxyError::InvalidParameters("boolean")),
        Value::Number(_) => Err(ProxyError::InvalidParameters("number")),
        Value::String(_) => Err(ProxyError::InvalidParameters("string")),
        Value::Array(_) => Err(ProxyError::InvalidParameters("array")),
    }
}

/// 正規化済みパラメータを操作の位置引数に並べ替える
pub fn order_arguments(operation: PlaidOperation, parameters: &Map<String, Value>) -> Arguments {
    operation
        .parameters()
        .iter()
        .map(|name| parameters.get(*name).cloned())
        .collect()
}

/// エラーからレスポンスボディを構築
///
/// Plaidの構造化エラーはcode/type/message/displayMessageを引き継ぐ。
pub fn error_body(error: &ProxyError) -> ErrorBody {
    let stack = render_stack(error);

    match error {
        ProxyError::Client(client_error) => match client_error.api_error() {
            Some(api) => ErrorBody {
                code: api.error_code.clone(),
                error_type: api.error_type.clone(),
                message: api.error_message.clone(),
                display_message: api
                    .display_message
                    .clone()
                    .unwrap_or_else(|| DEFAULT_DISPLAY_MESSAGE.to_string()),
                stack,
            },
            None => ErrorBody::generic(error.to_string(), stack),
        },
        _ => ErrorBody::generic(error.to_string(), stack),
    }
}

/// エラー連鎖を1行ずつ文字列化
fn render_stack(error: &dyn StdError) -> String {
    let mut lines = vec![error.to_string()];

    let mut source = error.source();
    while let Some(cause) = source {
        lines.push(format!("caused by: {}", cause));
        source = cause.source();
    }

    lines.join("\n")
}

/// 成功レスポンス（200）を生成
pub fn success_response(result: &Value) -> Response<Body> {
    build_response(StatusCode::OK, result.to_string())
}

/// エラーレスポンス（500）を生成
pub fn error_response(error: &ProxyError) -> Response<Body> {
    let body = serde_json::to_string(&error_body(error)).unwrap_or_default();
    build_response(StatusCode::INTERNAL_SERVER_ERROR, body)
}

fn build_response(status: StatusCode, body: String) -> Response<Body> {
    let mut response = Response::new(Body::Text(body));
    *response.status_mut() = status;
    *response.headers_mut() = build_cors_headers();
    response
}

/// CORSヘッダーを生成
///
/// - Content-Type: application/json
/// - Access-Control-Allow-Origin: *
/// - Access-Control-Allow-Headers: Origin, X-Requested-With, Content-Type, Accept
pub fn build_cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(CORS_ALLOW_HEADERS),
    );

    headers
}
