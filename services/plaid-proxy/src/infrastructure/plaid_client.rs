// PlaidClient - Plaid API呼び出し
//
// 操作と位置引数を受け取り、Plaid REST APIへのリクエストに変換して送信する。
// 再試行は行わない（1リクエストにつき1操作）。

use super::config::PlaidConfig;
use super::plaid_route::{Authentication, STRIPE_TOKEN_ENDPOINT, route};
use crate::domain::{PlaidOperation, to_snake_case};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, instrument};

/// リクエストタイムアウト（秒）
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// 接続タイムアウト（秒）
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// getAllTransactionsで1ページに取得する件数（Plaidの上限）
const TRANSACTIONS_PAGE_SIZE: u64 = 500;

/// 操作の位置引数（`None`は未指定）
pub type Arguments = Vec<Option<Value>>;

/// Plaid APIが返す構造化エラー
///
/// Plaidはエラー時に以下の形式のJSONを返す:
/// `{error_type, error_code, error_message, display_message, request_id}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaidApiError {
    #[serde(default)]
    pub error_type: String,
    #[serde(default)]
    pub error_code: String,
    #[serde(default)]
    pub error_message: String,
    /// エンドユーザー向けメッセージ（Plaidはnullを返すことがある）
    #[serde(default)]
    pub display_message: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// PlaidClient用エラー型
///
/// # エラー種別
/// - `Api`: Plaidの構造化エラーレスポンス
/// - `Http`: 構造化されていないエラーレスポンス
/// - `Network`: ネットワーク接続エラー
/// - `Decode`: 成功レスポンスのデコード失敗
/// - `Build`: HTTPクライアントの構築失敗
#[derive(Debug, Clone, Error)]
pub enum PlaidClientError {
    /// Plaid APIエラー
    #[error("{}", .error.error_message)]
    Api {
        /// HTTPステータスコード
        status: u16,
        /// Plaidのエラーオブジェクト
        error: PlaidApiError,
    },

    /// HTTPエラー（ステータスコード付き）
    #[error("HTTPエラー: status={status}, message={message}")]
    Http {
        /// HTTPステータスコード
        status: u16,
        /// レスポンスボディ
        message: String,
    },

    /// ネットワークエラー
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// デコードエラー
    #[error("レスポンスのデコードに失敗: {0}")]
    Decode(String),

    /// クライアント構築エラー
    #[error("HTTPクライアントの構築に失敗: {0}")]
    Build(String),
}

impl PlaidClientError {
    /// Plaidの構造化エラーであれば取得
    pub fn api_error(&self) -> Option<&PlaidApiError> {
        match self {
            PlaidClientError::Api { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Plaid操作呼び出し用トレイト
///
/// 実際のHTTPクライアントとテスト用モックを差し替えられるようにする。
#[async_trait]
pub trait PlaidClient: Send + Sync {
    /// 操作を位置引数で呼び出す
    ///
    /// # 引数
    /// * `operation` - 呼び出す操作
    /// * `arguments` - `operation.parameters()`と同じ順序の引数
    ///
    /// # 戻り値
    /// * `Ok(Value)` - Plaidのレスポンス
    /// * `Err(PlaidClientError)` - エラー
    async fn invoke(
        &self,
        operation: PlaidOperation,
        arguments: Arguments,
    ) -> Result<Value, PlaidClientError>;
}

/// Plaid APIへ送るリクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct PlaidRequest {
    /// エンドポイントパス
    pub endpoint: &'static str,
    /// JSONボディ
    pub body: Map<String, Value>,
}

/// 操作と位置引数からPlaid APIリクエストを組み立てる
///
/// 認証情報を先頭に置き、指定された引数だけをsnake_caseのフィールド名で追加する。
pub fn build_request(
    config: &PlaidConfig,
    operation: PlaidOperation,
    arguments: &[Option<Value>],
) -> PlaidRequest {
    let plaid_route = route(operation);
    let mut body = Map::new();

    match plaid_route.authentication {
        Authentication::ClientSecret => {
            body.insert("client_id".to_string(), json!(config.client_id()));
            body.insert("secret".to_string(), json!(config.secret()));
        }
        Authentication::PublicKey => {
            body.insert("public_key".to_string(), json!(config.public_key()));
        }
        Authentication::None => {}
    }

    for (name, argument) in operation.parameters().iter().zip(arguments) {
        if let Some(value) = argument {
            body.insert(to_snake_case(name), value.clone());
        }
    }

    let mut endpoint = plaid_route.endpoint;

    // Stripeのみ専用エンドポイント（processorフィールドは送らない）
    if operation == PlaidOperation::CreateProcessorToken
        && body.get("processor").and_then(Value::as_str) == Some("stripe")
    {
        body.remove("processor");
        endpoint = STRIPE_TOKEN_ENDPOINT;
    }

    PlaidRequest { endpoint, body }
}

/// HttpPlaidClient - reqwestによるPlaid APIクライアント
///
/// Lambdaのコールドスタート時に一度だけ構築し、以降の呼び出しで共有する。
#[derive(Clone)]
pub struct HttpPlaidClient {
    /// HTTPクライアント
    client: Client,
    /// 認証情報と接続先
    config: PlaidConfig,
}

impl std::fmt::Debug for HttpPlaidClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPlaidClient")
            .field("base_url", &self.config.base_url())
            .finish_non_exhaustive()
    }
}

impl HttpPlaidClient {
    /// 設定からHttpPlaidClientを作成
    pub fn new(config: PlaidConfig) -> Result<Self, PlaidClientError> {
        info!(base_url = config.base_url(), "HttpPlaidClientを初期化");

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(concat!("plaid-proxy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PlaidClientError::Build(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 設定を取得
    pub fn config(&self) -> &PlaidConfig {
        &self.config
    }

    /// POSTリクエストを送信し、成功レスポンスを返す
    ///
    /// 2xx以外はPlaidのエラーオブジェクトとしてデコードを試みる。
    async fn post(
        &self,
        request: &PlaidRequest,
    ) -> Result<reqwest::Response, PlaidClientError> {
        let url = self.config.endpoint_url(request.endpoint);
        debug!(url = %url, "Plaid APIリクエスト送信");

        let response = self
            .client
            .post(&url)
            .json(&request.body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, endpoint = request.endpoint, "Plaid APIリクエスト失敗");
                PlaidClientError::Network(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.map_err(|e| {
            error!(
                status = %status,
                error = %e,
                endpoint = request.endpoint,
                "Plaid APIエラーレスポンスの読み取り失敗"
            );
            PlaidClientError::Decode(e.to_string())
        })?;
        error!(
            status = %status,
            endpoint = request.endpoint,
            "Plaid APIエラーレスポンス"
        );

        match serde_json::from_str::<PlaidApiError>(&body) {
            Ok(error) if !error.error_code.is_empty() => Err(PlaidClientError::Api {
                status: status.as_u16(),
                error,
            }),
            _ => Err(PlaidClientError::Http {
                status: status.as_u16(),
                message: body,
            }),
        }
    }

    /// JSONレスポンスを返す操作を呼び出す
    async fn post_json(&self, request: &PlaidRequest) -> Result<Value, PlaidClientError> {
        self.post(request)
            .await?
            .json::<Value>()
            .await
            .map_err(|e| PlaidClientError::Decode(e.to_string()))
    }

    /// バイナリ（PDF）レスポンスを返す操作を呼び出す
    ///
    /// 結果は `{"type": "Buffer", "data": [..]}` 形式で返す。
    async fn post_binary(&self, request: &PlaidRequest) -> Result<Value, PlaidClientError> {
        let bytes = self
            .post(request)
            .await?
            .bytes()
            .await
            .map_err(|e| PlaidClientError::Decode(e.to_string()))?;

        Ok(json!({ "type": "Buffer", "data": bytes.to_vec() }))
    }

    /// 全取引をページングで取得する
    ///
    /// `total_transactions`に達するか空ページが返るまで500件ずつ取得し、
    /// 最初のレスポンスの`transactions`を全件で置き換えて返す。
    async fn get_all_transactions(
        &self,
        mut request: PlaidRequest,
    ) -> Result<Value, PlaidClientError> {
        let mut options = match request.body.remove("options") {
            Some(Value::Object(options)) => options,
            _ => Map::new(),
        };
        options.insert("count".to_string(), json!(TRANSACTIONS_PAGE_SIZE));

        let mut transactions: Vec<Value> = Vec::new();
        let mut first_page: Option<Value> = None;

        loop {
            options.insert("offset".to_string(), json!(transactions.len()));
            request
                .body
                .insert("options".to_string(), Value::Object(options.clone()));

            let mut page = self.post_json(&request).await?;
            let total = page
                .get("total_transactions")
                .and_then(Value::as_u64)
                .unwrap_or(0);

            let page_transactions = match page.get_mut("transactions").map(Value::take) {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            };
            let received = page_transactions.len();
            transactions.extend(page_transactions);

            if first_page.is_none() {
                first_page = Some(page);
            }

            debug!(received, collected = transactions.len(), total, "取引ページ取得");

            if received == 0 || transactions.len() as u64 >= total {
                break;
            }
        }

        let mut result = first_page.unwrap_or_else(|| json!({}));
        if let Value::Object(map) = &mut result {
            map.insert("transactions".to_string(), Value::Array(transactions));
        }
        Ok(result)
    }
}

#[async_trait]
impl PlaidClient for HttpPlaidClient {
    #[instrument(skip_all, fields(operation = %operation))]
    async fn invoke(
        &self,
        operation: PlaidOperation,
        arguments: Arguments,
    ) -> Result<Value, PlaidClientError> {
        let request = build_request(&self.config, operation, &arguments);

        let result = match operation {
            PlaidOperation::GetAllTransactions => self.get_all_transactions(request).await,
            PlaidOperation::GetAssetReportPdf => self.post_binary(&request).await,
            _ => self.post_json(&request).await,
        };

        if result.is_ok() {
            info!(operation = %operation, "Plaid API呼び出し成功");
        }

        result
    }
}
