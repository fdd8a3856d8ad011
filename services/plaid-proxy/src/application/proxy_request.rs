// プロキシリクエスト
//
// API Gatewayから受け取ったHTTPリクエストのうち、
// ルーティングに必要な部分（パス・ボディ・クエリ）だけを保持する。

use lambda_http::{Request, RequestExt};
use serde_json::{Map, Value};

/// ハンドラーへの入力
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProxyRequest {
    /// URLパス（末尾のセグメントが操作名）
    pub path: String,
    /// 生のリクエストボディ（空の場合は`None`）
    ///
    /// UTF-8としての検証はJSON解析時に行う。
    pub body: Option<Vec<u8>>,
    /// クエリ文字列パラメータ（値はすべて文字列）
    pub query_parameters: Map<String, Value>,
}

impl ProxyRequest {
    /// パスのみのリクエストを作成
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// ボディを設定
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// クエリパラメータを追加
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_parameters
            .insert(key.into(), Value::String(value.into()));
        self
    }

    /// lambda_httpのリクエストから変換
    ///
    /// 空のボディはボディなしとして扱い、クエリパラメータにフォールバックさせる。
    /// 同じキーが複数回指定された場合は後の値を使う。
    pub fn from_http(request: &Request) -> Self {
        let bytes: &[u8] = request.body().as_ref();
        let body = if bytes.is_empty() {
            None
        } else {
            Some(bytes.to_vec())
        };

        let query_parameters = request
            .query_string_parameters()
            .iter()
            .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
            .collect();

        Self {
            path: request.uri().path().to_string(),
            body,
            query_parameters,
        }
    }
}
