/// Plaidプロキシ HTTP Lambdaエントリポイント
///
/// API Gateway経由のHTTPリクエストを受け取り、パス末尾の操作名に対応する
/// Plaid APIを呼び出してJSONレスポンスを返却する。
use std::sync::Arc;

use lambda_http::{Body, Error, Request, Response, run, service_fn};
use plaid_proxy::application::{PlaidHandler, ProxyRequest};
use plaid_proxy::infrastructure::{HttpPlaidClient, PlaidConfig, init_logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // Plaidクライアントはコールドスタート時に一度だけ構築し、以降の呼び出しで共有する
    let config = PlaidConfig::from_env();
    let client = HttpPlaidClient::new(config)?;
    let handler = Arc::new(PlaidHandler::new(client));

    info!("Plaid Lambda関数を初期化");

    run(service_fn(move |request: Request| {
        let handler = Arc::clone(&handler);
        async move { Ok::<Response<Body>, Error>(handle(&handler, request).await) }
    }))
    .await
}

/// HTTPリクエストハンドラー
///
/// 失敗もすべて500のJSONレスポンスとして返すため、Lambdaランタイムにはエラーを返さない。
async fn handle(handler: &PlaidHandler<HttpPlaidClient>, request: Request) -> Response<Body> {
    let proxy_request = ProxyRequest::from_http(&request);
    info!(path = %proxy_request.path, "Plaidリクエスト受信");

    handler.handle(&proxy_request).await
}
