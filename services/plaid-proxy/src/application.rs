// アプリケーション層モジュール
pub mod plaid_handler;
pub mod proxy_request;

// 再エクスポート
pub use plaid_handler::{PlaidHandler, ProxyError};
pub use proxy_request::ProxyRequest;
