// エラーレスポンスのボディ
//
// すべての失敗は同じJSON形式で返却する:
// {code, type, message, displayMessage, stack}

use serde::Serialize;

/// Plaid由来の表示用メッセージがない場合の既定値
pub const DEFAULT_DISPLAY_MESSAGE: &str = "Unknown error, please try again later.";

/// エラーレスポンスボディ
///
/// Plaidの構造化エラーであれば`code`/`type`/`message`/`displayMessage`を引き継ぎ、
/// それ以外は空文字と既定の表示メッセージで埋める。
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Plaidのerror_code（なければ空文字）
    pub code: String,
    /// Plaidのerror_type（なければ空文字）
    #[serde(rename = "type")]
    pub error_type: String,
    /// エラーメッセージ
    pub message: String,
    /// エンドユーザー向けメッセージ
    pub display_message: String,
    /// 診断用のエラー連鎖（空文字の場合あり）
    pub stack: String,
}

impl ErrorBody {
    /// 構造化されていないエラーからボディを作成
    pub fn generic(message: impl Into<String>, stack: impl Into<String>) -> Self {
        Self {
            code: String::new(),
            error_type: String::new(),
            message: message.into(),
            display_message: DEFAULT_DISPLAY_MESSAGE.to_string(),
            stack: stack.into(),
        }
    }
}
