// Plaidクライアント設定
//
// 環境変数からPlaid APIの認証情報と接続先環境を読み込む。
// 未設定の値は空文字として扱い、起動時には検証しない。

use std::fmt;

/// Plaid APIの接続先環境
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaidEnvironment {
    Sandbox,
    Development,
    Production,
}

impl PlaidEnvironment {
    /// 環境名（PLAID_ENVIRONMENTの値）から環境を解決
    ///
    /// 大文字小文字は区別する。未知の名前は`None`。
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sandbox" => Some(PlaidEnvironment::Sandbox),
            "development" => Some(PlaidEnvironment::Development),
            "production" => Some(PlaidEnvironment::Production),
            _ => None,
        }
    }

    /// 環境のベースURL
    pub fn base_url(&self) -> &'static str {
        match self {
            PlaidEnvironment::Sandbox => "https://sandbox.plaid.com",
            PlaidEnvironment::Development => "https://development.plaid.com",
            PlaidEnvironment::Production => "https://production.plaid.com",
        }
    }
}

/// Plaidクライアント設定
///
/// # フィールド
/// - `client_id`: PLAID_CLIENT_ID
/// - `secret`: PLAID_SECRET
/// - `public_key`: PLAID_PUBLIC_KEY
/// - `base_url`: PLAID_ENVIRONMENTから解決したベースURL（未知の環境は空文字）
#[derive(Clone)]
pub struct PlaidConfig {
    client_id: String,
    secret: String,
    public_key: String,
    base_url: String,
}

impl fmt::Debug for PlaidConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaidConfig")
            .field("client_id", &self.client_id)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PlaidConfig {
    /// 新しい設定を作成
    pub fn new(
        client_id: impl Into<String>,
        secret: impl Into<String>,
        public_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            secret: secret.into(),
            public_key: public_key.into(),
            base_url: base_url.into(),
        }
    }

    /// 環境変数から設定を読み込み
    ///
    /// # 環境変数
    /// - `PLAID_CLIENT_ID`: クライアントID
    /// - `PLAID_SECRET`: シークレット
    /// - `PLAID_PUBLIC_KEY`: 公開鍵
    /// - `PLAID_ENVIRONMENT`: `sandbox` / `development` / `production`
    ///
    /// いずれも未設定なら空文字になる。失敗はPlaid呼び出し時に表面化する。
    pub fn from_env() -> Self {
        let get = |key: &str| std::env::var(key).unwrap_or_default();

        let base_url = PlaidEnvironment::from_name(&get("PLAID_ENVIRONMENT"))
            .map(|env| env.base_url().to_string())
            .unwrap_or_default();

        Self {
            client_id: get("PLAID_CLIENT_ID"),
            secret: get("PLAID_SECRET"),
            public_key: get("PLAID_PUBLIC_KEY"),
            base_url,
        }
    }

    /// クライアントIDを取得
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// シークレットを取得
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// 公開鍵を取得
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// ベースURLを取得
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// エンドポイントの完全なURLを構築
    ///
    /// # 戻り値
    /// 例: "https://sandbox.plaid.com/accounts/get"
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // テストで環境変数を安全に設定/削除するヘルパー
    unsafe fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) };
    }

    unsafe fn cleanup_plaid_env() {
        unsafe {
            std::env::remove_var("PLAID_CLIENT_ID");
            std::env::remove_var("PLAID_SECRET");
            std::env::remove_var("PLAID_PUBLIC_KEY");
            std::env::remove_var("PLAID_ENVIRONMENT");
        }
    }

    // ==================== PlaidEnvironment テスト ====================

    #[test]
    fn test_environment_from_name() {
        assert_eq!(PlaidEnvironment::from_name("sandbox"), Some(PlaidEnvironment::Sandbox));
        assert_eq!(
            PlaidEnvironment::from_name("development"),
            Some(PlaidEnvironment::Development)
        );
        assert_eq!(
            PlaidEnvironment::from_name("production"),
            Some(PlaidEnvironment::Production)
        );
    }

    #[test]
    fn test_environment_from_unknown_name() {
        assert_eq!(PlaidEnvironment::from_name("Sandbox"), None);
        assert_eq!(PlaidEnvironment::from_name(""), None);
        assert_eq!(PlaidEnvironment::from_name("staging"), None);
    }

    #[test]
    fn test_environment_base_url() {
        assert_eq!(PlaidEnvironment::Sandbox.base_url(), "https://sandbox.plaid.com");
        assert_eq!(
            PlaidEnvironment::Production.base_url(),
            "https://production.plaid.com"
        );
    }

    // ==================== PlaidConfig テスト ====================

    #[test]
    fn test_new_creates_config() {
        let config = PlaidConfig::new("id", "secret", "public", "https://sandbox.plaid.com");

        assert_eq!(config.client_id(), "id");
        assert_eq!(config.secret(), "secret");
        assert_eq!(config.public_key(), "public");
        assert_eq!(config.base_url(), "https://sandbox.plaid.com");
    }

    #[test]
    fn test_endpoint_url() {
        let config = PlaidConfig::new("id", "secret", "public", "https://sandbox.plaid.com/");
        assert_eq!(
            config.endpoint_url("/accounts/get"),
            "https://sandbox.plaid.com/accounts/get"
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = PlaidConfig::new("id", "top-secret", "public-key", "https://sandbox.plaid.com");
        let debug = format!("{:?}", config);

        assert!(debug.contains("PlaidConfig"));
        assert!(debug.contains("id"));
        assert!(!debug.contains("top-secret"));
        assert!(!debug.contains("public-key"));
    }

    #[test]
    #[serial]
    fn test_from_env_with_all_fields_set() {
        unsafe {
            cleanup_plaid_env();
            set_env("PLAID_CLIENT_ID", "client-123");
            set_env("PLAID_SECRET", "secret-456");
            set_env("PLAID_PUBLIC_KEY", "public-789");
            set_env("PLAID_ENVIRONMENT", "development");
        }

        let config = PlaidConfig::from_env();

        assert_eq!(config.client_id(), "client-123");
        assert_eq!(config.secret(), "secret-456");
        assert_eq!(config.public_key(), "public-789");
        assert_eq!(config.base_url(), "https://development.plaid.com");

        unsafe { cleanup_plaid_env(); }
    }

    #[test]
    #[serial]
    fn test_from_env_with_no_fields_set() {
        // 未設定の値は空文字になる（検証しない）
        unsafe { cleanup_plaid_env(); }

        let config = PlaidConfig::from_env();

        assert_eq!(config.client_id(), "");
        assert_eq!(config.secret(), "");
        assert_eq!(config.public_key(), "");
        assert_eq!(config.base_url(), "");
    }

    #[test]
    #[serial]
    fn test_from_env_with_unknown_environment() {
        unsafe {
            cleanup_plaid_env();
            set_env("PLAID_ENVIRONMENT", "staging");
        }

        let config = PlaidConfig::from_env();

        assert_eq!(config.base_url(), "");

        unsafe { cleanup_plaid_env(); }
    }
}
