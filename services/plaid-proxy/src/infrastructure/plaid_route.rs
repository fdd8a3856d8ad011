// Plaid APIの呼び出し先テーブル
//
// 各操作のエンドポイントと認証方式を静的に定義する。
// 操作を追加する場合は PlaidOperation とこのテーブルの両方に追記する。

use crate::domain::PlaidOperation;

/// リクエストボディに含める認証情報
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authentication {
    /// client_id + secret
    ClientSecret,
    /// public_key
    PublicKey,
    /// 認証不要
    None,
}

/// 操作ごとの呼び出し先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaidRoute {
    /// エンドポイントパス（例: "/accounts/get"）
    pub endpoint: &'static str,
    /// 認証方式
    pub authentication: Authentication,
}

impl PlaidRoute {
    const fn secret(endpoint: &'static str) -> Self {
        Self {
            endpoint,
            authentication: Authentication::ClientSecret,
        }
    }

    const fn public(endpoint: &'static str) -> Self {
        Self {
            endpoint,
            authentication: Authentication::PublicKey,
        }
    }
}

/// Stripe向けprocessor token作成エンドポイント
pub const STRIPE_TOKEN_ENDPOINT: &str = "/processor/stripe/bank_account_token/create";

/// 操作の呼び出し先を取得
///
/// `createProcessorToken`はprocessorが`stripe`の場合のみ
/// [`STRIPE_TOKEN_ENDPOINT`]に振り替える（クライアント側で判定）。
pub fn route(operation: PlaidOperation) -> PlaidRoute {
    use PlaidOperation::*;

    match operation {
        CreateAssetReport => PlaidRoute::secret("/asset_report/create"),
        CreateDepositSwitch => PlaidRoute::secret("/deposit_switch/create"),
        CreateDepositSwitchToken => PlaidRoute::secret("/deposit_switch/token/create"),
        CreateItemAddToken => PlaidRoute::secret("/item/add_token/create"),
        CreatePayment => PlaidRoute::secret("/payment_initiation/payment/create"),
        CreatePaymentRecipient => PlaidRoute::secret("/payment_initiation/recipient/create"),
        CreatePaymentToken => PlaidRoute::secret("/payment_initiation/payment/token/create"),
        CreateProcessorToken => PlaidRoute::secret("/processor/token/create"),
        CreatePublicToken => PlaidRoute::secret("/item/public_token/create"),
        CreateStripeToken => PlaidRoute::secret(STRIPE_TOKEN_ENDPOINT),
        DeleteItem => PlaidRoute::secret("/item/delete"),
        ExchangePublicToken => PlaidRoute::secret("/item/public_token/exchange"),
        FilterAssetReport => PlaidRoute::secret("/asset_report/filter"),
        GetAccounts => PlaidRoute::secret("/accounts/get"),
        GetAllTransactions => PlaidRoute::secret("/transactions/get"),
        GetAssetReport => PlaidRoute::secret("/asset_report/get"),
        GetAssetReportPdf => PlaidRoute::secret("/asset_report/pdf/get"),
        GetAuditCopy => PlaidRoute::secret("/asset_report/audit_copy/get"),
        GetAuth => PlaidRoute::secret("/auth/get"),
        GetBalance => PlaidRoute::secret("/accounts/balance/get"),
        GetCategories => PlaidRoute {
            endpoint: "/categories/get",
            authentication: Authentication::None,
        },
        GetCreditDetails => PlaidRoute::secret("/credit_details/get"),
        GetDepositSwitch => PlaidRoute::secret("/deposit_switch/get"),
        GetHoldings => PlaidRoute::secret("/investments/holdings/get"),
        GetIncome => PlaidRoute::secret("/income/get"),
        GetInstitutionById => PlaidRoute::public("/institutions/get_by_id"),
        GetInstitutions => PlaidRoute::secret("/institutions/get"),
        GetInvestmentTransactions => PlaidRoute::secret("/investments/transactions/get"),
        GetItem => PlaidRoute::secret("/item/get"),
        GetLiabilities => PlaidRoute::secret("/liabilities/get"),
        GetPayment => PlaidRoute::secret("/payment_initiation/payment/get"),
        GetPaymentRecipient => PlaidRoute::secret("/payment_initiation/recipient/get"),
        GetTransactions => PlaidRoute::secret("/transactions/get"),
        GetWebhookVerificationKey => PlaidRoute::secret("/webhook_verification_key/get"),
        ImportItem => PlaidRoute::secret("/item/import"),
        InvalidateAccessToken => PlaidRoute::secret("/item/access_token/invalidate"),
        ListPaymentRecipients => PlaidRoute::secret("/payment_initiation/recipient/list"),
        RefreshAssetReport => PlaidRoute::secret("/asset_report/refresh"),
        RefreshTransactions => PlaidRoute::secret("/transactions/refresh"),
        RemoveAssetReport => PlaidRoute::secret("/asset_report/remove"),
        RemoveAuditCopy => PlaidRoute::secret("/asset_report/audit_copy/remove"),
        RemoveItem => PlaidRoute::secret("/item/remove"),
        ResetLogin => PlaidRoute::secret("/sandbox/item/reset_login"),
        SandboxItemFireWebhook => PlaidRoute::secret("/sandbox/item/fire_webhook"),
        SandboxItemSetVerificationStatus => {
            PlaidRoute::secret("/sandbox/item/set_verification_status")
        }
        SandboxPublicTokenCreate => PlaidRoute::public("/sandbox/public_token/create"),
        SearchInstitutionsByName => PlaidRoute::public("/institutions/search"),
        UpdateItemWebhook => PlaidRoute::secret("/item/webhook/update"),
    }
}
