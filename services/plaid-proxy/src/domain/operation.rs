/// Plaid client operations reachable through the proxy
///
/// The vocabulary is closed: adding an operation means adding a variant,
/// its name, its parameter order and its outbound route.
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaidOperation {
    CreateAssetReport,
    CreateDepositSwitch,
    CreateDepositSwitchToken,
    CreateItemAddToken,
    CreatePayment,
    CreatePaymentRecipient,
    CreatePaymentToken,
    CreateProcessorToken,
    CreatePublicToken,
    CreateStripeToken,
    DeleteItem,
    ExchangePublicToken,
    FilterAssetReport,
    GetAccounts,
    GetAllTransactions,
    GetAssetReport,
    GetAssetReportPdf,
    GetAuditCopy,
    GetAuth,
    GetBalance,
    GetCategories,
    GetCreditDetails,
    GetDepositSwitch,
    GetHoldings,
    GetIncome,
    GetInstitutionById,
    GetInstitutions,
    GetInvestmentTransactions,
    GetItem,
    GetLiabilities,
    GetPayment,
    GetPaymentRecipient,
    GetTransactions,
    GetWebhookVerificationKey,
    ImportItem,
    InvalidateAccessToken,
    ListPaymentRecipients,
    RefreshAssetReport,
    RefreshTransactions,
    RemoveAssetReport,
    RemoveAuditCopy,
    RemoveItem,
    ResetLogin,
    SandboxItemFireWebhook,
    SandboxItemSetVerificationStatus,
    SandboxPublicTokenCreate,
    SearchInstitutionsByName,
    UpdateItemWebhook,
}

/// Returned when a path segment names no known operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A function named {} is not available.", self.0)
    }
}

impl std::error::Error for UnknownOperation {}

impl PlaidOperation {
    /// Every operation, in alphabetical order of its name
    pub const ALL: [PlaidOperation; 48] = [
        PlaidOperation::CreateAssetReport,
        PlaidOperation::CreateDepositSwitch,
        PlaidOperation::CreateDepositSwitchToken,
        PlaidOperation::CreateItemAddToken,
        PlaidOperation::CreatePayment,
        PlaidOperation::CreatePaymentRecipient,
        PlaidOperation::CreatePaymentToken,
        PlaidOperation::CreateProcessorToken,
        PlaidOperation::CreatePublicToken,
        PlaidOperation::CreateStripeToken,
        PlaidOperation::DeleteItem,
        PlaidOperation::ExchangePublicToken,
        PlaidOperation::FilterAssetReport,
        PlaidOperation::GetAccounts,
        PlaidOperation::GetAllTransactions,
        PlaidOperation::GetAssetReport,
        PlaidOperation::GetAssetReportPdf,
        PlaidOperation::GetAuditCopy,
        PlaidOperation::GetAuth,
        PlaidOperation::GetBalance,
        PlaidOperation::GetCategories,
        PlaidOperation::GetCreditDetails,
        PlaidOperation::GetDepositSwitch,
        PlaidOperation::GetHoldings,
        PlaidOperation::GetIncome,
        PlaidOperation::GetInstitutionById,
        PlaidOperation::GetInstitutions,
        PlaidOperation::GetInvestmentTransactions,
        PlaidOperation::GetItem,
        PlaidOperation::GetLiabilities,
        PlaidOperation::GetPayment,
        PlaidOperation::GetPaymentRecipient,
        PlaidOperation::GetTransactions,
        PlaidOperation::GetWebhookVerificationKey,
        PlaidOperation::ImportItem,
        PlaidOperation::InvalidateAccessToken,
        PlaidOperation::ListPaymentRecipients,
        PlaidOperation::RefreshAssetReport,
        PlaidOperation::RefreshTransactions,
        PlaidOperation::RemoveAssetReport,
        PlaidOperation::RemoveAuditCopy,
        PlaidOperation::RemoveItem,
        PlaidOperation::ResetLogin,
        PlaidOperation::SandboxItemFireWebhook,
        PlaidOperation::SandboxItemSetVerificationStatus,
        PlaidOperation::SandboxPublicTokenCreate,
        PlaidOperation::SearchInstitutionsByName,
        PlaidOperation::UpdateItemWebhook,
    ];

    /// Operation name as it appears in the request path
    pub fn name(&self) -> &'static str {
        match self {
            PlaidOperation::CreateAssetReport => "createAssetReport",
            PlaidOperation::CreateDepositSwitch => "createDepositSwitch",
            PlaidOperation::CreateDepositSwitchToken => "createDepositSwitchToken",
            PlaidOperation::CreateItemAddToken => "createItemAddToken",
            PlaidOperation::CreatePayment => "createPayment",
            PlaidOperation::CreatePaymentRecipient => "createPaymentRecipient",
            PlaidOperation::CreatePaymentToken => "createPaymentToken",
            PlaidOperation::CreateProcessorToken => "createProcessorToken",
            PlaidOperation::CreatePublicToken => "createPublicToken",
            PlaidOperation::CreateStripeToken => "createStripeToken",
            PlaidOperation::DeleteItem => "deleteItem",
            PlaidOperation::ExchangePublicToken => "exchangePublicToken",
            PlaidOperation::FilterAssetReport => "filterAssetReport",
            PlaidOperation::GetAccounts => "getAccounts",
            PlaidOperation::GetAllTransactions => "getAllTransactions",
            PlaidOperation::GetAssetReport => "getAssetReport",
            PlaidOperation::GetAssetReportPdf => "getAssetReportPdf",
            PlaidOperation::GetAuditCopy => "getAuditCopy",
            PlaidOperation::GetAuth => "getAuth",
            PlaidOperation::GetBalance => "getBalance",
            PlaidOperation::GetCategories => "getCategories",
            PlaidOperation::GetCreditDetails => "getCreditDetails",
            PlaidOperation::GetDepositSwitch => "getDepositSwitch",
            PlaidOperation::GetHoldings => "getHoldings",
            PlaidOperation::GetIncome => "getIncome",
            PlaidOperation::GetInstitutionById => "getInstitutionById",
            PlaidOperation::GetInstitutions => "getInstitutions",
            PlaidOperation::GetInvestmentTransactions => "getInvestmentTransactions",
            PlaidOperation::GetItem => "getItem",
            PlaidOperation::GetLiabilities => "getLiabilities",
            PlaidOperation::GetPayment => "getPayment",
            PlaidOperation::GetPaymentRecipient => "getPaymentRecipient",
            PlaidOperation::GetTransactions => "getTransactions",
            PlaidOperation::GetWebhookVerificationKey => "getWebhookVerificationKey",
            PlaidOperation::ImportItem => "importItem",
            PlaidOperation::InvalidateAccessToken => "invalidateAccessToken",
            PlaidOperation::ListPaymentRecipients => "listPaymentRecipients",
            PlaidOperation::RefreshAssetReport => "refreshAssetReport",
            PlaidOperation::RefreshTransactions => "refreshTransactions",
            PlaidOperation::RemoveAssetReport => "removeAssetReport",
            PlaidOperation::RemoveAuditCopy => "removeAuditCopy",
            PlaidOperation::RemoveItem => "removeItem",
            PlaidOperation::ResetLogin => "resetLogin",
            PlaidOperation::SandboxItemFireWebhook => "sandboxItemFireWebhook",
            PlaidOperation::SandboxItemSetVerificationStatus => "sandboxItemSetVerificationStatus",
            PlaidOperation::SandboxPublicTokenCreate => "sandboxPublicTokenCreate",
            PlaidOperation::SearchInstitutionsByName => "searchInstitutionsByName",
            PlaidOperation::UpdateItemWebhook => "updateItemWebhook",
        }
    }

    /// Positional parameter order of the operation (camelCase names)
    pub fn parameters(&self) -> &'static [&'static str] {
        match self {
            PlaidOperation::CreateAssetReport => &["accessTokens", "daysRequested", "options"],
            PlaidOperation::CreateDepositSwitch => {
                &["targetAccountId", "targetAccessToken", "options"]
            }
            PlaidOperation::CreateDepositSwitchToken => &["depositSwitchId", "options"],
            PlaidOperation::CreateItemAddToken => &["options"],
            PlaidOperation::CreatePayment => &["recipientId", "reference", "amount"],
            PlaidOperation::CreatePaymentRecipient => &["name", "iban", "address"],
            PlaidOperation::CreatePaymentToken => &["paymentId"],
            PlaidOperation::CreateProcessorToken => &["accessToken", "accountId", "processor"],
            PlaidOperation::CreatePublicToken => &["accessToken"],
            PlaidOperation::CreateStripeToken => &["accessToken", "accountId"],
            PlaidOperation::DeleteItem => &["accessToken"],
            PlaidOperation::ExchangePublicToken => &["publicToken"],
            PlaidOperation::FilterAssetReport => &["assetReportToken", "accountIdsToExclude"],
            PlaidOperation::GetAccounts => &["accessToken", "options"],
            PlaidOperation::GetAllTransactions => {
                &["accessToken", "startDate", "endDate", "options"]
            }
            PlaidOperation::GetAssetReport => &["assetReportToken", "includeInsights"],
            PlaidOperation::GetAssetReportPdf => &["assetReportToken"],
            PlaidOperation::GetAuditCopy => &["auditCopyToken"],
            PlaidOperation::GetAuth => &["accessToken", "options"],
            PlaidOperation::GetBalance => &["accessToken", "options"],
            PlaidOperation::GetCategories => &[],
            PlaidOperation::GetCreditDetails => &["accessToken"],
            PlaidOperation::GetDepositSwitch => &["depositSwitchId", "options"],
            PlaidOperation::GetHoldings => &["accessToken"],
            PlaidOperation::GetIncome => &["accessToken"],
            PlaidOperation::GetInstitutionById => &["institutionId", "options"],
            PlaidOperation::GetInstitutions => &["count", "offset", "options"],
            PlaidOperation::GetInvestmentTransactions => {
                &["accessToken", "startDate", "endDate", "options"]
            }
            PlaidOperation::GetItem => &["accessToken"],
            PlaidOperation::GetLiabilities => &["accessToken", "options"],
            PlaidOperation::GetPayment => &["paymentId"],
            PlaidOperation::GetPaymentRecipient => &["recipientId"],
            PlaidOperation::GetTransactions => &["accessToken", "startDate", "endDate", "options"],
            PlaidOperation::GetWebhookVerificationKey => &["keyId"],
            PlaidOperation::ImportItem => &["products", "userAuth", "options"],
            PlaidOperation::InvalidateAccessToken => &["accessToken"],
            PlaidOperation::ListPaymentRecipients => &[],
            PlaidOperation::RefreshAssetReport => {
                &["assetReportToken", "daysRequested", "options"]
            }
            PlaidOperation::RefreshTransactions => &["accessToken"],
            PlaidOperation::RemoveAssetReport => &["assetReportToken"],
            PlaidOperation::RemoveAuditCopy => &["auditCopyToken"],
            PlaidOperation::RemoveItem => &["accessToken"],
            PlaidOperation::ResetLogin => &["accessToken"],
            PlaidOperation::SandboxItemFireWebhook => &["accessToken", "webhookCode"],
            PlaidOperation::SandboxItemSetVerificationStatus => {
                &["accessToken", "accountId", "verificationStatus"]
            }
            PlaidOperation::SandboxPublicTokenCreate => {
                &["institutionId", "initialProducts", "options"]
            }
            PlaidOperation::SearchInstitutionsByName => &["query", "products", "options"],
            PlaidOperation::UpdateItemWebhook => &["accessToken", "webhook"],
        }
    }

    /// Resolve the trailing segment of a request path
    ///
    /// Everything after the last `/` is the operation name; a path without
    /// any `/` is taken whole.
    pub fn from_path(path: &str) -> Result<Self, UnknownOperation> {
        operation_name_from_path(path).parse()
    }
}

/// Substring after the last `/` of the path
pub fn operation_name_from_path(path: &str) -> &str {
    match path.rfind('/') {
        Some(index) => &path[index + 1..],
        None => path,
    }
}

impl FromStr for PlaidOperation {
    type Err = UnknownOperation;

    /// Case-sensitive lookup by operation name
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        PlaidOperation::ALL
            .iter()
            .copied()
            .find(|operation| operation.name() == name)
            .ok_or_else(|| UnknownOperation(name.to_string()))
    }
}

impl fmt::Display for PlaidOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
