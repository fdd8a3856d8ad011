// Infrastructure layer modules
pub mod config;
pub mod logging;
pub mod plaid_client;
pub mod plaid_route;

// Re-exports
pub use config::{PlaidConfig, PlaidEnvironment};
pub use logging::init_logging;
pub use plaid_client::{
    Arguments, HttpPlaidClient, PlaidApiError, PlaidClient, PlaidClientError, PlaidRequest,
    build_request,
};
pub use plaid_route::{Authentication, PlaidRoute, route};
