// Domain layer modules
pub mod error_body;
pub mod operation;
pub mod parameter_key;

// Re-exports
pub use error_body::{DEFAULT_DISPLAY_MESSAGE, ErrorBody};
pub use operation::{PlaidOperation, UnknownOperation, operation_name_from_path};
pub use parameter_key::{normalize_keys, to_camel_case, to_snake_case};
