//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error codes.

use dogapi_core::error::AppError;
use jsonrpsee::types::ErrorObjectOwned;

/// RPC Error Codes
pub mod code {
    pub const INVALID_ARGUMENT: i32 = 4000;
    pub const INTERNAL: i32 = 5000;
}

/// Convert AppError to JSON-RPC ErrorObject
///
/// Internal errors carry the generic operation message, with the upstream
/// cause in `data` as a plain string.
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    match err {
        AppError::InvalidArgument(e) => {
            ErrorObjectOwned::owned(code::INVALID_ARGUMENT, e.to_string(), None::<()>)
        }
        AppError::Internal { message, detail } => {
            ErrorObjectOwned::owned(code::INTERNAL, message, Some(detail))
        }
        AppError::Config(msg) => ErrorObjectOwned::owned(code::INTERNAL, msg, None::<()>),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dogapi_core::domain::DomainError;

    #[test]
    fn test_invalid_argument_code() {
        let err = to_rpc_error(AppError::InvalidArgument(DomainError::CountOutOfRange(0)));
        assert_eq!(err.code(), code::INVALID_ARGUMENT);
        assert_eq!(err.message(), "count must be between 1 and 50");
        assert!(err.data().is_none());
    }

    #[test]
    fn test_internal_carries_detail() {
        let err = to_rpc_error(AppError::Internal {
            message: "failed to list breeds".to_string(),
            detail: "api returned error status: error".to_string(),
        });
        assert_eq!(err.code(), code::INTERNAL);
        assert_eq!(err.message(), "failed to list breeds");
        assert_eq!(
            err.data().map(|d| d.get()),
            Some(r#""api returned error status: error""#)
        );
    }
}
