//! SDK Error Types

use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// Server error codes
pub mod code {
    pub const INVALID_ARGUMENT: i32 = 4000;
    pub const INTERNAL: i32 = 5000;
}

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("RPC error ({code}): {message}")]
    Rpc {
        code: i32,
        message: String,
        detail: Option<String>,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl SdkError {
    /// Server rejected the arguments before calling upstream
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SdkError::Rpc { code, .. } if *code == code::INVALID_ARGUMENT)
    }

    /// Server failed while talking to upstream
    pub fn is_internal(&self) -> bool {
        matches!(self, SdkError::Rpc { code, .. } if *code == code::INTERNAL)
    }
}

impl From<jsonrpsee::core::ClientError> for SdkError {
    fn from(e: jsonrpsee::core::ClientError) -> Self {
        match e {
            jsonrpsee::core::ClientError::Call(call_err) => SdkError::Rpc {
                code: call_err.code(),
                message: call_err.message().to_string(),
                detail: call_err
                    .data()
                    .and_then(|raw| serde_json::from_str::<String>(raw.get()).ok()),
            },
            jsonrpsee::core::ClientError::Transport(e) => {
                SdkError::Transport(format!("Transport error: {}", e))
            }
            jsonrpsee::core::ClientError::RestartNeeded(_) => {
                SdkError::Connection("Connection restart needed".to_string())
            }
            jsonrpsee::core::ClientError::RequestTimeout => SdkError::Timeout,
            jsonrpsee::core::ClientError::ParseError(e) => {
                SdkError::Other(format!("Parse error: {}", e))
            }
            _ => SdkError::Other(e.to_string()),
        }
    }
}
