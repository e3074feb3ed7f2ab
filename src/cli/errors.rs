//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::fmt;
use std::io;

use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// Database could not be opened or initialized
    StoreError,
    /// Runtime or listener failed to start
    BootFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "INVENTORY_CLI_CONFIG_ERROR",
            Self::StoreError => "INVENTORY_CLI_STORE_ERROR",
            Self::BootFailed => "INVENTORY_CLI_BOOT_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

/// Listener bind and accept failures from the HTTP server
impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::boot_failed(format!("HTTP server failed: {}", e))
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        Self::new(CliErrorCode::StoreError, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config_error("port must be > 0");
        assert_eq!(
            err.to_string(),
            "INVENTORY_CLI_CONFIG_ERROR: port must be > 0"
        );
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_io_error_is_boot_failure() {
        let err = CliError::from(io::Error::new(io::ErrorKind::AddrInUse, "address in use"));
        assert_eq!(err.code(), &CliErrorCode::BootFailed);
        assert_eq!(err.message(), "HTTP server failed: address in use");
    }

    #[test]
    fn test_store_error_conversion() {
        let err = CliError::from(StoreError::ForeignKeyViolation);
        assert_eq!(err.code_str(), "INVENTORY_CLI_STORE_ERROR");
    }
}
