use crate::domain::model::ConfigMapParams;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IpsetError {
    #[error("Invalid CIDR '{cidr}': prefix length is not an integer ({source})")]
    InvalidCidr {
        cidr: String,
        #[source]
        source: ParseIntError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl IpsetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            IpsetError::InvalidCidr { .. } | IpsetError::SerializationError(_) => {
                ErrorCategory::Input
            }
            IpsetError::IoError(_) => ErrorCategory::Io,
            IpsetError::ConfigValidationError { .. }
            | IpsetError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            IpsetError::InvalidCidr { .. } | IpsetError::SerializationError(_) => {
                ErrorSeverity::High
            }
            IpsetError::IoError(_) => ErrorSeverity::Critical,
            IpsetError::ConfigValidationError { .. }
            | IpsetError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            IpsetError::InvalidCidr { .. } => {
                "Check the cidr field of every network, it must look like 192.168.24.0/24"
            }
            IpsetError::IoError(_) => "Check that the input files exist and the output path is writable",
            IpsetError::SerializationError(_) => {
                "Check that the network and MAC reservation lists are valid JSON"
            }
            IpsetError::ConfigValidationError { .. }
            | IpsetError::InvalidConfigValueError { .. } => {
                "Review the configuration file or command line flags"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IpsetError::InvalidCidr { cidr, .. } => {
                format!("Network CIDR '{}' could not be parsed", cidr)
            }
            IpsetError::IoError(e) => format!("File operation failed: {}", e),
            IpsetError::SerializationError(e) => format!("Input data is malformed: {}", e),
            other => other.to_string(),
        }
    }
}

/// 建構失敗時仍回傳目前為止的部分結果，呼叫端不得依賴其完整性
#[derive(Error, Debug)]
#[error("{source}")]
pub struct BuildFailure {
    pub partial: ConfigMapParams,
    #[source]
    pub source: IpsetError,
}

impl From<BuildFailure> for IpsetError {
    fn from(failure: BuildFailure) -> Self {
        failure.source
    }
}

pub type Result<T> = std::result::Result<T, IpsetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_cidr_classification() {
        let source = "x".parse::<i32>().unwrap_err();
        let err = IpsetError::InvalidCidr {
            cidr: "badcidr".to_string(),
            source,
        };

        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("badcidr"));
        assert!(err.user_friendly_message().contains("badcidr"));
    }

    #[test]
    fn test_build_failure_unwraps_source() {
        let failure = BuildFailure {
            partial: ConfigMapParams::default(),
            source: IpsetError::ConfigValidationError {
                field: "inputs.net_list".to_string(),
                message: "missing".to_string(),
            },
        };

        let err: IpsetError = failure.into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
