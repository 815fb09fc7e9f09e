use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("No data provided")]
    NoDataProvided,

    #[error("Invalid JSON format")]
    InvalidJson,

    #[error("Missing 'text' field")]
    MissingTextField,

    #[error("Text must be a non-empty string")]
    InvalidText,

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Endpoint not found")]
    NotFound,

    #[error("{message}")]
    Internal { message: String },

    #[error("Evaluator request failed: {0}")]
    EvaluatorError(#[from] reqwest::Error),

    #[error("Evaluator returned an unusable reply: {message}")]
    EvaluatorReply { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    ClientInput,
    NotFound,
    Internal,
    Configuration,
}

impl ServiceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ServiceError::NoDataProvided
            | ServiceError::InvalidJson
            | ServiceError::MissingTextField
            | ServiceError::InvalidText
            | ServiceError::PayloadTooLarge => ErrorCategory::ClientInput,
            ServiceError::NotFound => ErrorCategory::NotFound,
            ServiceError::ConfigError { .. }
            | ServiceError::InvalidConfigValueError { .. }
            | ServiceError::MissingConfigError { .. } => ErrorCategory::Configuration,
            _ => ErrorCategory::Internal,
        }
    }

    /// 對應的 HTTP 狀態碼
    pub fn status_code(&self) -> u16 {
        if let ServiceError::PayloadTooLarge = self {
            return 413;
        }
        match self.category() {
            ErrorCategory::ClientInput => 400,
            ErrorCategory::NotFound => 404,
            ErrorCategory::Internal | ErrorCategory::Configuration => 500,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ServiceError::Internal {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_input_errors_map_to_400() {
        for err in [
            ServiceError::NoDataProvided,
            ServiceError::InvalidJson,
            ServiceError::MissingTextField,
            ServiceError::InvalidText,
        ] {
            assert_eq!(err.category(), ErrorCategory::ClientInput);
            assert_eq!(err.status_code(), 400);
        }
    }

    #[test]
    fn test_oversized_body_is_client_error_413() {
        let err = ServiceError::PayloadTooLarge;
        assert_eq!(err.category(), ErrorCategory::ClientInput);
        assert_eq!(err.status_code(), 413);
    }

    #[test]
    fn test_not_found_and_internal_status() {
        assert_eq!(ServiceError::NotFound.status_code(), 404);
        assert_eq!(ServiceError::internal("boom").status_code(), 500);
        assert_eq!(ServiceError::internal("boom").to_string(), "boom");
        let reply = ServiceError::EvaluatorReply {
            message: "bad label".to_string(),
        };
        assert_eq!(reply.category(), ErrorCategory::Internal);
    }

    #[test]
    fn test_messages_name_the_cause() {
        assert_eq!(ServiceError::MissingTextField.to_string(), "Missing 'text' field");
        assert_eq!(ServiceError::InvalidJson.to_string(), "Invalid JSON format");
    }
}
