use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Content request to {url} returned status {status}")]
    ContentStatusError { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::HttpError(_) | SiteError::ContentStatusError { .. } => {
                ErrorCategory::Network
            }
            SiteError::ConfigError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::MissingConfigError { .. }
            | SiteError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SiteError::SerializationError(_) => ErrorCategory::Data,
            SiteError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤可以稍後重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::HttpError(_) | SiteError::ContentStatusError { .. } => {
                "Error al cargar contenido".to_string()
            }
            SiteError::SerializationError(_) => {
                "El contenido recibido no es JSON válido".to_string()
            }
            SiteError::IoError(e) => format!("No se pudo leer el archivo: {}", e),
            SiteError::ConfigError { message } => format!("Configuración inválida: {}", message),
            SiteError::ConfigValidationError { field, message } => {
                format!("Configuración inválida en {}: {}", field, message)
            }
            SiteError::MissingConfigError { field } => {
                format!("Falta el campo de configuración {}", field)
            }
            SiteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Valor inválido en {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the content endpoint and your network connection",
            ErrorCategory::Configuration => "Review the site configuration file",
            ErrorCategory::Data => "Make sure the endpoint returns a JSON document",
            ErrorCategory::System => "Check file permissions and paths",
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_errors_are_retryable_network_errors() {
        let err = SiteError::ContentStatusError {
            url: "https://example.com/data.json".to_string(),
            status: 503,
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.user_friendly_message(), "Error al cargar contenido");
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = SiteError::MissingConfigError {
            field: "site.name".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("site.name"));
    }
}
