use thiserror::Error;

/// Rejections produced by a single store. None of them are fatal to a session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Phone not found: {model}")]
    PhoneNotFound { model: String },

    #[error("Model name cannot be empty")]
    EmptyModel,

    #[error("Repair service already used")]
    RepairAlreadyUsed,

    #[error("Invalid menu choice: {input:?}")]
    InvalidChoice { input: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AppError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::IoError(e) => format!("Не удалось прочитать или записать данные: {}", e),
            AppError::ConfigParseError(e) => format!("Файл каталога содержит ошибку: {}", e),
            AppError::ConfigError { message } => format!("Ошибка конфигурации: {}", message),
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Неверное значение поля {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::IoError(_) => "Check that the catalog path exists and is readable",
            AppError::ConfigParseError(_) => "Make sure the catalog file is valid TOML",
            AppError::ConfigError { .. } | AppError::InvalidConfigValueError { .. } => {
                "Fix the catalog file or run without --config to use the built-in stores"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
