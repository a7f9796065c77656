//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores de los registros de vehículos.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Código estable del error, útil para logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidArgument(_) => "INVALID_ARGUMENT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de argumento inválido
pub fn invalid_argument_error(field: &str, reason: &str) -> AppError {
    AppError::InvalidArgument(format!("{}: {}", field, reason))
}

/// Función helper para crear errores de configuración
pub fn config_error(variable: &str, value: &str) -> AppError {
    AppError::Config(format!("{} has an invalid value '{}'", variable, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let error = invalid_argument_error("price", "must be positive");
        assert_eq!(error.to_string(), "Invalid argument: price: must be positive");
        assert_eq!(error.code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_config_error_message() {
        let error = config_error("LOG_LEVEL", "loud");
        assert!(error.to_string().contains("LOG_LEVEL"));
        assert!(error.to_string().contains("'loud'"));
        assert_eq!(error.code(), "CONFIG_ERROR");
    }
}
