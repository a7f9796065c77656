//! Utilidades de validación
//!
//! Validadores de campo usados por `#[validate(custom = ...)]` en los
//! requests de creación de registros.

use rust_decimal::Decimal;
use validator::ValidationError;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un decimal no sea negativo
pub fn validate_non_negative_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("actual".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
