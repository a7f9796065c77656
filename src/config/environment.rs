//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

use tracing::Level;

use crate::utils::errors::{config_error, AppResult};

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub log_level: Level,
    /// Rechazar valores negativos al crear registros y montos no positivos
    pub strict_validation: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            log_level: Level::INFO,
            strict_validation: false,
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables de entorno del proceso
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Cargar la configuración desde una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let environment = lookup("ENVIRONMENT").unwrap_or(defaults.environment);

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => value
                .trim()
                .parse::<Level>()
                .map_err(|_| config_error("LOG_LEVEL", &value))?,
            None => defaults.log_level,
        };

        let strict_validation = match lookup("VEHICLE_STRICT_VALIDATION") {
            Some(value) => parse_bool(&value)
                .ok_or_else(|| config_error("VEHICLE_STRICT_VALIDATION", &value))?,
            None => defaults.strict_validation,
        };

        Ok(Self {
            environment,
            log_level,
            strict_validation,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
