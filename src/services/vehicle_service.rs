//! Servicio de registros de vehículos
//!
//! Aplica la política de validación configurada (permisiva o estricta)
//! al crear y modificar registros.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::EnvironmentConfig;
use crate::models::vehicle::{NewVehicleRecord, VehicleRecord};
use crate::utils::errors::AppResult;

pub struct VehicleService {
    strict_validation: bool,
}

impl VehicleService {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            strict_validation: config.strict_validation,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.strict_validation
    }

    /// Crear un registro (extendido si el request trae número de ruedas)
    pub fn create(&self, request: NewVehicleRecord) -> AppResult<VehicleRecord> {
        debug!(
            "🚗 Creando registro {} {} (estricto: {})",
            request.brand, request.model, self.strict_validation
        );

        if self.strict_validation {
            VehicleRecord::try_from_request(request).map_err(|e| {
                warn!("❌ Registro rechazado [{}]: {}", e.code(), e);
                e
            })
        } else {
            Ok(VehicleRecord::from_request(request))
        }
    }

    /// Incrementar el precio de un registro
    pub fn increase_price(&self, record: &mut VehicleRecord, amount: Decimal) -> AppResult<()> {
        if self.strict_validation {
            record.try_increase_price(amount).map_err(|e| {
                warn!("❌ Incremento de precio rechazado [{}]: {}", e.code(), e);
                e
            })
        } else {
            record.increase_price(amount);
            Ok(())
        }
    }

    /// Cambiar el color de un registro
    pub fn change_color(&self, record: &mut VehicleRecord, color: impl Into<String>) {
        record.set_color(color);
    }
}
