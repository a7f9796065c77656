//! Registros de vehículos en memoria con salida de texto formateada.

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use models::vehicle::{NewVehicleRecord, RenderLayout, VehicleRecord};
pub use utils::errors::{AppError, AppResult};
