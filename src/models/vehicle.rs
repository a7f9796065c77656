//! Modelo de VehicleRecord
//!
//! Este módulo contiene el registro de vehículo en memoria y su variante
//! extendida (con número de ruedas). La variante extendida no es un tipo
//! aparte: es el mismo registro con `wheel_count` presente, y el formato de
//! salida se elige a partir de esa presencia.

use std::fmt;

use rust_decimal::Decimal;
use tracing::debug;
use validator::Validate;

use crate::utils::errors::{invalid_argument_error, AppResult};
use crate::utils::validation::{validate_non_negative_decimal, validate_not_empty};

/// Formato de salida de un registro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderLayout {
    /// Seis campos base
    Base,
    /// Campos base más la línea de número de ruedas
    Extended { wheel_count: i32 },
}

/// Registro de vehículo en memoria
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    brand: String,
    model: String,
    year: i32,
    odometer: Decimal,
    price: Decimal,
    color: String,
    wheel_count: Option<i32>,
}

/// Request para crear un registro con validación estricta
#[derive(Debug, Clone, Validate)]
pub struct NewVehicleRecord {
    #[validate(custom = "validate_not_empty")]
    pub brand: String,

    #[validate(custom = "validate_not_empty")]
    pub model: String,

    #[validate(range(min = 0))]
    pub year: i32,

    #[validate(custom = "validate_non_negative_decimal")]
    pub odometer: Decimal,

    #[validate(custom = "validate_non_negative_decimal")]
    pub price: Decimal,

    #[validate(custom = "validate_not_empty")]
    pub color: String,

    #[validate(range(min = 0))]
    pub wheel_count: Option<i32>,
}

impl VehicleRecord {
    /// Crea un registro base. Guarda los valores tal cual, sin validar.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        odometer: Decimal,
        price: Decimal,
        color: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            year,
            odometer,
            price,
            color: color.into(),
            wheel_count: None,
        }
    }

    /// Crea un registro extendido con número de ruedas
    pub fn extended(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        odometer: Decimal,
        price: Decimal,
        color: impl Into<String>,
        wheel_count: i32,
    ) -> Self {
        let mut record = Self::new(brand, model, year, odometer, price, color);
        record.wheel_count = Some(wheel_count);
        record
    }

    /// Construye el registro sin validar el request
    pub fn from_request(request: NewVehicleRecord) -> Self {
        let mut record = Self::new(
            request.brand,
            request.model,
            request.year,
            request.odometer,
            request.price,
            request.color,
        );
        record.wheel_count = request.wheel_count;
        record
    }

    /// Valida el request y construye el registro
    pub fn try_from_request(request: NewVehicleRecord) -> AppResult<Self> {
        request.validate()?;
        Ok(Self::from_request(request))
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn odometer(&self) -> Decimal {
        self.odometer
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn wheel_count(&self) -> Option<i32> {
        self.wheel_count
    }

    pub fn is_extended(&self) -> bool {
        self.wheel_count.is_some()
    }

    /// Reemplaza el color
    pub fn set_color(&mut self, new_color: impl Into<String>) {
        self.color = new_color.into();
        debug!("🎨 Color actualizado a {}", self.color);
    }

    /// Suma `amount` al precio. Acepta montos negativos.
    ///
    /// Hace panic si la suma desborda `Decimal`; usar `try_increase_price`
    /// para recibir el error.
    pub fn increase_price(&mut self, amount: Decimal) {
        self.price += amount;
        debug!("💰 Precio incrementado en {} (nuevo precio: {})", amount, self.price);
    }

    /// Igual que `increase_price`, pero rechaza montos no positivos y
    /// desbordamientos sin modificar el precio
    pub fn try_increase_price(&mut self, amount: Decimal) -> AppResult<()> {
        if amount <= Decimal::ZERO {
            return Err(invalid_argument_error(
                "amount",
                &format!("price increase must be positive, got {}", amount),
            ));
        }
        let new_price = self.price.checked_add(amount).ok_or_else(|| {
            invalid_argument_error(
                "amount",
                &format!("price increase of {} overflows price {}", amount, self.price),
            )
        })?;
        self.price = new_price;
        debug!("💰 Precio incrementado en {} (nuevo precio: {})", amount, self.price);
        Ok(())
    }

    pub fn layout(&self) -> RenderLayout {
        match self.wheel_count {
            Some(wheel_count) => RenderLayout::Extended { wheel_count },
            None => RenderLayout::Base,
        }
    }

    /// Bloque de texto con los campos en orden fijo
    pub fn render(&self) -> String {
        let mut lines = vec![
            format!("Brand:{}", self.brand),
            format!("Model:{}", self.model),
            format!("Year:{}", self.year),
            format!("Odometer:{}", self.odometer),
            format!("Price:{}", self.price),
            format!("Color:{}", self.color),
        ];

        if let RenderLayout::Extended { wheel_count } = self.layout() {
            lines.push(format!("Wheel count:{}", wheel_count));
        }

        lines.join("\n")
    }
}

impl fmt::Display for VehicleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
