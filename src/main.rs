use anyhow::Result;
use dotenvy::dotenv;
use rust_decimal::Decimal;
use tracing::{error, info};

use vehicle_records::config::EnvironmentConfig;
use vehicle_records::services::vehicle_service::VehicleService;
use vehicle_records::NewVehicleRecord;

fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Vehicle Records ({})", config.environment);
    if config.is_production() {
        info!("🏭 Modo producción");
    } else if config.is_development() {
        info!("🛠️ Modo desarrollo");
    }

    let service = VehicleService::new(&config);
    info!(
        "🔎 Validación {}",
        if service.is_strict() { "estricta" } else { "permisiva" }
    );

    let mut record = match service.create(NewVehicleRecord {
        brand: "Honda".to_string(),
        model: "Dio".to_string(),
        year: 2022,
        odometer: Decimal::ZERO,
        price: Decimal::from(100000),
        color: "Black".to_string(),
        wheel_count: Some(2),
    }) {
        Ok(record) => record,
        Err(e) => {
            error!("❌ Error creando el registro: {}", e);
            return Err(anyhow::anyhow!("Error creando el registro: {}", e));
        }
    };

    service.increase_price(&mut record, Decimal::from(20000))?;

    println!("{}", record.render());

    Ok(())
}
