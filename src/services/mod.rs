//! Servicios del sistema

pub mod vehicle_service;
