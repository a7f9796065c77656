//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos en memoria.

pub mod vehicle;
