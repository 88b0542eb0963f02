//! Proveedores externos de datos de compuestos.
pub mod chemspider;
pub mod config;

pub use chemspider::ChemSpiderClient;
pub use config::ChemSpiderConfig;
