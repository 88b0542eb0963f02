//! Configuración del cliente ChemSpider desde variables de entorno.
//! Usa `CHEMSPIDER_BASE_URL` y `CHEMSPIDER_TIMEOUT_SECS`, ambos opcionales.

use dotenvy::dotenv;
use log::warn;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.rsc.org/compounds/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() { Lazy::force(&DOTENV_LOADED); }

/// Lee `key` del entorno; si falta o no se puede parsear devuelve `default`.
pub fn env_or<T>(key: &str, default: T) -> T
    where T: FromStr
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                                          warn!("{key}={raw:?} inválido, se usa el valor por defecto");
                                          default
                                      }),
        Err(_) => default,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChemSpiderConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ChemSpiderConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(),
               timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS) }
    }
}

impl ChemSpiderConfig {
    pub fn from_env() -> Self {
        init_dotenv();
        let base_url = env_or("CHEMSPIDER_BASE_URL", DEFAULT_BASE_URL.to_string());
        let timeout_secs = env_or("CHEMSPIDER_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);
        Self { base_url: base_url.trim_end_matches('/').to_string(),
               timeout: Duration::from_secs(timeout_secs) }
    }
}
