//! Configuración central de la librería.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`)
//! con los parámetros de embebido 3D y del cliente ChemSpider. Todas las
//! variables son opcionales; sin ellas se usan los valores históricos.
use chem_domain::conformer::{DEFAULT_EMBED_SEED, DEFAULT_MAX_ITERS};
use chem_domain::EmbedOptions;
use chem_providers::config::{env_or, init_dotenv};
use chem_providers::ChemSpiderConfig;
use chemengine::ForceField;
use once_cell::sync::Lazy;

/// Configuración global de la librería.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Semilla, campo de fuerza e iteraciones para `smiles2mol`.
    pub embedding: EmbedOptions,
    /// URL base y timeout de la API de ChemSpider.
    pub chemspider: ChemSpiderConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        init_dotenv();
        let embedding = EmbedOptions { random_seed: env_or("CHEMUTILS_EMBED_SEED", DEFAULT_EMBED_SEED),
                                       force_field: env_or("CHEMUTILS_FORCE_FIELD", ForceField::Uff),
                                       max_iters: env_or("CHEMUTILS_MAX_ITERS", DEFAULT_MAX_ITERS) };
        AppConfig { embedding,
                    chemspider: ChemSpiderConfig::from_env() }
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedding_defaults_match_historic_values() {
        // Solo válido si el entorno no redefine las variables.
        if std::env::var("CHEMUTILS_EMBED_SEED").is_ok() {
            return;
        }
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.embedding.random_seed, 42);
    }
}
