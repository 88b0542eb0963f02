use chemengine::EngineError;
use thiserror::Error;

/// Errores del dominio. Cada operación pública devuelve uno de estos.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Estructura inválida: {0}")]
    Parse(String),
    #[error("Fallo generando la estructura 3D: {0}")]
    StructureGeneration(String),
    #[error("Fallo en la consulta del compuesto: {0}")]
    Lookup(#[from] LookupError),
    #[error("Carga neta no disponible para {smiles}: {reason}")]
    ChargeUnavailable { smiles: String, reason: String },
    #[error("Validación fallida: {0}")]
    Validation(String),
    #[error("Error del motor químico: {0}")]
    Engine(EngineError),
}

/// Fallos de la base de datos remota de compuestos.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("identificador de compuesto inválido: {0:?}")]
    InvalidIdentifier(String),
    #[error("autenticación rechazada (HTTP {status})")]
    Authentication { status: u16 },
    #[error("compuesto {0} no encontrado")]
    UnknownCompound(u64),
    #[error("respuesta HTTP inesperada: {status}")]
    Http { status: u16 },
    #[error("fallo de red: {0}")]
    Network(String),
    #[error("respuesta mal formada: {0}")]
    MalformedResponse(String),
}

// Clasifica los fallos del motor según la taxonomía del dominio.
impl From<EngineError> for DomainError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::InvalidSmiles(_) | EngineError::Sanitize(_) => DomainError::Parse(e.to_string()),
            EngineError::Embedding(_) | EngineError::ForceField { .. } => {
                DomainError::StructureGeneration(e.to_string())
            }
            other => DomainError::Engine(other),
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        LookupError::MalformedResponse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_parse_failures_become_parse_errors() {
        let d: DomainError = EngineError::InvalidSmiles("xx".into()).into();
        assert!(matches!(d, DomainError::Parse(_)));
        let d: DomainError = EngineError::Sanitize("valence".into()).into();
        assert!(matches!(d, DomainError::Parse(_)));
    }

    #[test]
    fn engine_generation_failures_become_structure_errors() {
        let d: DomainError = EngineError::Embedding("0 conformeros".into()).into();
        assert!(matches!(d, DomainError::StructureGeneration(_)));
        let d: DomainError = EngineError::ForceField { force_field: chemengine::ForceField::Uff,
                                                       conf_id: 0,
                                                       reason: "x".into() }.into();
        assert!(matches!(d, DomainError::StructureGeneration(_)));
    }

    #[test]
    fn charge_unsupported_stays_an_engine_error_until_classified() {
        let d: DomainError = EngineError::ChargeUnsupported("B".into()).into();
        assert!(matches!(d, DomainError::Engine(EngineError::ChargeUnsupported(_))));
    }

    #[test]
    fn lookup_error_wraps_into_domain() {
        let d: DomainError = LookupError::UnknownCompound(7).into();
        assert_eq!(d.to_string(), "Fallo en la consulta del compuesto: compuesto 7 no encontrado");
    }
}
