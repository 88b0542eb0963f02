//! Consulta real a ChemSpider (requiere CHEMSPIDER_API_KEY en el entorno).

use chemutils::{get_properties, CompoundId, DomainError, LookupError};

#[test]
fn aspirin_lookup() {
    let Ok(key) = std::env::var("CHEMSPIDER_API_KEY") else {
        eprintln!("CHEMSPIDER_API_KEY no definido: omitiendo test");
        return;
    };
    let rec = get_properties(&key, CompoundId::new(2157)).expect("lookup");
    assert_eq!(rec.csid().get(), 2157);
    assert_eq!(rec.formula(), "C_{9}H_{8}O_{4}");
    assert!(!rec.smiles().is_empty());
}

#[test]
fn bad_key_is_rejected() {
    if std::env::var("CHEMSPIDER_API_KEY").is_err() {
        eprintln!("CHEMSPIDER_API_KEY no definido: omitiendo test");
        return;
    }
    let err = get_properties("clave-invalida", CompoundId::new(2157)).unwrap_err();
    assert!(matches!(err, DomainError::Lookup(LookupError::Authentication { .. })), "{err:?}");
}
