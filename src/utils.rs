//! Funciones de conveniencia: estructura 3D, propiedades ChemSpider y carga neta.
//!
//! Las variantes `*_with` reciben toolkit, opciones o cliente explícitos; las
//! demás usan RDKit y la configuración global (`CONFIG`).
use chem_domain::{charge, conformer, CompoundId, CompoundRecord, DomainError, EmbedOptions};
use chem_providers::ChemSpiderClient;
use chemengine::{ChemEngine, Toolkit};
use log::warn;
use std::sync::OnceLock;

use crate::config::CONFIG;

static ENGINE: OnceLock<ChemEngine> = OnceLock::new();

/// Motor RDKit compartido por el proceso; se inicializa en el primer uso.
pub fn engine() -> Result<&'static ChemEngine, DomainError> {
    if let Some(engine) = ENGINE.get() {
        return Ok(engine);
    }
    let engine = ChemEngine::init()?;
    Ok(ENGINE.get_or_init(|| engine))
}

/// Bloque molfile del conformero de menor energía de `smiles`.
///
/// # Errors
///
/// `Parse` para SMILES inválidos, `StructureGeneration` si el embebido o la
/// minimización fallan y `Validation` si `n_conformers` es 0.
pub fn smiles2mol(smiles: &str, n_conformers: usize) -> Result<String, DomainError> {
    smiles2mol_with(engine()?, smiles, n_conformers, &CONFIG.embedding)
}

pub fn smiles2mol_with<T>(toolkit: &T,
                          smiles: &str,
                          n_conformers: usize,
                          options: &EmbedOptions)
                          -> Result<String, DomainError>
    where T: Toolkit
{
    conformer::search_conformers(toolkit, smiles, n_conformers, options).map(|search| search.mol_block)
}

/// Nombre, SMILES y fórmula del compuesto `csid` según ChemSpider.
pub fn get_properties(api_key: &str, csid: CompoundId) -> Result<CompoundRecord, DomainError> {
    let client = ChemSpiderClient::with_config(api_key, &CONFIG.chemspider);
    get_properties_with(&client, csid)
}

pub fn get_properties_with(client: &ChemSpiderClient, csid: CompoundId) -> Result<CompoundRecord, DomainError> {
    Ok(client.get_compound(csid)?)
}

/// Carga neta estimada de `smiles`.
///
/// `Ok(None)` cuando Gasteiger no puede calcular las cargas de la estructura;
/// se registra un `warn!`. El resto de fallos se propaga.
pub fn get_charge(smiles: &str) -> Result<Option<i32>, DomainError> {
    get_charge_with(engine()?, smiles)
}

pub fn get_charge_with<T>(toolkit: &T, smiles: &str) -> Result<Option<i32>, DomainError>
    where T: Toolkit
{
    match charge::estimate_net_charge(toolkit, smiles) {
        Ok(net) => Ok(Some(net)),
        Err(DomainError::ChargeUnavailable { smiles, reason }) => {
            warn!("[Missing Value Warning] Gasteiger no pudo estimar la carga neta de {smiles}: {reason}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

