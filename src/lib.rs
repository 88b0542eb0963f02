//! chemutils
//!
//! Utilidades químicas sobre RDKit y ChemSpider:
//! - `smiles2mol`: SMILES → molfile 3D del conformero de menor energía.
//! - `get_properties`: registro CSID/NAME/SMILES/FORMULA desde ChemSpider.
//! - `get_charge`: carga neta estimada con cargas de Gasteiger.
//!
//! Los tipos de dominio se reexportan desde `chem-domain`.

pub mod config;
pub mod utils;

pub use chem_domain::{CompoundId, CompoundRecord, ConformerSearch, DomainError, EmbedOptions, LookupError,
                      MolBlockHeader};
pub use chemengine::ForceField;
pub use config::{AppConfig, CONFIG};
pub use utils::{engine, get_charge, get_charge_with, get_properties, get_properties_with, smiles2mol, smiles2mol_with};
