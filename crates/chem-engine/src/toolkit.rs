//! Contrato mínimo que el resto del workspace necesita de un toolkit
//! quimioinformático. `ChemEngine` lo implementa sobre RDKit; los tests del
//! dominio usan implementaciones en memoria.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::EngineError;

/// Identificador opaco de un conformero dentro de una molécula.
pub type ConformerId = i32;

/// Campo de fuerza usado para minimizar cada conformero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForceField {
    #[default]
    Uff,
    Mmff94,
}

impl fmt::Display for ForceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForceField::Uff => write!(f, "uff"),
            ForceField::Mmff94 => write!(f, "mmff94"),
        }
    }
}

impl FromStr for ForceField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uff" => Ok(ForceField::Uff),
            "mmff" | "mmff94" => Ok(ForceField::Mmff94),
            other => Err(format!("campo de fuerza desconocido: {other}")),
        }
    }
}

/// Parámetros de embebido ETKDGv3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedParams {
    pub num_conformers: u32,
    pub random_seed: i32,
}

/// Resultado de minimizar un conformero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimized {
    pub energy: f64,
    pub converged: bool,
}

pub trait Toolkit {
    /// Handle de molécula propiedad del toolkit.
    type Mol;

    /// Devuelve `EngineError::InvalidSmiles` si el texto no es un SMILES válido.
    fn parse_smiles(&self, smiles: &str) -> Result<Self::Mol, EngineError>;
    /// Copia de la molécula con todos los hidrógenos explícitos.
    fn add_hydrogens(&self, mol: &Self::Mol) -> Result<Self::Mol, EngineError>;
    fn sanitize(&self, mol: &Self::Mol) -> Result<(), EngineError>;
    fn num_atoms(&self, mol: &Self::Mol) -> Result<usize, EngineError>;
    /// Ids de los conformeros generados, en orden de generación.
    fn embed_conformers(&self, mol: &Self::Mol, params: &EmbedParams) -> Result<Vec<ConformerId>, EngineError>;
    fn minimize(&self,
                mol: &Self::Mol,
                conf_id: ConformerId,
                force_field: ForceField,
                max_iters: u32)
                -> Result<Minimized, EngineError>;
    fn mol_block(&self, mol: &Self::Mol, conf_id: ConformerId) -> Result<String, EngineError>;
    /// Cargas parciales de Gasteiger, una por átomo.
    fn gasteiger_charges(&self, mol: &Self::Mol) -> Result<Vec<f64>, EngineError>;
}
