//! Conversión SMILES → bloque molfile 3D.
//!
//! Secuencia: parsear, añadir hidrógenos, sanitizar, embeber N conformeros
//! con ETKDGv3 y semilla fija, minimizar cada uno, quedarse con el de menor
//! energía (empates: el primero generado) y serializarlo.
use chemengine::{ConformerId, EmbedParams, ForceField, Toolkit};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::{DomainError, Molecule};

/// Semilla histórica del embebido; se mantiene como valor por defecto.
pub const DEFAULT_EMBED_SEED: i32 = 42;
pub const DEFAULT_MAX_ITERS: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedOptions {
    pub random_seed: i32,
    pub force_field: ForceField,
    pub max_iters: u32,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self { random_seed: DEFAULT_EMBED_SEED,
               force_field: ForceField::Uff,
               max_iters: DEFAULT_MAX_ITERS }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conformer {
    pub id: ConformerId,
    pub energy: f64,
    pub converged: bool,
}

/// Resultado completo de la búsqueda de conformeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConformerSearch {
    pub smiles: String,
    pub num_atoms: usize,
    /// Todos los conformeros puntuados, en orden de generación.
    pub conformers: Vec<Conformer>,
    pub selected: Conformer,
    pub mol_block: String,
}

/// Conformero de menor energía; en empate gana el primero.
/// Las energías NaN nunca ganan a una finita.
pub fn select_lowest_energy(conformers: &[Conformer]) -> Option<Conformer> {
    match conformers {
        [] => None,
        [only] => Some(*only),
        _ => conformers.iter().copied().min_by(|a, b| energy_order(a.energy, b.energy)),
    }
}

fn energy_order(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

pub fn search_conformers<T>(toolkit: &T,
                            smiles: &str,
                            num_conformers: usize,
                            options: &EmbedOptions)
                            -> Result<ConformerSearch, DomainError>
    where T: Toolkit
{
    if num_conformers == 0 {
        return Err(DomainError::Validation("el número de conformeros debe ser positivo".into()));
    }
    let num_conformers = u32::try_from(num_conformers).map_err(|_| {
                             DomainError::Validation(format!("demasiados conformeros: {num_conformers}"))
                         })?;

    let molecule: Molecule<T::Mol> = Molecule::from_smiles(toolkit, smiles)?;
    toolkit.sanitize(molecule.handle())?;

    let params = EmbedParams { num_conformers,
                               random_seed: options.random_seed };
    let ids = toolkit.embed_conformers(molecule.handle(), &params)?;
    debug!("embed smiles={smiles} pedidos={num_conformers} generados={}", ids.len());
    if ids.is_empty() {
        return Err(DomainError::StructureGeneration(format!("no se generó ningún conformero para {smiles}")));
    }

    let mut conformers = Vec::with_capacity(ids.len());
    for id in ids {
        let min = toolkit.minimize(molecule.handle(), id, options.force_field, options.max_iters)?;
        debug!("conformero {id}: energía={:.4} convergido={}", min.energy, min.converged);
        conformers.push(Conformer { id,
                                    energy: min.energy,
                                    converged: min.converged });
    }

    let selected = select_lowest_energy(&conformers).ok_or_else(|| {
                       DomainError::StructureGeneration("sin conformeros puntuados".into())
                   })?;
    let mol_block = toolkit.mol_block(molecule.handle(), selected.id)?;
    info!("smiles={smiles} conformero={} energía={:.4} ({})",
          selected.id,
          selected.energy,
          options.force_field);

    Ok(ConformerSearch { smiles: molecule.smiles().to_string(),
                         num_atoms: molecule.num_atoms(),
                         conformers,
                         selected,
                         mol_block })
}
