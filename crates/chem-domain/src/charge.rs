//! Estimación de la carga neta a partir de cargas parciales de Gasteiger.
use chemengine::{EngineError, Toolkit};
use log::debug;

use crate::{DomainError, Molecule};

/// Suma las cargas parciales y redondea al entero más cercano (empates al par).
///
/// Devuelve `None` si alguna carga no es finita: RDKit escribe NaN para los
/// elementos que Gasteiger no parametriza.
pub fn round_net_charge(charges: &[f64]) -> Option<i32> {
    if charges.iter().any(|c| !c.is_finite()) {
        return None;
    }
    let total: f64 = charges.iter().sum();
    let rounded = total.round_ties_even();
    if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return None;
    }
    Some(rounded as i32)
}

/// Carga neta estimada de una molécula dada como SMILES.
///
/// # Errors
///
/// - `DomainError::Parse` si el SMILES no es válido.
/// - `DomainError::ChargeUnavailable` si Gasteiger no admite la estructura.
/// - `DomainError::Engine` ante cualquier otro fallo del toolkit.
pub fn estimate_net_charge<T>(toolkit: &T, smiles: &str) -> Result<i32, DomainError>
    where T: Toolkit
{
    let unavailable = |reason: String| DomainError::ChargeUnavailable { smiles: smiles.to_string(),
                                                                         reason };
    let molecule: Molecule<T::Mol> = Molecule::from_smiles(toolkit, smiles)?;
    let charges = match toolkit.gasteiger_charges(molecule.handle()) {
        Ok(charges) => charges,
        Err(EngineError::ChargeUnsupported(reason)) => return Err(unavailable(reason)),
        Err(other) => return Err(other.into()),
    };
    if charges.len() != molecule.num_atoms() {
        return Err(unavailable(format!("{} cargas para {} átomos", charges.len(), molecule.num_atoms())));
    }
    let net = round_net_charge(&charges).ok_or_else(|| unavailable("carga parcial no finita".into()))?;
    debug!("carga neta smiles={smiles} net={net}");
    Ok(net)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_sum_rounds_to_zero() {
        let charges = [-0.39, 0.04, -0.05, 0.03, 0.03, 0.03, 0.05, 0.05, 0.21];
        assert_eq!(round_net_charge(&charges), Some(0));
    }

    #[test]
    fn charged_species_round_to_nearest() {
        assert_eq!(round_net_charge(&[-0.6, -0.55, 0.2]), Some(-1));
        assert_eq!(round_net_charge(&[0.7, 0.4]), Some(1));
    }

    #[test]
    fn halves_round_to_even() {
        assert_eq!(round_net_charge(&[0.5]), Some(0));
        assert_eq!(round_net_charge(&[1.0, 0.5]), Some(2));
        assert_eq!(round_net_charge(&[-2.5]), Some(-2));
    }

    #[test]
    fn non_finite_charges_are_unavailable() {
        assert_eq!(round_net_charge(&[0.1, f64::NAN]), None);
        assert_eq!(round_net_charge(&[f64::INFINITY]), None);
    }

    #[test]
    fn empty_molecule_is_neutral() {
        assert_eq!(round_net_charge(&[]), Some(0));
    }
}
