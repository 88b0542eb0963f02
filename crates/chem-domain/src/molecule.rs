use chemengine::Toolkit;
use std::fmt;

use crate::DomainError;

/// Molécula con todos los hidrógenos explícitos, tal como la entrega el
/// toolkit. El handle es opaco; aquí solo se guarda lo que se necesita para
/// trazabilidad y validación.
pub struct Molecule<M> {
    smiles: String,
    handle: M,
    num_atoms: usize,
}

impl<M> Molecule<M> {
    /// Parsea el SMILES y añade hidrógenos explícitos.
    ///
    /// # Errors
    ///
    /// `DomainError::Parse` si el SMILES no es válido o no contiene átomos.
    pub fn from_smiles<T>(toolkit: &T, smiles: &str) -> Result<Self, DomainError>
        where T: Toolkit<Mol = M>
    {
        let parsed = toolkit.parse_smiles(smiles)?;
        let handle = toolkit.add_hydrogens(&parsed)?;
        let num_atoms = toolkit.num_atoms(&handle)?;
        if num_atoms == 0 {
            return Err(DomainError::Parse(format!("SMILES sin átomos: {smiles:?}")));
        }
        Ok(Molecule { smiles: smiles.to_string(),
                      handle,
                      num_atoms })
    }

    pub fn smiles(&self) -> &str { &self.smiles }
    pub fn handle(&self) -> &M { &self.handle }
    pub fn num_atoms(&self) -> usize { self.num_atoms }
}

impl<M> fmt::Display for Molecule<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<smiles: {}, átomos: {}>", self.smiles, self.num_atoms)
    }
}
