use pyo3::PyErr;
use thiserror::Error;
pub mod rdkit;
pub mod toolkit;
pub use rdkit::RdkitMol;
pub use toolkit::{ConformerId, EmbedParams, ForceField, Minimized, Toolkit};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Error inicializando Python/RDKit: {0}")]
    Init(PyErr),
    #[error("SMILES inválido: {0}")]
    InvalidSmiles(String),
    #[error("Fallo de sanitización: {0}")]
    Sanitize(String),
    #[error("Fallo en el embebido 3D: {0}")]
    Embedding(String),
    #[error("Fallo del campo de fuerza {force_field} en el conformero {conf_id}: {reason}")]
    ForceField {
        force_field: ForceField,
        conf_id: ConformerId,
        reason: String,
    },
    #[error("Cargas de Gasteiger no disponibles: {0}")]
    ChargeUnsupported(String),
    #[error("Error de RDKit en {op}: {source}")]
    Toolkit { op: &'static str, source: PyErr },
}

/// Acceso a RDKit. Se construye con [`ChemEngine::init`], que importa los
/// módulos una sola vez por proceso.
pub struct ChemEngine {
    _private: (),
}

impl ChemEngine {
    pub fn init() -> Result<Self, EngineError> {
        rdkit::init_python().map_err(EngineError::Init)?;
        Ok(Self { _private: () })
    }
}

impl Toolkit for ChemEngine {
    type Mol = RdkitMol;

    fn parse_smiles(&self, smiles: &str) -> Result<RdkitMol, EngineError> {
        rdkit::parse_smiles(smiles)
    }

    fn add_hydrogens(&self, mol: &RdkitMol) -> Result<RdkitMol, EngineError> {
        rdkit::add_hydrogens(mol)
    }

    fn sanitize(&self, mol: &RdkitMol) -> Result<(), EngineError> {
        rdkit::sanitize(mol)
    }

    fn num_atoms(&self, mol: &RdkitMol) -> Result<usize, EngineError> {
        rdkit::num_atoms(mol)
    }

    fn embed_conformers(&self, mol: &RdkitMol, params: &EmbedParams) -> Result<Vec<ConformerId>, EngineError> {
        rdkit::embed_conformers(mol, params)
    }

    fn minimize(&self,
                mol: &RdkitMol,
                conf_id: ConformerId,
                force_field: ForceField,
                max_iters: u32)
                -> Result<Minimized, EngineError> {
        rdkit::minimize(mol, conf_id, force_field, max_iters)
    }

    fn mol_block(&self, mol: &RdkitMol, conf_id: ConformerId) -> Result<String, EngineError> {
        rdkit::mol_block(mol, conf_id)
    }

    fn gasteiger_charges(&self, mol: &RdkitMol) -> Result<Vec<f64>, EngineError> {
        rdkit::gasteiger_charges(mol)
    }
}
