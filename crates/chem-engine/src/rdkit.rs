use log::debug;
use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyModule};
use std::sync::OnceLock;

use crate::toolkit::{ConformerId, EmbedParams, ForceField, Minimized};
use crate::EngineError;

const GASTEIGER_PROP: &str = "_GasteigerCharge";

struct RdkitModules {
    chem: Py<PyModule>,
    all_chem: Py<PyModule>,
}

static RDKIT_MODULES: OnceLock<RdkitModules> = OnceLock::new();

/// Handle de una molécula RDKit (`rdkit.Chem.Mol`) vivo en el intérprete.
#[derive(Debug)]
pub struct RdkitMol(Py<PyAny>);

pub fn init_python() -> PyResult<()> {
    if RDKIT_MODULES.get().is_some() {
        return Ok(());
    }
    Python::attach(|py| {
        let chem = PyModule::import(py, "rdkit.Chem")?;
        let all_chem = PyModule::import(py, "rdkit.Chem.AllChem")?;
        let version: String = py.import("rdkit")?.getattr("__version__")?.extract()?;
        debug!("rdkit {version} importado");
        // Si otro hilo ganó la carrera, se conserva su copia.
        RDKIT_MODULES.set(RdkitModules { chem: chem.unbind(),
                                         all_chem: all_chem.unbind() })
                     .ok();
        Ok(())
    })
}

fn modules() -> PyResult<&'static RdkitModules> {
    RDKIT_MODULES.get().ok_or_else(|| {
                           PyErr::new::<PyRuntimeError, _>("init_python() debe llamarse antes de usar RDKit")
                       })
}

fn toolkit_err(op: &'static str) -> impl FnOnce(PyErr) -> EngineError {
    move |source| EngineError::Toolkit { op, source }
}

pub fn parse_smiles(smiles: &str) -> Result<RdkitMol, EngineError> {
    let rdkit = modules().map_err(toolkit_err("MolFromSmiles"))?;
    Python::attach(|py| {
        let mol = rdkit.chem
                       .bind(py)
                       .call_method1("MolFromSmiles", (smiles,))
                       .map_err(toolkit_err("MolFromSmiles"))?;
        if mol.is_none() {
            return Err(EngineError::InvalidSmiles(smiles.to_string()));
        }
        Ok(RdkitMol(mol.unbind()))
    })
}

pub fn add_hydrogens(mol: &RdkitMol) -> Result<RdkitMol, EngineError> {
    let rdkit = modules().map_err(toolkit_err("AddHs"))?;
    Python::attach(|py| {
        let with_hs = rdkit.chem
                           .bind(py)
                           .call_method1("AddHs", (mol.0.bind(py),))
                           .map_err(toolkit_err("AddHs"))?;
        Ok(RdkitMol(with_hs.unbind()))
    })
}

pub fn sanitize(mol: &RdkitMol) -> Result<(), EngineError> {
    let rdkit = modules().map_err(toolkit_err("SanitizeMol"))?;
    Python::attach(|py| {
        rdkit.chem
             .bind(py)
             .call_method1("SanitizeMol", (mol.0.bind(py),))
             .map_err(|e| EngineError::Sanitize(e.to_string()))?;
        Ok(())
    })
}

pub fn num_atoms(mol: &RdkitMol) -> Result<usize, EngineError> {
    Python::attach(|py| {
        mol.0
           .bind(py)
           .call_method0("GetNumAtoms")
           .and_then(|n| n.extract::<usize>())
           .map_err(toolkit_err("GetNumAtoms"))
    })
}

pub fn embed_conformers(mol: &RdkitMol, params: &EmbedParams) -> Result<Vec<ConformerId>, EngineError> {
    let rdkit = modules().map_err(toolkit_err("EmbedMultipleConfs"))?;
    Python::attach(|py| {
        let all_chem = rdkit.all_chem.bind(py);
        let etkdg = all_chem.call_method0("ETKDGv3").map_err(toolkit_err("ETKDGv3"))?;
        etkdg.setattr("randomSeed", params.random_seed)
             .map_err(toolkit_err("ETKDGv3"))?;
        let ids = all_chem.call_method1("EmbedMultipleConfs", (mol.0.bind(py), params.num_conformers, etkdg))
                          .map_err(|e| EngineError::Embedding(e.to_string()))?;
        // `_vecti` de Boost no es una secuencia de Python: se itera a mano.
        let mut out = Vec::new();
        for id in ids.try_iter().map_err(toolkit_err("EmbedMultipleConfs"))? {
            let id = id.and_then(|v| v.extract::<ConformerId>())
                       .map_err(toolkit_err("EmbedMultipleConfs"))?;
            out.push(id);
        }
        Ok(out)
    })
}

pub fn minimize(mol: &RdkitMol,
                conf_id: ConformerId,
                force_field: ForceField,
                max_iters: u32)
                -> Result<Minimized, EngineError> {
    let rdkit = modules().map_err(toolkit_err("ForceField"))?;
    let ff_err = |reason: String| EngineError::ForceField { force_field, conf_id, reason };
    Python::attach(|py| {
        let all_chem = rdkit.all_chem.bind(py);
        let mol = mol.0.bind(py);
        let kwargs = PyDict::new(py);
        kwargs.set_item("confId", conf_id).map_err(toolkit_err("ForceField"))?;
        let ff = match force_field {
            ForceField::Uff => all_chem.call_method("UFFGetMoleculeForceField", (mol,), Some(&kwargs)),
            ForceField::Mmff94 => {
                let props = all_chem.call_method1("MMFFGetMoleculeProperties", (mol,))
                                    .map_err(|e| ff_err(e.to_string()))?;
                if props.is_none() {
                    return Err(ff_err("faltan parámetros MMFF94 para la molécula".into()));
                }
                all_chem.call_method("MMFFGetMoleculeForceField", (mol, props), Some(&kwargs))
            }
        }.map_err(|e| ff_err(e.to_string()))?;
        if ff.is_none() {
            return Err(ff_err("no se pudo construir el campo de fuerza".into()));
        }

        let opts = PyDict::new(py);
        opts.set_item("maxIts", max_iters).map_err(toolkit_err("Minimize"))?;
        let status: i32 = ff.call_method("Minimize", (), Some(&opts))
                            .and_then(|s| s.extract())
                            .map_err(|e| ff_err(e.to_string()))?;
        let energy: f64 = ff.call_method0("CalcEnergy")
                            .and_then(|e| e.extract())
                            .map_err(|e| ff_err(e.to_string()))?;
        Ok(Minimized { energy, converged: status == 0 })
    })
}

pub fn mol_block(mol: &RdkitMol, conf_id: ConformerId) -> Result<String, EngineError> {
    let rdkit = modules().map_err(toolkit_err("MolToMolBlock"))?;
    Python::attach(|py| {
        let kwargs = PyDict::new(py);
        kwargs.set_item("confId", conf_id).map_err(toolkit_err("MolToMolBlock"))?;
        rdkit.chem
             .bind(py)
             .call_method("MolToMolBlock", (mol.0.bind(py),), Some(&kwargs))
             .and_then(|block| block.extract::<String>())
             .map_err(toolkit_err("MolToMolBlock"))
    })
}

// RDKit señala los fallos de parametrización con ValueError o RuntimeError;
// cualquier otra excepción es un error de uso y se propaga.
fn classify_gasteiger_err(py: Python<'_>, e: PyErr) -> EngineError {
    if e.is_instance_of::<PyValueError>(py) || e.is_instance_of::<PyRuntimeError>(py) {
        EngineError::ChargeUnsupported(e.to_string())
    } else {
        EngineError::Toolkit { op: "ComputeGasteigerCharges", source: e }
    }
}

pub fn gasteiger_charges(mol: &RdkitMol) -> Result<Vec<f64>, EngineError> {
    let rdkit = modules().map_err(toolkit_err("ComputeGasteigerCharges"))?;
    Python::attach(|py| {
        let mol = mol.0.bind(py);
        rdkit.all_chem
             .bind(py)
             .call_method1("ComputeGasteigerCharges", (mol,))
             .map_err(|e| classify_gasteiger_err(py, e))?;
        let atoms = mol.call_method0("GetAtoms")
                       .and_then(|atoms| atoms.try_iter())
                       .map_err(toolkit_err("GetAtoms"))?;
        let mut charges = Vec::new();
        for atom in atoms {
            let atom = atom.map_err(toolkit_err("GetAtoms"))?;
            match atom.call_method1("GetDoubleProp", (GASTEIGER_PROP,)).and_then(|c| c.extract::<f64>()) {
                Ok(charge) => charges.push(charge),
                Err(e) if e.is_instance_of::<PyKeyError>(py) => {
                    return Err(EngineError::ChargeUnsupported(format!("átomo sin {GASTEIGER_PROP}")));
                }
                Err(e) => return Err(EngineError::Toolkit { op: "GetDoubleProp", source: e }),
            }
        }
        Ok(charges)
    })
}
