use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::LookupError;

/// Identificador ChemSpider (CSID).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompoundId(u64);

impl CompoundId {
    pub fn new(id: u64) -> Self { Self(id) }
    pub fn get(self) -> u64 { self.0 }
}

impl From<u64> for CompoundId {
    fn from(id: u64) -> Self { Self(id) }
}

impl FromStr for CompoundId {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LookupError::InvalidIdentifier(s.to_string()));
        }
        trimmed.parse().map(Self).map_err(|_| LookupError::InvalidIdentifier(s.to_string()))
    }
}

impl fmt::Display for CompoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registro de propiedades de un compuesto. Se serializa con las claves
/// `CSID`, `NAME`, `SMILES` y `FORMULA`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundRecord {
    #[serde(rename = "CSID")]
    csid: CompoundId,
    #[serde(rename = "NAME")]
    name: String,
    #[serde(rename = "SMILES")]
    smiles: String,
    #[serde(rename = "FORMULA")]
    formula: String,
}

impl CompoundRecord {
    /// `name` ausente se guarda como cadena vacía.
    pub fn new(csid: CompoundId, name: Option<String>, smiles: String, formula: String) -> Self {
        Self { csid,
               name: name.unwrap_or_default(),
               smiles,
               formula }
    }

    pub fn csid(&self) -> CompoundId { self.csid }
    pub fn name(&self) -> &str { &self.name }
    pub fn smiles(&self) -> &str { &self.smiles }
    pub fn formula(&self) -> &str { &self.formula }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "CSID": self.csid.get(),
            "NAME": self.name,
            "SMILES": self.smiles,
            "FORMULA": self.formula,
        })
    }
}
