//! Lectura de la cabecera de un bloque MDL molfile (V2000 o V3000).
//! Solo se leen título y recuentos; el resto del bloque lo produce y
//! consume el toolkit.
use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CtabVersion {
    V2000,
    V3000,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MolBlockHeader {
    pub title: String,
    pub program: String,
    pub atom_count: usize,
    pub bond_count: usize,
    pub version: CtabVersion,
}

impl MolBlockHeader {
    pub fn parse(block: &str) -> Result<Self, DomainError> {
        let lines: Vec<&str> = block.lines().collect();
        if lines.len() < 4 {
            return Err(DomainError::Parse(format!("molfile truncado: {} líneas", lines.len())));
        }
        let title = lines[0].trim().to_string();
        let program = lines[1].trim().to_string();
        let counts = lines[3];

        if counts.trim_end().ends_with("V3000") {
            let (atom_count, bond_count) = v3000_counts(&lines[4..])?;
            return Ok(MolBlockHeader { title,
                                       program,
                                       atom_count,
                                       bond_count,
                                       version: CtabVersion::V3000 });
        }
        Ok(MolBlockHeader { title,
                            program,
                            atom_count: fixed_field(counts, 0)?,
                            bond_count: fixed_field(counts, 3)?,
                            version: CtabVersion::V2000 })
    }
}

// Campos de ancho fijo (3 columnas) de la línea de recuentos V2000.
fn fixed_field(line: &str, start: usize) -> Result<usize, DomainError> {
    line.get(start..start + 3)
        .map(str::trim)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| DomainError::Parse(format!("línea de recuentos inválida: {line:?}")))
}

fn v3000_counts(lines: &[&str]) -> Result<(usize, usize), DomainError> {
    let counts = lines.iter()
                      .find_map(|l| l.strip_prefix("M  V30 COUNTS"))
                      .ok_or_else(|| DomainError::Parse("bloque V3000 sin línea COUNTS".into()))?;
    let mut fields = counts.split_whitespace().map(str::parse::<usize>);
    match (fields.next(), fields.next()) {
        (Some(Ok(atoms)), Some(Ok(bonds))) => Ok((atoms, bonds)),
        _ => Err(DomainError::Parse(format!("COUNTS V3000 inválido: {counts:?}"))),
    }
}
