//! Fachada pública con toolkit en memoria y servidor HTTP local.

use chemengine::{ConformerId, EmbedParams, EngineError, ForceField, Minimized, Toolkit};
use chemutils::{get_charge_with, get_properties_with, smiles2mol_with, CompoundId, DomainError, EmbedOptions,
                LookupError, MolBlockHeader};
use chem_providers::{ChemSpiderClient, ChemSpiderConfig};
use pyo3::exceptions::PyTypeError;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

struct Stub {
    charges: fn() -> Result<Vec<f64>, EngineError>,
}

impl Toolkit for Stub {
    type Mol = usize;

    fn parse_smiles(&self, smiles: &str) -> Result<usize, EngineError> {
        match smiles {
            "CCO" => Ok(3),
            "[Xe]" => Ok(1),
            _ => Err(EngineError::InvalidSmiles(smiles.into())),
        }
    }
    fn add_hydrogens(&self, mol: &usize) -> Result<usize, EngineError> {
        Ok(if *mol == 3 { 9 } else { *mol })
    }
    fn sanitize(&self, _mol: &usize) -> Result<(), EngineError> {
        Ok(())
    }
    fn num_atoms(&self, mol: &usize) -> Result<usize, EngineError> {
        Ok(*mol)
    }
    fn embed_conformers(&self, _mol: &usize, params: &EmbedParams) -> Result<Vec<ConformerId>, EngineError> {
        Ok((0..params.num_conformers as ConformerId).collect())
    }
    fn minimize(&self, _mol: &usize, conf_id: ConformerId, _ff: ForceField, _iters: u32) -> Result<Minimized, EngineError> {
        Ok(Minimized { energy: f64::from((conf_id - 2).abs()), converged: true })
    }
    fn mol_block(&self, mol: &usize, conf_id: ConformerId) -> Result<String, EngineError> {
        Ok(format!("{conf_id}\n  stub\n\n{mol:>3}{:>3}  0  0  0  0  0  0  0  0999 V2000\nM  END\n", mol - 1))
    }
    fn gasteiger_charges(&self, _mol: &usize) -> Result<Vec<f64>, EngineError> {
        (self.charges)()
    }
}

#[test]
fn smiles2mol_returns_only_the_block() {
    let stub = Stub { charges: || Ok(vec![]) };
    let block = smiles2mol_with(&stub, "CCO", 5, &EmbedOptions::default()).unwrap();
    let header = MolBlockHeader::parse(&block).unwrap();
    assert_eq!(header.title, "2");
    assert_eq!((header.atom_count, header.bond_count), (9, 8));
}

#[test]
fn zero_net_charge_is_distinct_from_unavailable() {
    let neutral = Stub { charges: || Ok(vec![0.1, -0.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]) };
    assert_eq!(get_charge_with(&neutral, "CCO").unwrap(), Some(0));

    let unsupported = Stub { charges: || Err(EngineError::ChargeUnsupported("sin parámetros de Gasteiger".into())) };
    assert_eq!(get_charge_with(&unsupported, "[Xe]").unwrap(), None);
}

#[test]
fn charge_parse_errors_still_propagate() {
    let stub = Stub { charges: || Ok(vec![]) };
    assert!(matches!(get_charge_with(&stub, "???"), Err(DomainError::Parse(_))));
}

#[test]
fn charge_toolkit_failures_are_not_reported_as_missing() {
    let broken = Stub { charges: || {
                            Err(EngineError::Toolkit { op: "ComputeGasteigerCharges",
                                                       source: PyTypeError::new_err("argumento inesperado") })
                        } };
    let err = get_charge_with(&broken, "CCO").unwrap_err();
    assert!(matches!(err, DomainError::Engine(EngineError::Toolkit { op: "ComputeGasteigerCharges", .. })),
            "{err:?}");

    let invalid = Stub { charges: || Err(EngineError::Sanitize("valencia".into())) };
    assert!(matches!(get_charge_with(&invalid, "CCO"), Err(DomainError::Parse(_))));
}

#[test]
fn properties_record_has_exactly_four_keys() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap_or(0) > 0 && line != "\r\n" {
            line.clear();
        }
        let body = r#"{"id":2157,"smiles":"CC(=O)Oc1ccccc1C(=O)O","formula":"C_{9}H_{8}O_{4}","commonName":"Aspirin"}"#;
        let mut stream = stream;
        write!(stream,
               "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
               body.len()).unwrap();
    });

    let client = ChemSpiderClient::with_config("k",
                                               &ChemSpiderConfig { base_url: format!("http://{addr}"),
                                                                   timeout: Duration::from_secs(5) });
    let csid: CompoundId = "2157".parse().unwrap();
    let rec = get_properties_with(&client, csid).unwrap();
    let json = serde_json::to_value(&rec).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 4);
    assert_eq!(obj["CSID"], 2157);
    assert_eq!(obj["NAME"], "Aspirin");
    assert_eq!(obj["FORMULA"], "C_{9}H_{8}O_{4}");
}

#[test]
fn non_numeric_identifier_is_a_lookup_error() {
    let err: DomainError = "aspirin".parse::<CompoundId>().unwrap_err().into();
    assert!(matches!(err, DomainError::Lookup(LookupError::InvalidIdentifier(_))));
}
