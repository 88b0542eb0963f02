//! Cliente mínimo de la API de compuestos de ChemSpider (RSC Compounds API).
//! Una consulta por llamada: `GET /records/{csid}/details` con la API key en
//! la cabecera `apikey`.

use chem_domain::{CompoundId, CompoundRecord, LookupError};
use log::{debug, info};
use serde::Deserialize;
use ureq::Agent;

use crate::config::ChemSpiderConfig;

const DETAIL_FIELDS: &str = "SMILES,Formula,CommonName";

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordDetails {
    smiles: Option<String>,
    formula: Option<String>,
    common_name: Option<String>,
}

pub struct ChemSpiderClient {
    agent: Agent,
    api_key: String,
    base_url: String,
}

impl ChemSpiderClient {
    pub fn with_config(api_key: impl Into<String>, config: &ChemSpiderConfig) -> Self {
        let agent: Agent = Agent::config_builder().timeout_global(Some(config.timeout))
                                                  .build()
                                                  .into();
        Self { agent,
               api_key: api_key.into(),
               base_url: config.base_url.trim_end_matches('/').to_string() }
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    /// Nombre común, SMILES y fórmula del compuesto `csid`.
    pub fn get_compound(&self, csid: CompoundId) -> Result<CompoundRecord, LookupError> {
        let url = format!("{}/records/{csid}/details?fields={DETAIL_FIELDS}", self.base_url);
        debug!("chemspider:start csid={csid}");

        let mut resp = self.agent
                           .get(url.as_str())
                           .header("apikey", self.api_key.as_str())
                           .header("Accept", "application/json")
                           .call()
                           .map_err(|e| classify(e, csid))?;
        let body = resp.body_mut().read_to_string().map_err(|e| classify(e, csid))?;

        let record = parse_details(csid, &body)?;
        info!("chemspider:done csid={csid} name={:?}", record.name());
        Ok(record)
    }
}

/// Convierte el JSON de detalles en un `CompoundRecord`. Sin `commonName`
/// el nombre queda vacío; sin `smiles` o `formula` la respuesta es inválida.
pub fn parse_details(csid: CompoundId, body: &str) -> Result<CompoundRecord, LookupError> {
    let details: RecordDetails = serde_json::from_str(body)?;
    let smiles = details.smiles
                        .ok_or_else(|| LookupError::MalformedResponse(format!("csid {csid}: falta smiles")))?;
    let formula = details.formula
                         .ok_or_else(|| LookupError::MalformedResponse(format!("csid {csid}: falta formula")))?;
    if details.common_name.is_none() {
        debug!("csid {csid} sin commonName, se usa nombre vacío");
    }
    Ok(CompoundRecord::new(csid, details.common_name, smiles, formula))
}

fn classify(err: ureq::Error, csid: CompoundId) -> LookupError {
    match err {
        ureq::Error::StatusCode(status @ (401 | 403)) => LookupError::Authentication { status },
        ureq::Error::StatusCode(404) => LookupError::UnknownCompound(csid.get()),
        ureq::Error::StatusCode(status) => LookupError::Http { status },
        other => LookupError::Network(other.to_string()),
    }
}
