use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ChartSpec;

pub const CHART_SPEC_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpecJsonContractV1 {
    pub schema_version: u32,
    pub spec: ChartSpec,
}

impl ChartSpec {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart spec: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSpecJsonContractV1 {
            schema_version: CHART_SPEC_JSON_SCHEMA_V1,
            spec: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart spec contract v1: {e}"))
        })
    }

    /// Accepts either a bare spec or a versioned contract envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(spec) = serde_json::from_str::<ChartSpec>(input) {
            return Ok(spec);
        }
        let payload: ChartSpecJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart spec json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SPEC_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart spec schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.spec)
    }
}
