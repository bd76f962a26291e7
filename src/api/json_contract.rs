use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};
use crate::render::ChartScene;

pub const CHART_SCENE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSceneJsonContractV1 {
    pub schema_version: u32,
    pub scene: ChartScene,
}

impl ChartScene {
    pub fn to_json_pretty(&self) -> VizResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| VizError::InvalidData(format!("failed to serialize scene json: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> VizResult<String> {
        let payload = ChartSceneJsonContractV1 {
            schema_version: CHART_SCENE_JSON_SCHEMA_V1,
            scene: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            VizError::InvalidData(format!("failed to serialize scene contract v1: {e}"))
        })
    }

    /// Accepts either a bare scene or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> VizResult<Self> {
        if let Ok(scene) = serde_json::from_str::<ChartScene>(input) {
            return Ok(scene);
        }
        let payload: ChartSceneJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            VizError::InvalidData(format!("failed to parse scene json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SCENE_JSON_SCHEMA_V1 {
            return Err(VizError::InvalidData(format!(
                "unsupported scene schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.scene)
    }
}
