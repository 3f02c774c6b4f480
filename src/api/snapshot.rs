use serde::{Deserialize, Serialize};

use crate::core::{Geometry, ValueState};
use crate::error::{ThermometerError, ThermometerResult};
use crate::render::Renderer;

use super::{Thermometer, ThermometerConfig};

pub const THERMOMETER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermometerSnapshot {
    pub schema_version: u32,
    pub config: ThermometerConfig,
    pub container: String,
    pub values: ValueState,
    pub geometry: Geometry,
    pub domain: (f64, f64),
    pub tick_values: Vec<f64>,
    pub mercury_top_y: f64,
}

impl ThermometerSnapshot {
    pub fn to_json_pretty(&self) -> ThermometerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ThermometerError::Json(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json_str(input: &str) -> ThermometerResult<Self> {
        let snapshot: Self = serde_json::from_str(input)
            .map_err(|e| ThermometerError::Json(format!("failed to parse snapshot: {e}")))?;
        if snapshot.schema_version != THERMOMETER_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ThermometerError::Json(format!(
                "unsupported snapshot schema version: {}",
                snapshot.schema_version
            )));
        }
        Ok(snapshot)
    }
}

impl<R: Renderer> Thermometer<R> {
    /// Captures the rendered state.
    pub fn snapshot(&self) -> ThermometerResult<ThermometerSnapshot> {
        let mounted = self.mounted()?;
        Ok(ThermometerSnapshot {
            schema_version: THERMOMETER_SNAPSHOT_JSON_SCHEMA_V1,
            config: self.config.clone(),
            container: mounted.container.clone(),
            values: mounted.values,
            geometry: mounted.geometry,
            domain: mounted.axis.domain,
            tick_values: mounted.axis.tick_values.to_vec(),
            mercury_top_y: mounted.axis.y(mounted.values.current()),
        })
    }
}
