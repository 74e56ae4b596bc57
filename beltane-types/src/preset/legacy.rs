//! V1/V2: the pre-structural generations. Layers are keyed by hardcoded
//! legacy ids (`"layer-plasma"`) and modulation/macro targets are flat
//! dotted strings, exactly the vocabulary the runtime still speaks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::param::ParamValue;
use crate::project::{MacroSlot, ModRoute};

fn default_true() -> bool {
    true
}

/// A layer as V1/V2 documents stored it. Everything, opacity included,
/// lives in the params map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyLayer {
    pub id: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub params: BTreeMap<String, ParamValue>,
}

impl LegacyLayer {
    pub fn new(id: &str) -> Self {
        LegacyLayer {
            id: id.to_string(),
            enabled: true,
            params: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaV1 {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<u64>,
}

/// V2 metadata: V1 plus the `updatedAt` stamp the V1→V2 step writes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaV2 {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<u64>,
    #[serde(default)]
    pub updated_at: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetV1 {
    #[serde(default)]
    pub metadata: MetaV1,
    #[serde(default)]
    pub layers: Vec<LegacyLayer>,
    #[serde(default)]
    pub modulations: Vec<ModRoute>,
    #[serde(default)]
    pub macros: Vec<MacroSlot>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetV2 {
    #[serde(default)]
    pub metadata: MetaV2,
    #[serde(default)]
    pub layers: Vec<LegacyLayer>,
    #[serde(default)]
    pub modulations: Vec<ModRoute>,
    #[serde(default)]
    pub macros: Vec<MacroSlot>,
}
