//! V3: the structural rewrite generation. Layers are `{type, params}`
//! records keyed by canonical layer-type id, and modulation/macro targets
//! are structured `{layerType, param}` pairs instead of dotted strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::param::ParamValue;
use crate::preset::CompatWindow;
use crate::target::ParamTarget;

fn default_true() -> bool {
    true
}

fn default_amount() -> f64 {
    1.0
}

/// A canonically-typed layer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerDoc {
    #[serde(rename = "type")]
    pub layer_type: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub params: BTreeMap<String, ParamValue>,
}

impl LayerDoc {
    pub fn new(layer_type: &str) -> Self {
        LayerDoc {
            layer_type: layer_type.to_string(),
            enabled: true,
            params: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModRouteDoc {
    pub source: String,
    pub target: ParamTarget,
    #[serde(default = "default_amount")]
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroDoc {
    pub name: String,
    #[serde(default)]
    pub targets: Vec<ParamTarget>,
    #[serde(default)]
    pub value: f64,
}

/// V3 metadata: first generation to carry a compatibility window.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaV3 {
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
    #[serde(default)]
    pub compatibility: Option<CompatWindow>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetV3 {
    #[serde(default)]
    pub metadata: MetaV3,
    #[serde(default)]
    pub layers: Vec<LayerDoc>,
    #[serde(default)]
    pub modulations: Vec<ModRouteDoc>,
    #[serde(default)]
    pub macros: Vec<MacroDoc>,
}
