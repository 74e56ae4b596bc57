//! V6: engine scoping. Metadata gains the active engine id; macro banks are
//! re-derived from that engine's template at apply time.

use serde::{Deserialize, Serialize};

use crate::engine::DEFAULT_ENGINE_ID;
use crate::preset::v4::{PresetType, ProjectDoc, SceneDoc};
use crate::preset::v5::default_mode_id;
use crate::preset::CompatWindow;
use crate::project::{ColorChemistry, RoleWeights, TempoSync, Transition};

fn default_engine_id() -> String {
    DEFAULT_ENGINE_ID.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaV6 {
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
    #[serde(default)]
    pub preset_type: PresetType,
    #[serde(default)]
    pub default_transition: Option<Transition>,
    #[serde(default = "default_mode_id")]
    pub active_mode_id: String,
    #[serde(default)]
    pub color_chemistry: ColorChemistry,
    #[serde(default)]
    pub role_weights: RoleWeights,
    #[serde(default)]
    pub tempo_sync: TempoSync,
    #[serde(default = "default_engine_id")]
    pub active_engine_id: String,
}

impl Default for MetaV6 {
    fn default() -> Self {
        MetaV6 {
            name: String::new(),
            author: None,
            description: None,
            created_at: None,
            updated_at: None,
            compatibility: None,
            preset_type: PresetType::default(),
            default_transition: None,
            active_mode_id: default_mode_id(),
            color_chemistry: ColorChemistry::default(),
            role_weights: RoleWeights::default(),
            tempo_sync: TempoSync::default(),
            active_engine_id: default_engine_id(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetV6 {
    pub metadata: MetaV6,
    #[serde(default)]
    pub scenes: Vec<SceneDoc>,
    #[serde(default)]
    pub active_scene_id: Option<String>,
    #[serde(default)]
    pub project: Option<ProjectDoc>,
}
