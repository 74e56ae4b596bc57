//! V5: performance scoping. Metadata gains the active mode, color
//! chemistry, role weights, and tempo sync the performance surface needs.

use serde::{Deserialize, Serialize};

use crate::preset::v4::{PresetType, ProjectDoc, SceneDoc};
use crate::preset::CompatWindow;
use crate::project::{ColorChemistry, RoleWeights, TempoSync, Transition, DEFAULT_MODE_ID};

pub(crate) fn default_mode_id() -> String {
    DEFAULT_MODE_ID.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaV5 {
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
}

impl Default for MetaV5 {
    fn default() -> Self {
        MetaV5 {
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
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetV5 {
    pub metadata: MetaV5,
    #[serde(default)]
    pub scenes: Vec<SceneDoc>,
    #[serde(default)]
    pub active_scene_id: Option<String>,
    #[serde(default)]
    pub project: Option<ProjectDoc>,
}
