//! V4: scenes arrive. A preset is either a "scene" preset (a scene list to
//! drop onto the current project) or a "performance" preset (a full project
//! snapshot). Scene content is runtime-shaped: layers keyed by legacy id,
//! targets as dotted strings, because V4 presets are saved from live state.

use serde::{Deserialize, Serialize};

use crate::preset::CompatWindow;
use crate::project::{ColorChemistry, Layer, MacroSlot, ModRoute, RoleWeights, TempoSync, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetType {
    #[default]
    Scene,
    Performance,
}

/// A stored scene. Transitions are optional on the wire; the applier
/// backfills them from the preset's declared default transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDoc {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub modulations: Vec<ModRoute>,
    #[serde(default)]
    pub macros: Vec<MacroSlot>,
    #[serde(default)]
    pub transition_in: Option<Transition>,
    #[serde(default)]
    pub transition_out: Option<Transition>,
}

/// Full project snapshot embedded in performance presets. Performance
/// fields are optional here because V4-era snapshots predate them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDoc {
    #[serde(default)]
    pub scenes: Vec<SceneDoc>,
    #[serde(default)]
    pub active_scene_id: Option<String>,
    #[serde(default)]
    pub active_mode_id: Option<String>,
    #[serde(default)]
    pub color_chemistry: Option<ColorChemistry>,
    #[serde(default)]
    pub role_weights: Option<RoleWeights>,
    #[serde(default)]
    pub tempo_sync: Option<TempoSync>,
    #[serde(default)]
    pub active_engine_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaV4 {
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
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetV4 {
    pub metadata: MetaV4,
    #[serde(default)]
    pub scenes: Vec<SceneDoc>,
    #[serde(default)]
    pub active_scene_id: Option<String>,
    #[serde(default)]
    pub project: Option<ProjectDoc>,
}
