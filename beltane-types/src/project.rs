use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::param::ParamValue;

/// Fixed size of the runtime macro bank. Engines define fewer semantic
/// macros; the remaining slots are inert placeholders.
pub const MACRO_BANK_SIZE: usize = 8;

/// Performance mode every project starts in.
pub const DEFAULT_MODE_ID: &str = "classic";

fn default_true() -> bool {
    true
}

fn default_opacity() -> f64 {
    1.0
}

fn default_amount() -> f64 {
    1.0
}

/// Scene transition: a style tag the renderer interprets, plus a duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub style: String,
    pub duration_ms: u64,
}

impl Transition {
    pub fn new(style: &str, duration_ms: u64) -> Self {
        Transition {
            style: style.to_string(),
            duration_ms,
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Transition::new("fade", 500)
    }
}

/// Palette pairing the renderer builds its gradients from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorChemistry {
    pub base: String,
    pub accent: String,
}

impl Default for ColorChemistry {
    fn default() -> Self {
        ColorChemistry {
            base: "spectral".to_string(),
            accent: "ember".to_string(),
        }
    }
}

/// Relative weighting of the audio analysis roles feeding modulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleWeights {
    pub bass: f64,
    pub mids: f64,
    pub highs: f64,
}

impl Default for RoleWeights {
    fn default() -> Self {
        RoleWeights {
            bass: 1.0,
            mids: 1.0,
            highs: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TempoSync {
    pub enabled: bool,
    pub division: String,
}

impl Default for TempoSync {
    fn default() -> Self {
        TempoSync {
            enabled: false,
            division: "1/4".to_string(),
        }
    }
}

/// A composited visual layer as the runtime holds it. Layers keep their
/// legacy document ids (`"layer-plasma"`); opacity is first-class rather
/// than an entry in the params map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub params: BTreeMap<String, ParamValue>,
}

impl Layer {
    pub fn new(id: &str) -> Self {
        Layer {
            id: id.to_string(),
            enabled: true,
            opacity: 1.0,
            params: BTreeMap::new(),
        }
    }
}

/// One modulation route. The target is a legacy dotted string
/// (`"layer-plasma.speed"`), the form the renderer resolves at frame time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModRoute {
    pub source: String,
    pub target: String,
    #[serde(default = "default_amount")]
    pub amount: f64,
}

/// One slot of the macro bank. Placeholder slots have an empty name and no
/// targets and are skipped by the performance surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroSlot {
    pub name: String,
    #[serde(default)]
    pub targets: Vec<String>,
    #[serde(default)]
    pub value: f64,
}

impl MacroSlot {
    pub fn placeholder() -> Self {
        MacroSlot {
            name: String::new(),
            targets: Vec::new(),
            value: 0.0,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.name.is_empty() && self.targets.is_empty()
    }
}

/// A scene: one full arrangement of the layer stack plus the modulation
/// routing and macro bank that go with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
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
    pub transition_in: Transition,
    #[serde(default)]
    pub transition_out: Transition,
}

impl Scene {
    pub fn new(id: &str, name: &str) -> Self {
        Scene {
            id: id.to_string(),
            name: name.to_string(),
            layers: Vec::new(),
            modulations: Vec::new(),
            macros: Vec::new(),
            transition_in: Transition::default(),
            transition_out: Transition::default(),
        }
    }

    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn layer_mut(&mut self, id: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }
}

/// The live project: what the renderer draws from, and what the preset
/// engine produces. The engine only ever constructs fresh values of this
/// shape; it never mutates one it was handed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub scenes: Vec<Scene>,
    pub active_scene_id: String,
    #[serde(default = "Project::default_mode_id")]
    pub active_mode_id: String,
    #[serde(default)]
    pub color_chemistry: ColorChemistry,
    #[serde(default)]
    pub role_weights: RoleWeights,
    #[serde(default)]
    pub tempo_sync: TempoSync,
    #[serde(default)]
    pub active_engine_id: String,
}

impl Project {
    fn default_mode_id() -> String {
        DEFAULT_MODE_ID.to_string()
    }

    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    pub fn active_scene(&self) -> Option<&Scene> {
        self.scene(&self.active_scene_id)
    }

    pub fn active_scene_mut(&mut self) -> Option<&mut Scene> {
        let id = self.active_scene_id.clone();
        self.scenes.iter_mut().find(|s| s.id == id)
    }
}
