#![allow(dead_code)]
//! Shared fixtures for beltane-preset integration tests.

use std::collections::BTreeMap;

use beltane_preset::ParamRegistry;
use beltane_types::{
    EngineDef, LayerTypeDef, MacroTemplate, ParamDef, ParamTarget, ParamValue, PresetType,
    PresetV4, PresetV5, PresetV6, ProjectDoc, SceneDoc,
};

/// A two-type, one-engine registry, small enough to reason about exactly.
pub fn fixture_registry() -> ParamRegistry {
    ParamRegistry::new(fixture_layer_types(), vec![fixture_engine()])
}

/// Same layer table with no engines registered at all.
pub fn engineless_registry() -> ParamRegistry {
    ParamRegistry::new(fixture_layer_types(), Vec::new())
}

fn fixture_layer_types() -> Vec<LayerTypeDef> {
    vec![
        LayerTypeDef::new(
            "glow",
            "Glow",
            "layer-glow",
            vec![
                ParamDef::number("opacity", 0.0, 1.0, 1.0).modulated(),
                ParamDef::number("intensity", 0.0, 2.0, 0.5).modulated(),
                ParamDef::color("color", "#ffffff"),
            ],
        ),
        LayerTypeDef::new(
            "grid",
            "Grid",
            "layer-grid",
            vec![
                ParamDef::number("opacity", 0.0, 1.0, 1.0).modulated(),
                ParamDef::number("size", 1.0, 32.0, 8.0).modulated(),
                ParamDef::toggle("lines", true),
            ],
        ),
    ]
}

fn fixture_engine() -> EngineDef {
    EngineDef::new(
        "test-engine",
        "Test Engine",
        vec![
            MacroTemplate::new("Lift", vec![ParamTarget::new("glow", "intensity")], 0.6),
            MacroTemplate::new("Spread", vec![ParamTarget::new("grid", "size")], 0.4),
        ],
    )
}

/// Param map from literal entries.
pub fn params(entries: &[(&str, ParamValue)]) -> BTreeMap<String, ParamValue> {
    entries.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

/// A bare scene document with no layers, routes, or transitions.
pub fn scene_doc(id: &str, name: &str) -> SceneDoc {
    SceneDoc {
        id: id.to_string(),
        name: name.to_string(),
        layers: Vec::new(),
        modulations: Vec::new(),
        macros: Vec::new(),
        transition_in: None,
        transition_out: None,
    }
}

pub fn scene_preset_v4(name: &str, scenes: Vec<SceneDoc>, active: Option<&str>) -> PresetV4 {
    let mut preset = PresetV4::default();
    preset.metadata.name = name.to_string();
    preset.metadata.preset_type = PresetType::Scene;
    preset.scenes = scenes;
    preset.active_scene_id = active.map(|s| s.to_string());
    preset
}

pub fn performance_preset_v4(name: &str, project: ProjectDoc) -> PresetV4 {
    let mut preset = PresetV4::default();
    preset.metadata.name = name.to_string();
    preset.metadata.preset_type = PresetType::Performance;
    preset.project = Some(project);
    preset
}

pub fn scene_preset_v5(name: &str, scenes: Vec<SceneDoc>, active: Option<&str>) -> PresetV5 {
    let mut preset = PresetV5::default();
    preset.metadata.name = name.to_string();
    preset.metadata.preset_type = PresetType::Scene;
    preset.scenes = scenes;
    preset.active_scene_id = active.map(|s| s.to_string());
    preset
}

pub fn scene_preset_v6(name: &str, scenes: Vec<SceneDoc>, active: Option<&str>) -> PresetV6 {
    let mut preset = PresetV6::default();
    preset.metadata.name = name.to_string();
    preset.metadata.preset_type = PresetType::Scene;
    preset.scenes = scenes;
    preset.active_scene_id = active.map(|s| s.to_string());
    preset
}
