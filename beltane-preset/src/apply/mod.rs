//! Projecting migrated presets onto the runtime project model.
//!
//! One applier per generation that can still reach the host (V3 through V6).
//! Every applier clones the project it is handed and returns an independent
//! value; the passed-in project is never mutated. Appliers do not fail:
//! a preset with nothing usable in it yields a fresh default project and a
//! warning, never an error.

mod baseline;

pub use baseline::default_project;

use beltane_types::{
    EngineDef, Layer, MacroSlot, ModRoute, PresetType, PresetV3, PresetV4, PresetV5, PresetV6,
    Project, ProjectDoc, Scene, SceneDoc, Transition, MACRO_BANK_SIZE,
};

use crate::params::{hoist_opacity, normalize_params};
use crate::registry::ParamRegistry;
use crate::target::legacy_target_string;

/// An applier's output: the next project plus whatever it had to improvise.
#[derive(Debug, Clone)]
pub struct AppliedProject {
    pub project: Project,
    pub warnings: Vec<String>,
}

/// Project a V3 preset onto the baseline's active scene: every layer is
/// disabled first, then preset layers are overlaid by their legacy id (or
/// appended when the baseline has no counterpart). Modulation and macro
/// targets come back out in the dotted legacy form the runtime resolves.
pub fn apply_preset_v3(
    preset: &PresetV3,
    baseline: &Project,
    registry: &ParamRegistry,
) -> AppliedProject {
    log::debug!(target: "preset::apply", "applying v3 preset '{}'", preset.metadata.name);
    let mut warnings = Vec::new();
    let mut project = baseline.clone();

    if project.scenes.is_empty() {
        warnings.push("current project has no scenes; starting from the default project".to_string());
        log::warn!(target: "preset::apply", "project has no scenes, falling back to default");
        project = default_project(registry);
    }
    let index = match project.scenes.iter().position(|s| s.id == project.active_scene_id) {
        Some(i) => i,
        None => {
            warnings.push(format!(
                "active scene '{}' not found; applying to '{}'",
                project.active_scene_id, project.scenes[0].id
            ));
            project.active_scene_id = project.scenes[0].id.clone();
            0
        }
    };
    let scene = &mut project.scenes[index];

    for layer in &mut scene.layers {
        layer.enabled = false;
    }

    for doc in &preset.layers {
        let def = match registry.layer_type(&doc.layer_type) {
            Some(def) => def,
            None => {
                warnings.push(format!("unknown layer type '{}'; layer skipped", doc.layer_type));
                continue;
            }
        };
        let context = format!("layer '{}'", def.id);
        let (opacity, params) =
            hoist_opacity(normalize_params(def, &doc.params, &context, &mut warnings));
        match scene.layer_mut(&def.legacy_id) {
            Some(layer) => {
                layer.enabled = doc.enabled;
                layer.opacity = opacity;
                layer.params = params;
            }
            None => scene.layers.push(Layer {
                id: def.legacy_id.clone(),
                enabled: doc.enabled,
                opacity,
                params,
            }),
        }
    }

    scene.modulations = preset
        .modulations
        .iter()
        .filter_map(|route| match legacy_target_string(&route.target, registry) {
            Ok(target) => Some(ModRoute {
                source: route.source.clone(),
                target,
                amount: route.amount,
            }),
            Err(reason) => {
                warnings.push(format!("modulation target '{}' dropped: {}", route.target, reason));
                None
            }
        })
        .collect();

    scene.macros = preset
        .macros
        .iter()
        .map(|m| {
            let targets = m
                .targets
                .iter()
                .filter_map(|t| match legacy_target_string(t, registry) {
                    Ok(target) => Some(target),
                    Err(reason) => {
                        warnings.push(format!(
                            "macro '{}' target '{}' dropped: {}",
                            m.name, t, reason
                        ));
                        None
                    }
                })
                .collect();
            MacroSlot {
                name: m.name.clone(),
                targets,
                value: m.value,
            }
        })
        .collect();

    AppliedProject { project, warnings }
}

/// Apply a V4 preset. Performance presets swap in their embedded project
/// snapshot wholesale; scene presets replace the scene collection and the
/// active pointer on a clone of the current project.
pub fn apply_preset_v4(
    preset: &PresetV4,
    current: &Project,
    registry: &ParamRegistry,
) -> AppliedProject {
    log::debug!(target: "preset::apply", "applying v4 preset '{}'", preset.metadata.name);
    let mut warnings = Vec::new();
    let fallback = preset.metadata.default_transition.clone().unwrap_or_default();
    let project = match preset.metadata.preset_type {
        PresetType::Performance => {
            snapshot_project(preset.project.as_ref(), &fallback, registry, &mut warnings)
        }
        PresetType::Scene => replace_scenes(
            current,
            &preset.scenes,
            preset.active_scene_id.as_deref(),
            &fallback,
            registry,
            &mut warnings,
        ),
    };
    AppliedProject { project, warnings }
}

/// Apply a V5 preset: V4 behavior plus the performance-scoped metadata
/// fields, which always win over whatever the snapshot or baseline carried.
pub fn apply_preset_v5(
    preset: &PresetV5,
    current: &Project,
    registry: &ParamRegistry,
) -> AppliedProject {
    log::debug!(target: "preset::apply", "applying v5 preset '{}'", preset.metadata.name);
    let mut warnings = Vec::new();
    let fallback = preset.metadata.default_transition.clone().unwrap_or_default();
    let mut project = match preset.metadata.preset_type {
        PresetType::Performance => {
            snapshot_project(preset.project.as_ref(), &fallback, registry, &mut warnings)
        }
        PresetType::Scene => replace_scenes(
            current,
            &preset.scenes,
            preset.active_scene_id.as_deref(),
            &fallback,
            registry,
            &mut warnings,
        ),
    };
    project.active_mode_id = preset.metadata.active_mode_id.clone();
    project.color_chemistry = preset.metadata.color_chemistry.clone();
    project.role_weights = preset.metadata.role_weights.clone();
    project.tempo_sync = preset.metadata.tempo_sync.clone();
    AppliedProject { project, warnings }
}

/// Apply a V6 preset: V5 behavior plus engine scoping. The macro bank of
/// every scene is re-derived from the active engine's template rather than
/// trusted from the document, so macro semantics never leak across engines.
pub fn apply_preset_v6(
    preset: &PresetV6,
    current: &Project,
    registry: &ParamRegistry,
) -> AppliedProject {
    log::debug!(target: "preset::apply", "applying v6 preset '{}'", preset.metadata.name);
    let mut warnings = Vec::new();
    let fallback = preset.metadata.default_transition.clone().unwrap_or_default();
    let mut project = match preset.metadata.preset_type {
        PresetType::Performance => {
            snapshot_project(preset.project.as_ref(), &fallback, registry, &mut warnings)
        }
        PresetType::Scene => replace_scenes(
            current,
            &preset.scenes,
            preset.active_scene_id.as_deref(),
            &fallback,
            registry,
            &mut warnings,
        ),
    };
    project.active_mode_id = preset.metadata.active_mode_id.clone();
    project.color_chemistry = preset.metadata.color_chemistry.clone();
    project.role_weights = preset.metadata.role_weights.clone();
    project.tempo_sync = preset.metadata.tempo_sync.clone();

    match resolve_engine(&preset.metadata.active_engine_id, registry, &mut warnings) {
        Some(engine) => {
            project.active_engine_id = engine.id.clone();
            for scene in &mut project.scenes {
                scene.macros = derive_macro_bank(engine, &scene.macros, registry, &mut warnings);
            }
        }
        None => {
            project.active_engine_id = preset.metadata.active_engine_id.clone();
        }
    }
    AppliedProject { project, warnings }
}

fn scene_from_doc(doc: &SceneDoc, fallback: &Transition) -> Scene {
    Scene {
        id: doc.id.clone(),
        name: doc.name.clone(),
        layers: doc.layers.clone(),
        modulations: doc.modulations.clone(),
        macros: doc.macros.clone(),
        transition_in: doc.transition_in.clone().unwrap_or_else(|| fallback.clone()),
        transition_out: doc.transition_out.clone().unwrap_or_else(|| fallback.clone()),
    }
}

// Callers guarantee `scenes` is non-empty.
fn resolve_active(requested: Option<&str>, scenes: &[Scene], warnings: &mut Vec<String>) -> String {
    match requested {
        Some(id) if scenes.iter().any(|s| s.id == id) => id.to_string(),
        Some(id) => {
            warnings.push(format!("active scene '{}' not found; using '{}'", id, scenes[0].id));
            scenes[0].id.clone()
        }
        None => scenes[0].id.clone(),
    }
}

fn replace_scenes(
    current: &Project,
    docs: &[SceneDoc],
    requested_active: Option<&str>,
    fallback: &Transition,
    registry: &ParamRegistry,
    warnings: &mut Vec<String>,
) -> Project {
    if docs.is_empty() {
        warnings.push("preset has no scenes; using the default project".to_string());
        log::warn!(target: "preset::apply", "scene preset with no scenes, falling back to default");
        return default_project(registry);
    }
    let mut project = current.clone();
    project.scenes = docs.iter().map(|d| scene_from_doc(d, fallback)).collect();
    project.active_scene_id = resolve_active(requested_active, &project.scenes, warnings);
    project
}

fn snapshot_project(
    doc: Option<&ProjectDoc>,
    fallback: &Transition,
    registry: &ParamRegistry,
    warnings: &mut Vec<String>,
) -> Project {
    let doc = match doc {
        Some(doc) if !doc.scenes.is_empty() => doc,
        Some(_) => {
            warnings.push("performance snapshot has no scenes; using the default project".to_string());
            log::warn!(target: "preset::apply", "empty performance snapshot, falling back to default");
            return default_project(registry);
        }
        None => {
            warnings.push("performance preset has no project snapshot; using the default project".to_string());
            log::warn!(target: "preset::apply", "missing performance snapshot, falling back to default");
            return default_project(registry);
        }
    };
    let scenes: Vec<Scene> = doc.scenes.iter().map(|d| scene_from_doc(d, fallback)).collect();
    let active_scene_id = resolve_active(doc.active_scene_id.as_deref(), &scenes, warnings);
    Project {
        scenes,
        active_scene_id,
        active_mode_id: doc
            .active_mode_id
            .clone()
            .unwrap_or_else(|| beltane_types::DEFAULT_MODE_ID.to_string()),
        color_chemistry: doc.color_chemistry.clone().unwrap_or_default(),
        role_weights: doc.role_weights.clone().unwrap_or_default(),
        tempo_sync: doc.tempo_sync.clone().unwrap_or_default(),
        active_engine_id: doc.active_engine_id.clone().unwrap_or_else(|| {
            registry
                .default_engine()
                .map(|e| e.id.clone())
                .unwrap_or_else(|| beltane_types::DEFAULT_ENGINE_ID.to_string())
        }),
    }
}

fn resolve_engine<'a>(
    requested: &str,
    registry: &'a ParamRegistry,
    warnings: &mut Vec<String>,
) -> Option<&'a EngineDef> {
    if let Some(engine) = registry.engine(requested) {
        return Some(engine);
    }
    match registry.default_engine() {
        Some(engine) => {
            warnings.push(format!("unknown engine '{}'; using '{}'", requested, engine.id));
            log::warn!(target: "preset::apply", "unknown engine '{}', falling back to '{}'", requested, engine.id);
            Some(engine)
        }
        None => {
            warnings.push(format!(
                "unknown engine '{}' and no engines registered; macro banks left unchanged",
                requested
            ));
            None
        }
    }
}

/// Rebuild one scene's macro bank from the engine template: template macros
/// in order, each taking its value from a same-named saved macro (clamped to
/// [0, 1]) or the template default, padded to the fixed bank size with
/// placeholders.
fn derive_macro_bank(
    engine: &EngineDef,
    saved: &[MacroSlot],
    registry: &ParamRegistry,
    warnings: &mut Vec<String>,
) -> Vec<MacroSlot> {
    let mut bank: Vec<MacroSlot> = engine
        .macros
        .iter()
        .take(MACRO_BANK_SIZE)
        .map(|template| {
            let targets = template
                .targets
                .iter()
                .filter_map(|t| match legacy_target_string(t, registry) {
                    Ok(target) => Some(target),
                    Err(reason) => {
                        warnings.push(format!(
                            "macro '{}' target '{}' dropped: {}",
                            template.name, t, reason
                        ));
                        None
                    }
                })
                .collect();
            let value = saved
                .iter()
                .find(|m| m.name == template.name)
                .map(|m| m.value.clamp(0.0, 1.0))
                .unwrap_or(template.default_value);
            MacroSlot {
                name: template.name.clone(),
                targets,
                value,
            }
        })
        .collect();
    bank.resize(MACRO_BANK_SIZE, MacroSlot::placeholder());
    bank
}
