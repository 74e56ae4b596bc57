//! Steps through the modern generations: scenes (V4), performance scoping
//! (V5), engine scoping (V6).

use beltane_types::{
    ColorChemistry, MetaV4, MetaV5, MetaV6, PresetType, PresetV3, PresetV4, PresetV5, PresetV6,
    RoleWeights, SceneDoc, TempoSync, Transition, DEFAULT_ENGINE_ID, DEFAULT_MODE_ID,
};

use crate::apply::{apply_preset_v3, default_project};
use crate::registry::ParamRegistry;

use super::MigrationLog;

/// V3→V4: re-apply the preset onto a fresh default project with the same
/// applier live loading uses, then lift the applied active scene into the
/// scene document V4 stores. Applier warnings flow into the migration log.
pub(super) fn v3_to_v4(
    preset: PresetV3,
    registry: &ParamRegistry,
    log: &mut MigrationLog,
) -> PresetV4 {
    let applied = apply_preset_v3(&preset, &default_project(registry), registry);
    log.warnings.extend(applied.warnings);

    let mut scenes = Vec::new();
    let mut active_scene_id = None;
    if let Some(scene) = applied.project.active_scene() {
        scenes.push(SceneDoc {
            id: scene.id.clone(),
            name: scene.name.clone(),
            layers: scene.layers.clone(),
            modulations: scene.modulations.clone(),
            macros: scene.macros.clone(),
            transition_in: Some(Transition::default()),
            transition_out: Some(Transition::default()),
        });
        active_scene_id = Some(scene.id.clone());
    }

    PresetV4 {
        metadata: MetaV4 {
            name: preset.metadata.name,
            author: preset.metadata.author,
            description: preset.metadata.description,
            created_at: preset.metadata.created_at,
            updated_at: preset.metadata.updated_at,
            compatibility: preset.metadata.compatibility,
            preset_type: PresetType::Scene,
            default_transition: None,
        },
        scenes,
        active_scene_id,
        project: None,
    }
}

/// V4→V5: purely additive; metadata gains the performance-scoped fields at
/// their defaults. Scene and layer content is untouched.
pub(super) fn v4_to_v5(preset: PresetV4, _log: &mut MigrationLog) -> PresetV5 {
    PresetV5 {
        metadata: MetaV5 {
            name: preset.metadata.name,
            author: preset.metadata.author,
            description: preset.metadata.description,
            created_at: preset.metadata.created_at,
            updated_at: preset.metadata.updated_at,
            compatibility: preset.metadata.compatibility,
            preset_type: preset.metadata.preset_type,
            default_transition: preset.metadata.default_transition,
            active_mode_id: DEFAULT_MODE_ID.to_string(),
            color_chemistry: ColorChemistry::default(),
            role_weights: RoleWeights::default(),
            tempo_sync: TempoSync::default(),
        },
        scenes: preset.scenes,
        active_scene_id: preset.active_scene_id,
        project: preset.project,
    }
}

/// V5→V6: purely additive; metadata gains the default engine id.
pub(super) fn v5_to_v6(preset: PresetV5, _log: &mut MigrationLog) -> PresetV6 {
    PresetV6 {
        metadata: MetaV6 {
            name: preset.metadata.name,
            author: preset.metadata.author,
            description: preset.metadata.description,
            created_at: preset.metadata.created_at,
            updated_at: preset.metadata.updated_at,
            compatibility: preset.metadata.compatibility,
            preset_type: preset.metadata.preset_type,
            default_transition: preset.metadata.default_transition,
            active_mode_id: preset.metadata.active_mode_id,
            color_chemistry: preset.metadata.color_chemistry,
            role_weights: preset.metadata.role_weights,
            tempo_sync: preset.metadata.tempo_sync,
            active_engine_id: DEFAULT_ENGINE_ID.to_string(),
        },
        scenes: preset.scenes,
        active_scene_id: preset.active_scene_id,
        project: preset.project,
    }
}
