//! The default project: migration scaffolding and the appliers' universal
//! fallback.

use beltane_types::{
    ColorChemistry, Layer, Project, RoleWeights, Scene, TempoSync, DEFAULT_ENGINE_ID,
    DEFAULT_MODE_ID,
};

use crate::params::hoist_opacity;
use crate::registry::ParamRegistry;

pub(crate) const DEFAULT_SCENE_ID: &str = "scene-1";

/// A fresh project: one scene holding one disabled layer per registry type,
/// every parameter at its declared default, performance fields at theirs.
pub fn default_project(registry: &ParamRegistry) -> Project {
    let mut scene = Scene::new(DEFAULT_SCENE_ID, "Main");
    for def in registry.layer_types() {
        let (opacity, params) = hoist_opacity(def.default_params());
        scene.layers.push(Layer {
            id: def.legacy_id.clone(),
            enabled: false,
            opacity,
            params,
        });
    }
    Project {
        scenes: vec![scene],
        active_scene_id: DEFAULT_SCENE_ID.to_string(),
        active_mode_id: DEFAULT_MODE_ID.to_string(),
        color_chemistry: ColorChemistry::default(),
        role_weights: RoleWeights::default(),
        tempo_sync: TempoSync::default(),
        active_engine_id: registry
            .default_engine()
            .map(|e| e.id.clone())
            .unwrap_or_else(|| DEFAULT_ENGINE_ID.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beltane_types::ParamValue;

    #[test]
    fn one_scene_with_every_layer_type_disabled() {
        let reg = ParamRegistry::builtin();
        let project = default_project(&reg);

        assert_eq!(project.scenes.len(), 1);
        assert_eq!(project.active_scene_id, DEFAULT_SCENE_ID);

        let scene = project.active_scene().unwrap();
        assert_eq!(scene.layers.len(), reg.layer_types().count());
        for layer in &scene.layers {
            assert!(!layer.enabled, "{} starts enabled", layer.id);
        }
        assert!(scene.layer("layer-plasma").is_some());
        assert!(scene.modulations.is_empty());
        assert!(scene.macros.is_empty());
    }

    #[test]
    fn layer_defaults_hoist_opacity() {
        let reg = ParamRegistry::builtin();
        let project = default_project(&reg);
        let plasma = project.active_scene().unwrap().layer("layer-plasma").unwrap();

        assert_eq!(plasma.opacity, 1.0);
        assert!(plasma.params.get("opacity").is_none());
        assert_eq!(plasma.params.get("speed"), Some(&ParamValue::Number(1.0)));
    }

    #[test]
    fn performance_fields_start_at_their_defaults() {
        let project = default_project(&ParamRegistry::builtin());
        assert_eq!(project.active_mode_id, DEFAULT_MODE_ID);
        assert_eq!(project.active_engine_id, "aurora");
        assert_eq!(project.color_chemistry.base, "spectral");
        assert!(!project.tempo_sync.enabled);
    }
}
