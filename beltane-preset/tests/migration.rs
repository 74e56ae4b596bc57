mod common;

use beltane_preset::{apply_preset_v6, default_project, migrate_preset, migrate_preset_json, ParamRegistry};
use beltane_types::{ParamValue, Preset, PresetType, LATEST_VERSION};

#[test]
fn test_v1_document_migrates_to_latest() {
    let raw = r#"{
        "version": 1,
        "metadata": {"name": "First Light", "author": "kb", "createdAt": 1000},
        "layers": [
            {"id": "layer-plasma", "params": {"opacity": 0.8, "speed": 1.5}},
            {"id": "layer-bars", "enabled": false, "params": {"gain": 2.0}}
        ],
        "modulations": [
            {"source": "bass", "target": "layer-plasma.speed", "amount": 0.5}
        ],
        "macros": [
            {"name": "Sweep", "targets": ["layer-bars.gain"], "value": 0.3}
        ]
    }"#;

    let result = migrate_preset_json(raw, &ParamRegistry::builtin());
    assert!(result.success, "{:?}", result.errors);
    assert!(result.errors.is_empty());

    let preset = match result.preset {
        Some(Preset::V6(p)) => p,
        other => panic!("Expected V6, got {:?}", other),
    };
    assert_eq!(preset.metadata.name, "First Light");
    assert_eq!(preset.metadata.author.as_deref(), Some("kb"));
    assert_eq!(preset.metadata.created_at, Some(1000));
    // The V1→V2 step stamps a fresh updatedAt.
    assert!(preset.metadata.updated_at.is_some());
    assert_eq!(preset.metadata.preset_type, PresetType::Scene);
    assert_eq!(preset.metadata.active_mode_id, "classic");
    assert_eq!(preset.metadata.active_engine_id, "aurora");

    // One scene lifted from the applied default project, with the full
    // layer table and only the preset's enabled layer turned on.
    assert_eq!(preset.scenes.len(), 1);
    let scene = &preset.scenes[0];
    assert_eq!(preset.active_scene_id.as_deref(), Some(scene.id.as_str()));

    let plasma = scene.layers.iter().find(|l| l.id == "layer-plasma").unwrap();
    assert!(plasma.enabled);
    assert_eq!(plasma.opacity, 0.8);
    assert_eq!(plasma.params.get("speed"), Some(&ParamValue::Number(1.5)));

    let bars = scene.layers.iter().find(|l| l.id == "layer-bars").unwrap();
    assert!(!bars.enabled);
    assert_eq!(bars.params.get("gain"), Some(&ParamValue::Number(2.0)));

    assert_eq!(scene.modulations.len(), 1);
    assert_eq!(scene.modulations[0].target, "layer-plasma.speed");
    assert_eq!(scene.macros.len(), 1);
    assert_eq!(scene.macros[0].targets, vec!["layer-bars.gain".to_string()]);
}

#[test]
fn test_migration_does_not_mutate_the_input() {
    let raw = r#"{
        "version": 2,
        "metadata": {"name": "Frozen"},
        "layers": [{"id": "layer-plasma", "params": {"speed": 9.0}}]
    }"#;
    let preset = beltane_preset::decode_preset(raw).unwrap();
    let snapshot = preset.clone();

    let result = migrate_preset(&preset, &ParamRegistry::builtin());
    assert!(result.success);
    assert_eq!(preset, snapshot);
    assert_eq!(result.preset.unwrap().version(), LATEST_VERSION);
}

#[test]
fn test_out_of_range_params_clamp_with_a_warning() {
    let raw = r#"{
        "version": 2,
        "metadata": {"name": "Hot"},
        "layers": [{"id": "layer-plasma", "params": {"speed": 5.0}}]
    }"#;
    let result = migrate_preset_json(raw, &ParamRegistry::builtin());
    assert!(result.success);
    assert!(
        result.warnings.iter().any(|w| w.contains("speed") && w.contains("clamped")),
        "{:?}",
        result.warnings
    );

    let preset = match result.preset {
        Some(Preset::V6(p)) => p,
        other => panic!("Expected V6, got {:?}", other),
    };
    let plasma = preset.scenes[0].layers.iter().find(|l| l.id == "layer-plasma").unwrap();
    // Clamped values land exactly on the bound.
    assert_eq!(plasma.params.get("speed"), Some(&ParamValue::Number(3.0)));
}

#[test]
fn test_overrange_v3_speed_lands_clamped_in_the_applied_project() {
    let raw = r#"{
        "version": 3,
        "metadata": {"name": "Clamp Me"},
        "layers": [{"type": "plasma", "params": {"opacity": 0.9, "speed": 5.0}}],
        "modulations": [],
        "macros": []
    }"#;
    let registry = ParamRegistry::builtin();
    let result = migrate_preset_json(raw, &registry);
    assert!(result.success);
    assert!(result.warnings.iter().any(|w| w.contains("clamped")), "{:?}", result.warnings);

    let preset = match result.preset {
        Some(Preset::V6(p)) => p,
        other => panic!("Expected V6, got {:?}", other),
    };
    let applied = apply_preset_v6(&preset, &default_project(&registry), &registry);
    let scene = applied.project.active_scene().unwrap();
    let plasma = scene.layer("layer-plasma").unwrap();
    assert_eq!(plasma.opacity, 0.9);
    assert_eq!(plasma.params.get("speed"), Some(&ParamValue::Number(3.0)));
}

#[test]
fn test_unknown_layers_and_targets_drop_with_warnings() {
    let raw = r#"{
        "version": 2,
        "metadata": {"name": "Mixed Bag"},
        "layers": [
            {"id": "layer-plasma"},
            {"id": "layer-hologram", "params": {"shine": 1.0}}
        ],
        "modulations": [
            {"source": "bass", "target": "layer-plasma.speed"},
            {"source": "mids", "target": "layer-hologram.shine"},
            {"source": "highs", "target": "not-a-target"}
        ],
        "macros": [
            {"name": "Punch", "targets": ["layer-plasma.voltage"], "value": 0.5}
        ]
    }"#;
    let result = migrate_preset_json(raw, &ParamRegistry::builtin());
    // Drops are recoverable: the migration still succeeds.
    assert!(result.success, "{:?}", result.errors);
    assert!(result.warnings.iter().any(|w| w.contains("layer-hologram")));
    assert!(result.warnings.iter().any(|w| w.contains("not-a-target")));
    assert!(result.warnings.iter().any(|w| w.contains("voltage")));

    let preset = match result.preset {
        Some(Preset::V6(p)) => p,
        other => panic!("Expected V6, got {:?}", other),
    };
    let scene = &preset.scenes[0];
    assert!(scene.layers.iter().all(|l| l.id != "layer-hologram"));
    assert_eq!(scene.modulations.len(), 1);
    assert_eq!(scene.modulations[0].target, "layer-plasma.speed");
    // The macro keeps its slot even with every target dropped.
    assert_eq!(scene.macros.len(), 1);
    assert!(scene.macros[0].targets.is_empty());
}

#[test]
fn test_compatibility_gate_aborts_with_zero_steps() {
    let raw = r#"{
        "version": 3,
        "metadata": {
            "name": "From The Future",
            "compatibility": {"minVersion": "99.0.0"}
        },
        "layers": []
    }"#;
    let result = migrate_preset_json(raw, &ParamRegistry::builtin());
    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("99.0.0"), "{}", result.errors[0]);
    assert!(result.warnings.is_empty());

    // No step ran: the preset is still at its input generation.
    match result.preset {
        Some(Preset::V3(p)) => assert_eq!(p.metadata.name, "From The Future"),
        other => panic!("Expected V3, got {:?}", other),
    }
}

#[test]
fn test_max_version_gate_blocks_newer_app() {
    let raw = r#"{
        "version": 4,
        "metadata": {
            "name": "Museum Piece",
            "compatibility": {"maxVersion": "1.0.0"}
        },
        "scenes": [{"id": "a"}]
    }"#;
    let result = migrate_preset_json(raw, &ParamRegistry::builtin());
    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("or older"), "{}", result.errors[0]);
}

#[test]
fn test_latest_preset_is_idempotent_through_the_json_entry_point() {
    let raw = r#"{
        "version": 6,
        "metadata": {"name": "Already Here"},
        "scenes": [{"id": "a", "name": "A"}],
        "activeSceneId": "a"
    }"#;
    let registry = ParamRegistry::builtin();
    let first = migrate_preset_json(raw, &registry);
    assert!(first.success);
    assert!(first.warnings.is_empty());

    let second = migrate_preset(first.preset.as_ref().unwrap(), &registry);
    assert!(second.success);
    assert_eq!(second.preset, first.preset);
}

#[test]
fn test_undecodable_document_becomes_a_single_error() {
    let registry = ParamRegistry::builtin();

    let result = migrate_preset_json("not json at all", &registry);
    assert!(!result.success);
    assert!(result.preset.is_none());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].starts_with("Migration failed:"), "{}", result.errors[0]);

    let result = migrate_preset_json(r#"{"version": 99}"#, &registry);
    assert!(!result.success);
    assert!(result.errors[0].contains("unsupported preset version 99"), "{}", result.errors[0]);
}

#[test]
fn test_v5_preset_only_gains_the_engine_field() {
    let raw = r#"{
        "version": 5,
        "metadata": {
            "name": "Nearly There",
            "presetType": "scene",
            "activeModeId": "club",
            "colorChemistry": {"base": "mono", "accent": "flare"},
            "roleWeights": {"bass": 2.0, "mids": 1.0, "highs": 0.5},
            "tempoSync": {"enabled": true, "division": "1/8"}
        },
        "scenes": [{"id": "a", "name": "A"}],
        "activeSceneId": "a"
    }"#;
    let result = migrate_preset_json(raw, &ParamRegistry::builtin());
    assert!(result.success);
    assert!(result.warnings.is_empty());

    let preset = match result.preset {
        Some(Preset::V6(p)) => p,
        other => panic!("Expected V6, got {:?}", other),
    };
    assert_eq!(preset.metadata.active_engine_id, "aurora");
    // Everything the V5 document already carried is untouched.
    assert_eq!(preset.metadata.active_mode_id, "club");
    assert_eq!(preset.metadata.color_chemistry.base, "mono");
    assert_eq!(preset.metadata.role_weights.bass, 2.0);
    assert!(preset.metadata.tempo_sync.enabled);
    assert_eq!(preset.scenes.len(), 1);
}

#[test]
fn test_fixture_registry_drives_the_same_pipeline() {
    let registry = common::fixture_registry();
    let raw = r#"{
        "version": 2,
        "metadata": {"name": "Glow Show"},
        "layers": [{"id": "layer-glow", "params": {"intensity": 5.0}}],
        "modulations": [{"source": "bass", "target": "layer-grid.size"}]
    }"#;
    let result = migrate_preset_json(raw, &registry);
    assert!(result.success);
    assert!(result.warnings.iter().any(|w| w.contains("intensity")), "{:?}", result.warnings);

    let preset = match result.preset {
        Some(Preset::V6(p)) => p,
        other => panic!("Expected V6, got {:?}", other),
    };
    let scene = &preset.scenes[0];
    assert_eq!(scene.layers.len(), 2);
    let glow = scene.layers.iter().find(|l| l.id == "layer-glow").unwrap();
    assert_eq!(glow.params.get("intensity"), Some(&ParamValue::Number(2.0)));
    assert_eq!(scene.modulations[0].target, "layer-grid.size");
}
