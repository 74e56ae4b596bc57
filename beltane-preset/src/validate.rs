//! Advisory validation of presets against the registry.
//!
//! The validator reports; it never repairs. Out-of-range numbers are
//! warnings ("will be clamped") because clamping is the migration chain's
//! job, while references that make a document meaningless (unknown layer
//! types, targets into layers that do not exist) are errors. A failed
//! validation never blocks apply; the host surfaces it in diagnostics.

use beltane_types::{
    LayerTypeDef, ParamKind, ParamTarget, ParamValue, Preset, PresetType, ProjectDoc, SceneDoc,
    LATEST_VERSION,
};

use crate::registry::ParamRegistry;

/// What validation found. `valid == errors.is_empty()`.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

/// Validate a preset of any generation.
pub fn validate_preset(preset: &Preset, registry: &ParamRegistry) -> ValidationResult {
    log::debug!(
        target: "preset::validate",
        "validating '{}' (v{})",
        preset.name(),
        preset.version()
    );
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    match preset {
        // Legacy generations predate validation metadata entirely; migration
        // is the recommended path, not validation.
        Preset::V1(_) | Preset::V2(_) => warnings.push(format!(
            "version {} presets use the legacy layer format; migrate to v{}",
            preset.version(),
            LATEST_VERSION
        )),
        Preset::V3(p) => {
            for layer in &p.layers {
                match registry.layer_type(&layer.layer_type) {
                    Some(def) => {
                        let context = format!("layer '{}'", def.id);
                        for (name, value) in &layer.params {
                            check_param(&context, def, name, value, &mut warnings, &mut errors);
                        }
                    }
                    None => errors.push(format!("unknown layer type '{}'", layer.layer_type)),
                }
            }
            for route in &p.modulations {
                check_structured_target(
                    "modulation",
                    &route.target,
                    registry,
                    &mut warnings,
                    &mut errors,
                );
            }
            for slot in &p.macros {
                let context = format!("macro '{}'", slot.name);
                for target in &slot.targets {
                    check_structured_target(&context, target, registry, &mut warnings, &mut errors);
                }
            }
        }
        Preset::V4(p) => check_document(
            &p.metadata.name,
            p.metadata.preset_type,
            &p.scenes,
            p.active_scene_id.as_deref(),
            p.project.as_ref(),
            registry,
            &mut warnings,
            &mut errors,
        ),
        Preset::V5(p) => check_document(
            &p.metadata.name,
            p.metadata.preset_type,
            &p.scenes,
            p.active_scene_id.as_deref(),
            p.project.as_ref(),
            registry,
            &mut warnings,
            &mut errors,
        ),
        Preset::V6(p) => {
            check_document(
                &p.metadata.name,
                p.metadata.preset_type,
                &p.scenes,
                p.active_scene_id.as_deref(),
                p.project.as_ref(),
                registry,
                &mut warnings,
                &mut errors,
            );
            if registry.engine(&p.metadata.active_engine_id).is_none() {
                warnings.push(format!("unknown engine '{}'", p.metadata.active_engine_id));
            }
        }
    }

    ValidationResult {
        valid: errors.is_empty(),
        warnings,
        errors,
    }
}

/// Structural checks shared by the scene-bearing generations (V4+), then
/// content checks over every scene the document carries.
fn check_document(
    name: &str,
    preset_type: PresetType,
    scenes: &[SceneDoc],
    active_scene_id: Option<&str>,
    project: Option<&ProjectDoc>,
    registry: &ParamRegistry,
    warnings: &mut Vec<String>,
    errors: &mut Vec<String>,
) {
    if name.trim().is_empty() {
        errors.push("preset name is empty".to_string());
    }
    match preset_type {
        PresetType::Scene => {
            if scenes.is_empty() {
                errors.push("scene preset has no scenes".to_string());
            } else if let Some(id) = active_scene_id {
                if !scenes.iter().any(|s| s.id == id) {
                    errors.push(format!("active scene '{}' not found", id));
                }
            }
        }
        PresetType::Performance => match project {
            None => errors.push("performance preset has no project snapshot".to_string()),
            Some(doc) => {
                if doc.scenes.is_empty() {
                    errors.push("performance snapshot has no scenes".to_string());
                } else if let Some(id) = doc.active_scene_id.as_deref() {
                    if !doc.scenes.iter().any(|s| s.id == id) {
                        errors.push(format!("active scene '{}' not found in the snapshot", id));
                    }
                }
            }
        },
    }
    for scene in scenes {
        check_scene(scene, registry, warnings, errors);
    }
    if let Some(doc) = project {
        for scene in &doc.scenes {
            check_scene(scene, registry, warnings, errors);
        }
    }
}

fn check_scene(
    scene: &SceneDoc,
    registry: &ParamRegistry,
    warnings: &mut Vec<String>,
    errors: &mut Vec<String>,
) {
    for layer in &scene.layers {
        let def = match registry.layer_type_for_legacy(&layer.id) {
            Some(def) => def,
            None => {
                errors.push(format!("scene '{}': unknown layer id '{}'", scene.id, layer.id));
                continue;
            }
        };
        if !(0.0..=1.0).contains(&layer.opacity) {
            warnings.push(format!(
                "scene '{}' layer '{}': opacity {} outside [0, 1]; will be clamped",
                scene.id, def.id, layer.opacity
            ));
        }
        let context = format!("scene '{}' layer '{}'", scene.id, def.id);
        for (name, value) in &layer.params {
            check_param(&context, def, name, value, warnings, errors);
        }
    }
    let context = format!("scene '{}'", scene.id);
    for route in &scene.modulations {
        check_dotted_target(&context, &route.target, registry, warnings, errors);
    }
    for slot in &scene.macros {
        if slot.is_placeholder() {
            continue;
        }
        let context = format!("scene '{}' macro '{}'", scene.id, slot.name);
        for target in &slot.targets {
            check_dotted_target(&context, target, registry, warnings, errors);
        }
    }
}

/// One parameter against its declaration. Unknown names and recoverable
/// values are warnings; a value of the wrong runtime kind is an error.
fn check_param(
    context: &str,
    def: &LayerTypeDef,
    name: &str,
    value: &ParamValue,
    warnings: &mut Vec<String>,
    errors: &mut Vec<String>,
) {
    let param = match def.param(name) {
        Some(p) => p,
        None => {
            warnings.push(format!("{}: unknown parameter '{}'", context, name));
            return;
        }
    };
    let wrong_kind = |errors: &mut Vec<String>| {
        errors.push(format!(
            "{}: {} expects a {}, got {}",
            context,
            name,
            param.kind.name(),
            value.kind_name()
        ));
    };
    match &param.kind {
        ParamKind::Number { min, max } => match value.as_number() {
            Some(v) if v < *min || v > *max => warnings.push(format!(
                "{}: {} {} outside [{}, {}]; will be clamped",
                context, name, v, min, max
            )),
            Some(_) => {}
            None => wrong_kind(errors),
        },
        ParamKind::Toggle => {
            if value.as_toggle().is_none() {
                wrong_kind(errors);
            }
        }
        ParamKind::Text => {
            if value.as_text().is_none() {
                wrong_kind(errors);
            }
        }
        ParamKind::Choice { options } => match value.as_text() {
            Some(v) if !options.iter().any(|o| o == v) => {
                warnings.push(format!("{}: '{}' is not a {} option", context, v, name));
            }
            Some(_) => {}
            None => wrong_kind(errors),
        },
        ParamKind::Color => match value.as_text() {
            Some(v) if !is_color_text(v) => {
                warnings.push(format!("{}: {} '{}' is not a hex color", context, name, v));
            }
            Some(_) => {}
            None => wrong_kind(errors),
        },
    }
}

fn check_structured_target(
    context: &str,
    target: &ParamTarget,
    registry: &ParamRegistry,
    warnings: &mut Vec<String>,
    errors: &mut Vec<String>,
) {
    match registry.layer_type(&target.layer_type) {
        Some(def) => check_target_param(context, &target.to_string(), def, &target.param, warnings),
        None => errors.push(format!(
            "{}: target '{}' references unknown layer type '{}'",
            context, target, target.layer_type
        )),
    }
}

fn check_dotted_target(
    context: &str,
    raw: &str,
    registry: &ParamRegistry,
    warnings: &mut Vec<String>,
    errors: &mut Vec<String>,
) {
    let (layer_part, param) = match raw.split_once('.') {
        Some(parts) => parts,
        None => {
            errors.push(format!(
                "{}: target '{}' is not in 'layer.param' form",
                context, raw
            ));
            return;
        }
    };
    match registry
        .layer_type_for_legacy(layer_part)
        .or_else(|| registry.layer_type(layer_part))
    {
        Some(def) => check_target_param(context, raw, def, param, warnings),
        None => errors.push(format!(
            "{}: target '{}' references unknown layer type '{}'",
            context, raw, layer_part
        )),
    }
}

// Unknown target layer type is the caller's error; within a known type an
// unknown or non-modulatable param stays advisory.
fn check_target_param(
    context: &str,
    display: &str,
    def: &LayerTypeDef,
    param: &str,
    warnings: &mut Vec<String>,
) {
    match def.param(param) {
        None => warnings.push(format!(
            "{}: target '{}' references unknown parameter '{}'",
            context, display, param
        )),
        Some(p) if !p.modulatable => warnings.push(format!(
            "{}: target '{}' parameter is not modulatable",
            context, display
        )),
        Some(_) => {}
    }
}

// "#rgb", "#rgba", "#rrggbb", "#rrggbbaa"
fn is_color_text(v: &str) -> bool {
    match v.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
