//! Steps out of the legacy generations: the V1→V2 metadata bump and the
//! V2→V3 structural rewrite.

use std::time::{SystemTime, UNIX_EPOCH};

use beltane_types::{LayerDoc, MacroDoc, MetaV2, MetaV3, ModRouteDoc, PresetV1, PresetV2, PresetV3};

use crate::params::normalize_params;
use crate::registry::ParamRegistry;
use crate::target::parse_legacy_target;

use super::MigrationLog;

fn epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// V1→V2: no structural change; stamps a fresh `updatedAt`.
pub(super) fn v1_to_v2(preset: PresetV1, _log: &mut MigrationLog) -> PresetV2 {
    PresetV2 {
        metadata: MetaV2 {
            name: preset.metadata.name,
            author: preset.metadata.author,
            description: preset.metadata.description,
            created_at: preset.metadata.created_at,
            updated_at: Some(epoch_ms()),
        },
        layers: preset.layers,
        modulations: preset.modulations,
        macros: preset.macros,
    }
}

/// V2→V3: legacy id-keyed layers become canonically typed `{type, params}`
/// records carrying every registry-declared parameter (supplied values
/// clamped with a warning, missing ones defaulted silently), and dotted
/// modulation/macro targets become structured targets. Layers and targets
/// the registry does not know are dropped with a warning, never an error.
pub(super) fn v2_to_v3(
    preset: PresetV2,
    registry: &ParamRegistry,
    log: &mut MigrationLog,
) -> PresetV3 {
    let mut layers = Vec::new();
    for layer in &preset.layers {
        let def = match registry.layer_type_for_legacy(&layer.id) {
            Some(def) => def,
            None => {
                log.warnings
                    .push(format!("unknown layer id '{}'; layer dropped", layer.id));
                continue;
            }
        };
        let context = format!("layer '{}'", def.id);
        layers.push(LayerDoc {
            layer_type: def.id.clone(),
            enabled: layer.enabled,
            params: normalize_params(def, &layer.params, &context, &mut log.warnings),
        });
    }

    let mut modulations = Vec::new();
    for route in &preset.modulations {
        match parse_legacy_target(&route.target, registry) {
            Ok(target) => modulations.push(ModRouteDoc {
                source: route.source.clone(),
                target,
                amount: route.amount,
            }),
            Err(reason) => log
                .warnings
                .push(format!("modulation target '{}' dropped: {}", route.target, reason)),
        }
    }

    // Macros keep their slot even when targets fall away.
    let mut macros = Vec::new();
    for slot in &preset.macros {
        let mut targets = Vec::new();
        for raw in &slot.targets {
            match parse_legacy_target(raw, registry) {
                Ok(target) => targets.push(target),
                Err(reason) => log
                    .warnings
                    .push(format!("macro '{}' target '{}' dropped: {}", slot.name, raw, reason)),
            }
        }
        macros.push(MacroDoc {
            name: slot.name.clone(),
            targets,
            value: slot.value,
        });
    }

    PresetV3 {
        metadata: MetaV3 {
            name: preset.metadata.name,
            author: preset.metadata.author,
            description: preset.metadata.description,
            created_at: preset.metadata.created_at,
            updated_at: preset.metadata.updated_at,
            compatibility: None,
        },
        layers,
        modulations,
        macros,
    }
}
