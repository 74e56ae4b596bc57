//! The migration chain: compatibility gate, then one step per version
//! boundary until the preset reaches the latest generation.
//!
//! A V2 preset runs V2→V3, V3→V4, V4→V5, V5→V6: four steps, never a
//! shortcut. Steps append to a shared accumulator; warnings are non-fatal,
//! the first error stops the ladder. The gate runs exactly once, before any
//! step.

mod legacy;
mod modern;

use beltane_types::{Preset, LATEST_VERSION};

use crate::compat::check_compatibility;
use crate::document::decode_preset;
use crate::registry::ParamRegistry;

/// Outcome of a migration run. `success == errors.is_empty()`; `preset` is
/// the best-effort result (the furthest generation reached) and is `None`
/// only when the input could not be decoded at all. Callers must not apply
/// a failed result.
#[derive(Debug, Clone)]
pub struct MigrationResult {
    pub success: bool,
    pub preset: Option<Preset>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

pub(crate) struct MigrationLog {
    pub(crate) warnings: Vec<String>,
    pub(crate) errors: Vec<String>,
}

impl MigrationLog {
    pub(crate) fn new() -> Self {
        MigrationLog {
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }
}

/// Migrate a preset to the latest generation. Already-latest input passes
/// through unchanged (after the gate).
pub fn migrate_preset(preset: &Preset, registry: &ParamRegistry) -> MigrationResult {
    log::debug!(
        target: "preset::migrate",
        "migrating '{}' from v{}",
        preset.name(),
        preset.version()
    );
    let mut log = MigrationLog::new();

    if let Err(reason) = check_compatibility(preset) {
        log::warn!(
            target: "preset::migrate",
            "compatibility gate rejected '{}': {}",
            preset.name(),
            reason
        );
        log.errors.push(reason);
        return finish(preset.clone(), log);
    }

    let mut preset = preset.clone();
    while preset.version() < LATEST_VERSION && log.errors.is_empty() {
        preset = migrate_one_version(preset, registry, &mut log);
    }
    log::debug!(
        target: "preset::migrate",
        "migration finished at v{} ({} warnings, {} errors)",
        preset.version(),
        log.warnings.len(),
        log.errors.len()
    );
    finish(preset, log)
}

/// Decode and migrate a raw document in one call. A document that cannot be
/// decoded yields a failed result with a single error, never a panic.
pub fn migrate_preset_json(raw: &str, registry: &ParamRegistry) -> MigrationResult {
    match decode_preset(raw) {
        Ok(preset) => migrate_preset(&preset, registry),
        Err(reason) => {
            log::warn!(target: "preset::migrate", "undecodable preset document: {}", reason);
            MigrationResult {
                success: false,
                preset: None,
                warnings: Vec::new(),
                errors: vec![format!("Migration failed: {}", reason)],
            }
        }
    }
}

/// Advance a preset exactly one generation; already-latest input is
/// returned unchanged.
pub(crate) fn migrate_one_version(
    preset: Preset,
    registry: &ParamRegistry,
    log: &mut MigrationLog,
) -> Preset {
    match preset {
        Preset::V1(p) => Preset::V2(legacy::v1_to_v2(p, log)),
        Preset::V2(p) => Preset::V3(legacy::v2_to_v3(p, registry, log)),
        Preset::V3(p) => Preset::V4(modern::v3_to_v4(p, registry, log)),
        Preset::V4(p) => Preset::V5(modern::v4_to_v5(p, log)),
        Preset::V5(p) => Preset::V6(modern::v5_to_v6(p, log)),
        Preset::V6(p) => Preset::V6(p),
    }
}

fn finish(preset: Preset, log: MigrationLog) -> MigrationResult {
    MigrationResult {
        success: log.errors.is_empty(),
        preset: Some(preset),
        warnings: log.warnings,
        errors: log.errors,
    }
}
