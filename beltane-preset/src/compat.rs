//! Compatibility gate: can this build of the application use this preset?

use std::cmp::Ordering;

use beltane_types::Preset;

use crate::version::compare_versions;

/// Version of the application this build reports to presets. The gate
/// compares it against any compatibility window a preset declares.
pub const APP_VERSION: &str = "2.4.0";

/// Check a preset's declared compatibility window against this build.
/// Returns the reason on failure. Consulted exactly once, before any
/// migration step runs.
pub fn check_compatibility(preset: &Preset) -> Result<(), String> {
    check_compatibility_against(preset, APP_VERSION)
}

/// Same gate with the application version supplied, so tests can pin it.
pub fn check_compatibility_against(preset: &Preset, app_version: &str) -> Result<(), String> {
    // Pre-V3 presets have no compatibility metadata and always pass.
    if preset.version() < 3 {
        return Ok(());
    }
    let window = match preset.compatibility() {
        Some(w) => w,
        None => return Ok(()),
    };
    if let Some(min) = &window.min_version {
        if compare_versions(app_version, min) == Ordering::Less {
            return Err(format!(
                "preset requires app version {} or newer (this is {})",
                min, app_version
            ));
        }
    }
    if let Some(max) = &window.max_version {
        if compare_versions(app_version, max) == Ordering::Greater {
            return Err(format!(
                "preset requires app version {} or older (this is {})",
                max, app_version
            ));
        }
    }
    Ok(())
}
