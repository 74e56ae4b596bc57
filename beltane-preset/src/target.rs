//! Dotted parameter targets.
//!
//! Pre-V3 documents and the runtime both address parameters as
//! `"<legacy-layer-id>.<param>"` strings ("layer-bars.gain"); V3 stores the
//! structured form instead. The error strings returned here are meant to be
//! embedded in "target dropped" warnings, so they name only the reason.

use beltane_types::ParamTarget;

use crate::registry::ParamRegistry;

/// Parse a dotted target into the structured form, resolving the layer part
/// through the legacy-id table first and the canonical table second.
pub(crate) fn parse_legacy_target(
    raw: &str,
    registry: &ParamRegistry,
) -> Result<ParamTarget, String> {
    let (layer_part, param) = raw
        .split_once('.')
        .ok_or_else(|| format!("'{}' is not in 'layer.param' form", raw))?;
    let def = registry
        .layer_type_for_legacy(layer_part)
        .or_else(|| registry.layer_type(layer_part))
        .ok_or_else(|| format!("unknown layer type '{}'", layer_part))?;
    if def.param(param).is_none() {
        return Err(format!("'{}' has no parameter '{}'", def.id, param));
    }
    Ok(ParamTarget::new(&def.id, param))
}

/// Render a structured target back into the runtime's dotted legacy form.
pub(crate) fn legacy_target_string(
    target: &ParamTarget,
    registry: &ParamRegistry,
) -> Result<String, String> {
    let def = registry
        .layer_type(&target.layer_type)
        .ok_or_else(|| format!("unknown layer type '{}'", target.layer_type))?;
    if def.param(&target.param).is_none() {
        return Err(format!("'{}' has no parameter '{}'", def.id, target.param));
    }
    Ok(format!("{}.{}", def.legacy_id, target.param))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_legacy_and_canonical_layer_ids() {
        let reg = ParamRegistry::builtin();
        assert_eq!(
            parse_legacy_target("layer-bars.gain", &reg),
            Ok(ParamTarget::new("spectrum", "gain"))
        );
        assert_eq!(
            parse_legacy_target("spectrum.gain", &reg),
            Ok(ParamTarget::new("spectrum", "gain"))
        );
    }

    #[test]
    fn rejects_malformed_and_unknown_targets() {
        let reg = ParamRegistry::builtin();
        assert!(parse_legacy_target("gain", &reg)
            .unwrap_err()
            .contains("'layer.param' form"));
        assert!(parse_legacy_target("layer-hologram.gain", &reg)
            .unwrap_err()
            .contains("unknown layer type"));
        assert!(parse_legacy_target("layer-bars.voltage", &reg)
            .unwrap_err()
            .contains("no parameter 'voltage'"));
    }

    #[test]
    fn stringifies_back_to_the_legacy_form() {
        let reg = ParamRegistry::builtin();
        let target = ParamTarget::new("spectrum", "gain");
        assert_eq!(
            legacy_target_string(&target, &reg),
            Ok("layer-bars.gain".to_string())
        );
        assert!(legacy_target_string(&ParamTarget::new("hologram", "x"), &reg).is_err());
        assert!(legacy_target_string(&ParamTarget::new("spectrum", "voltage"), &reg).is_err());
    }
}
