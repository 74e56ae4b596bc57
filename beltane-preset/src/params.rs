//! Parameter coercion against registry definitions.
//!
//! Migration and apply both funnel layer parameters through these helpers:
//! supplied values are coerced to their declared kind and bounds, and
//! anything missing is backfilled from the declared default. The validator
//! deliberately does not use them; it reports what these helpers would
//! change without changing anything.

use std::collections::BTreeMap;

use beltane_types::{LayerTypeDef, ParamDef, ParamKind, ParamValue, OPACITY_PARAM};

/// Build the full parameter map for a layer of the given type. Every declared
/// parameter appears in the result: supplied values are coerced and clamped
/// (with a warning), missing ones take the declared default (silently).
/// Parameters the type does not declare are dropped.
pub(crate) fn normalize_params(
    def: &LayerTypeDef,
    supplied: &BTreeMap<String, ParamValue>,
    context: &str,
    warnings: &mut Vec<String>,
) -> BTreeMap<String, ParamValue> {
    let mut params = BTreeMap::new();
    for param in &def.params {
        let value = match supplied.get(&param.name) {
            Some(value) => coerce_value(param, value, context, warnings),
            None => param.default.clone(),
        };
        params.insert(param.name.clone(), value);
    }
    params
}

/// Coerce one supplied value to its declared kind. Out-of-range numbers land
/// exactly on the violated bound; values of the wrong kind fall back to the
/// declared default. Both cases warn.
pub(crate) fn coerce_value(
    def: &ParamDef,
    supplied: &ParamValue,
    context: &str,
    warnings: &mut Vec<String>,
) -> ParamValue {
    match &def.kind {
        ParamKind::Number { min, max } => match supplied.as_number() {
            Some(v) if v < *min => {
                warnings.push(format!(
                    "{}: {} {} below minimum {}, clamped",
                    context, def.name, v, min
                ));
                ParamValue::Number(*min)
            }
            Some(v) if v > *max => {
                warnings.push(format!(
                    "{}: {} {} above maximum {}, clamped",
                    context, def.name, v, max
                ));
                ParamValue::Number(*max)
            }
            Some(v) => ParamValue::Number(v),
            None => wrong_kind(def, supplied, context, warnings),
        },
        ParamKind::Toggle => match supplied.as_toggle() {
            Some(v) => ParamValue::Toggle(v),
            None => wrong_kind(def, supplied, context, warnings),
        },
        ParamKind::Text => match supplied.as_text() {
            Some(_) => supplied.clone(),
            None => wrong_kind(def, supplied, context, warnings),
        },
        ParamKind::Choice { options } => match supplied.as_text() {
            Some(v) if options.iter().any(|o| o == v) => supplied.clone(),
            Some(v) => {
                warnings.push(format!(
                    "{}: '{}' is not a {} option; using default",
                    context, v, def.name
                ));
                def.default.clone()
            }
            None => wrong_kind(def, supplied, context, warnings),
        },
        // Color format problems are the validator's to report; any text is
        // accepted here.
        ParamKind::Color => match supplied.as_text() {
            Some(_) => supplied.clone(),
            None => wrong_kind(def, supplied, context, warnings),
        },
    }
}

fn wrong_kind(
    def: &ParamDef,
    supplied: &ParamValue,
    context: &str,
    warnings: &mut Vec<String>,
) -> ParamValue {
    warnings.push(format!(
        "{}: {} expects a {}, got {}; using default",
        context,
        def.name,
        def.kind.name(),
        supplied.kind_name()
    ));
    def.default.clone()
}

/// Split a normalized parameter map into the runtime layer shape: `opacity`
/// is hoisted onto the layer itself, everything else stays in the map.
pub(crate) fn hoist_opacity(
    mut params: BTreeMap<String, ParamValue>,
) -> (f64, BTreeMap<String, ParamValue>) {
    let opacity = params
        .remove(OPACITY_PARAM)
        .and_then(|v| v.as_number())
        .unwrap_or(1.0);
    (opacity, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speed_def() -> ParamDef {
        ParamDef::number("speed", 0.1, 3.0, 1.0)
    }

    #[test]
    fn out_of_range_number_lands_exactly_on_the_bound() {
        let mut warnings = Vec::new();

        let high = coerce_value(&speed_def(), &ParamValue::Number(5.0), "layer 'plasma'", &mut warnings);
        assert_eq!(high, ParamValue::Number(3.0));

        let low = coerce_value(&speed_def(), &ParamValue::Number(-2.0), "layer 'plasma'", &mut warnings);
        assert_eq!(low, ParamValue::Number(0.1));

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("clamped"));
        assert!(warnings[1].contains("clamped"));
    }

    #[test]
    fn in_range_number_passes_through_without_warning() {
        let mut warnings = Vec::new();
        let v = coerce_value(&speed_def(), &ParamValue::Number(2.5), "layer 'plasma'", &mut warnings);
        assert_eq!(v, ParamValue::Number(2.5));
        assert!(warnings.is_empty());
    }

    #[test]
    fn wrong_kind_falls_back_to_default_with_warning() {
        let mut warnings = Vec::new();
        let v = coerce_value(
            &speed_def(),
            &ParamValue::Text("fast".to_string()),
            "layer 'plasma'",
            &mut warnings,
        );
        assert_eq!(v, ParamValue::Number(1.0));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("expects a number"));
    }

    #[test]
    fn choice_outside_options_uses_default() {
        let def = ParamDef::choice("palette", &["neon", "mono"], "neon");
        let mut warnings = Vec::new();
        let v = coerce_value(&def, &ParamValue::Text("sepia".to_string()), "layer 'bars'", &mut warnings);
        assert_eq!(v, ParamValue::Text("neon".to_string()));
        assert_eq!(warnings.len(), 1);

        let v = coerce_value(&def, &ParamValue::Text("mono".to_string()), "layer 'bars'", &mut warnings);
        assert_eq!(v, ParamValue::Text("mono".to_string()));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn normalize_backfills_missing_and_drops_undeclared() {
        let def = LayerTypeDef::new(
            "plasma",
            "Plasma",
            "layer-plasma",
            vec![
                ParamDef::number(OPACITY_PARAM, 0.0, 1.0, 1.0),
                speed_def(),
                ParamDef::toggle("mirror", false),
            ],
        );
        let mut supplied = BTreeMap::new();
        supplied.insert("speed".to_string(), ParamValue::Number(2.0));
        supplied.insert("voltage".to_string(), ParamValue::Number(9.0));

        let mut warnings = Vec::new();
        let params = normalize_params(&def, &supplied, "layer 'plasma'", &mut warnings);

        assert_eq!(params.get("speed"), Some(&ParamValue::Number(2.0)));
        assert_eq!(params.get(OPACITY_PARAM), Some(&ParamValue::Number(1.0)));
        assert_eq!(params.get("mirror"), Some(&ParamValue::Toggle(false)));
        assert!(params.get("voltage").is_none());
        // Backfills and drops are silent; the validator is the advisory channel.
        assert!(warnings.is_empty());
    }

    #[test]
    fn hoist_opacity_pulls_it_out_of_the_map() {
        let mut params = BTreeMap::new();
        params.insert(OPACITY_PARAM.to_string(), ParamValue::Number(0.4));
        params.insert("speed".to_string(), ParamValue::Number(1.0));

        let (opacity, rest) = hoist_opacity(params);
        assert_eq!(opacity, 0.4);
        assert!(rest.get(OPACITY_PARAM).is_none());
        assert_eq!(rest.get("speed"), Some(&ParamValue::Number(1.0)));

        let (opacity, _) = hoist_opacity(BTreeMap::new());
        assert_eq!(opacity, 1.0);
    }
}
