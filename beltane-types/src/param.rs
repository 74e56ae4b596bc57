use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Universal layer parameter present on every layer type, hoisted onto the
/// runtime layer itself instead of living in its params map.
pub const OPACITY_PARAM: &str = "opacity";

/// A parameter value as it appears in a preset document: a bare JSON scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Toggle(bool),
    Text(String),
}

impl ParamValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_toggle(&self) -> Option<bool> {
        match self {
            ParamValue::Toggle(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Human-readable kind of this value, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParamValue::Number(_) => "number",
            ParamValue::Toggle(_) => "toggle",
            ParamValue::Text(_) => "text",
        }
    }
}

/// The declared type of a parameter, with whatever constraints that type carries.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamKind {
    Number { min: f64, max: f64 },
    Toggle,
    Text,
    Choice { options: Vec<String> },
    Color,
}

impl ParamKind {
    pub fn name(&self) -> &'static str {
        match self {
            ParamKind::Number { .. } => "number",
            ParamKind::Toggle => "toggle",
            ParamKind::Text => "text",
            ParamKind::Choice { .. } => "choice",
            ParamKind::Color => "color",
        }
    }
}

/// Definition of one layer parameter: type, bounds, default, capability flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDef {
    pub name: String,
    pub kind: ParamKind,
    pub default: ParamValue,
    pub modulatable: bool,
    pub midi_mappable: bool,
}

impl ParamDef {
    /// Numeric parameter. The default is clamped into `[min, max]` so the
    /// invariant min <= default <= max holds by construction.
    pub fn number(name: &str, min: f64, max: f64, default: f64) -> Self {
        ParamDef {
            name: name.to_string(),
            kind: ParamKind::Number { min, max },
            default: ParamValue::Number(default.clamp(min, max)),
            modulatable: false,
            midi_mappable: false,
        }
    }

    pub fn toggle(name: &str, default: bool) -> Self {
        ParamDef {
            name: name.to_string(),
            kind: ParamKind::Toggle,
            default: ParamValue::Toggle(default),
            modulatable: false,
            midi_mappable: false,
        }
    }

    pub fn text(name: &str, default: &str) -> Self {
        ParamDef {
            name: name.to_string(),
            kind: ParamKind::Text,
            default: ParamValue::Text(default.to_string()),
            modulatable: false,
            midi_mappable: false,
        }
    }

    /// Enumerated parameter. A default outside the option list falls back to
    /// the first option.
    pub fn choice(name: &str, options: &[&str], default: &str) -> Self {
        let options: Vec<String> = options.iter().map(|o| o.to_string()).collect();
        let default = if options.iter().any(|o| o == default) {
            default.to_string()
        } else {
            options.first().cloned().unwrap_or_else(|| default.to_string())
        };
        ParamDef {
            name: name.to_string(),
            kind: ParamKind::Choice { options },
            default: ParamValue::Text(default),
            modulatable: false,
            midi_mappable: false,
        }
    }

    pub fn color(name: &str, default: &str) -> Self {
        ParamDef {
            name: name.to_string(),
            kind: ParamKind::Color,
            default: ParamValue::Text(default.to_string()),
            modulatable: false,
            midi_mappable: false,
        }
    }

    /// Mark this parameter as a valid modulation destination.
    pub fn modulated(mut self) -> Self {
        self.modulatable = true;
        self
    }

    /// Mark this parameter as bindable to a MIDI controller.
    pub fn midi(mut self) -> Self {
        self.midi_mappable = true;
        self
    }

    /// Numeric bounds, when this parameter has them.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self.kind {
            ParamKind::Number { min, max } => Some((min, max)),
            _ => None,
        }
    }
}

/// One entry in the host's layer-type table: canonical id, display name, the
/// legacy document id it was known by pre-V3, and its ordered parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerTypeDef {
    pub id: String,
    pub name: String,
    pub legacy_id: String,
    pub params: Vec<ParamDef>,
}

impl LayerTypeDef {
    pub fn new(id: &str, name: &str, legacy_id: &str, params: Vec<ParamDef>) -> Self {
        LayerTypeDef {
            id: id.to_string(),
            name: name.to_string(),
            legacy_id: legacy_id.to_string(),
            params,
        }
    }

    pub fn param(&self, name: &str) -> Option<&ParamDef> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Full default parameter map for this type, opacity included.
    pub fn default_params(&self) -> BTreeMap<String, ParamValue> {
        self.params
            .iter()
            .map(|p| (p.name.clone(), p.default.clone()))
            .collect()
    }
}
