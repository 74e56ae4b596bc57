use crate::target::ParamTarget;

/// Engine every migrated or fallback project scopes to.
pub const DEFAULT_ENGINE_ID: &str = "aurora";

/// A render engine as the host catalogs it. Each engine fixes its own macro
/// vocabulary; the preset engine rebuilds macro banks from this template so
/// macro semantics never leak across engines.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineDef {
    pub id: String,
    pub name: String,
    pub macros: Vec<MacroTemplate>,
}

impl EngineDef {
    pub fn new(id: &str, name: &str, macros: Vec<MacroTemplate>) -> Self {
        EngineDef {
            id: id.to_string(),
            name: name.to_string(),
            macros,
        }
    }
}

/// One semantically named macro an engine exposes, with the layer parameters
/// it drives and the value it rests at.
#[derive(Debug, Clone, PartialEq)]
pub struct MacroTemplate {
    pub name: String,
    pub targets: Vec<ParamTarget>,
    pub default_value: f64,
}

impl MacroTemplate {
    pub fn new(name: &str, targets: Vec<ParamTarget>, default_value: f64) -> Self {
        MacroTemplate {
            name: name.to_string(),
            targets,
            default_value,
        }
    }
}
