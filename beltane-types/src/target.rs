use std::fmt;

use serde::{Deserialize, Serialize};

/// Structured modulation/macro destination: one parameter on one layer type.
/// V3+ documents store targets in this form; pre-V3 documents and the runtime
/// project use the legacy dotted string form instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamTarget {
    pub layer_type: String,
    pub param: String,
}

impl ParamTarget {
    pub fn new(layer_type: &str, param: &str) -> Self {
        ParamTarget {
            layer_type: layer_type.to_string(),
            param: param.to_string(),
        }
    }
}

impl fmt::Display for ParamTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.layer_type, self.param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_dotted() {
        let t = ParamTarget::new("plasma", "speed");
        assert_eq!(t.to_string(), "plasma.speed");
    }
}
