//! JSON codec for versioned preset documents.
//!
//! A preset file is one JSON object whose integer `version` field selects
//! the schema generation. Decoding sniffs that field first, then
//! deserializes the whole document as the matching generation; everything
//! after the version check is as lenient as the generation's struct allows.

use beltane_types::{Preset, LATEST_VERSION};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Decode a raw preset document into its typed generation.
pub fn decode_preset(raw: &str) -> Result<Preset, String> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {}", e))?;
    let version = match value.get("version") {
        None => return Err("missing 'version' field".to_string()),
        Some(v) => v
            .as_u64()
            .ok_or_else(|| format!("'version' must be an integer, got {}", v))?,
    };
    match version {
        1 => Ok(Preset::V1(decode_as(1, value)?)),
        2 => Ok(Preset::V2(decode_as(2, value)?)),
        3 => Ok(Preset::V3(decode_as(3, value)?)),
        4 => Ok(Preset::V4(decode_as(4, value)?)),
        5 => Ok(Preset::V5(decode_as(5, value)?)),
        6 => Ok(Preset::V6(decode_as(6, value)?)),
        other => Err(format!(
            "unsupported preset version {} (this build reads 1-{})",
            other, LATEST_VERSION
        )),
    }
}

fn decode_as<T: DeserializeOwned>(version: u64, value: Value) -> Result<T, String> {
    serde_json::from_value(value)
        .map_err(|e| format!("malformed version {} document: {}", version, e))
}

/// Encode a preset as a JSON value with its `version` field written back in.
pub fn encode_preset(preset: &Preset) -> Result<Value, String> {
    let mut value = match preset {
        Preset::V1(p) => encode_as(p)?,
        Preset::V2(p) => encode_as(p)?,
        Preset::V3(p) => encode_as(p)?,
        Preset::V4(p) => encode_as(p)?,
        Preset::V5(p) => encode_as(p)?,
        Preset::V6(p) => encode_as(p)?,
    };
    if let Some(map) = value.as_object_mut() {
        map.insert("version".to_string(), Value::from(preset.version()));
    }
    Ok(value)
}

fn encode_as<T: Serialize>(preset: &T) -> Result<Value, String> {
    serde_json::to_value(preset).map_err(|e| format!("failed to encode preset: {}", e))
}

/// Encode a preset in the pretty-printed form preset files are saved in.
pub fn encode_preset_string(preset: &Preset) -> Result<String, String> {
    let value = encode_preset(preset)?;
    serde_json::to_string_pretty(&value).map_err(|e| format!("failed to encode preset: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use beltane_types::{ParamValue, PresetV6};

    #[test]
    fn decodes_each_version_by_its_field() {
        let p = decode_preset(r#"{"version": 1, "metadata": {"name": "Old"}}"#).unwrap();
        match p {
            Preset::V1(p) => assert_eq!(p.metadata.name, "Old"),
            other => panic!("Expected V1, got {:?}", other),
        }

        let p = decode_preset(r#"{"version": 6, "metadata": {"name": "New"}}"#).unwrap();
        match p {
            Preset::V6(p) => {
                assert_eq!(p.metadata.name, "New");
                assert_eq!(p.metadata.active_engine_id, "aurora");
            }
            other => panic!("Expected V6, got {:?}", other),
        }
    }

    #[test]
    fn lenient_about_missing_sections() {
        let p = decode_preset(r#"{"version": 2, "metadata": {"name": "Bare"}}"#).unwrap();
        match p {
            Preset::V2(p) => {
                assert!(p.layers.is_empty());
                assert!(p.modulations.is_empty());
            }
            other => panic!("Expected V2, got {:?}", other),
        }
    }

    #[test]
    fn rejects_invalid_json() {
        let err = decode_preset("{not json").unwrap_err();
        assert!(err.starts_with("invalid JSON:"), "{}", err);
    }

    #[test]
    fn rejects_missing_or_non_integer_version() {
        assert_eq!(
            decode_preset(r#"{"metadata": {"name": "X"}}"#).unwrap_err(),
            "missing 'version' field"
        );
        let err = decode_preset(r#"{"version": "2"}"#).unwrap_err();
        assert!(err.contains("'version' must be an integer"), "{}", err);
    }

    #[test]
    fn rejects_versions_outside_the_ladder() {
        let err = decode_preset(r#"{"version": 7}"#).unwrap_err();
        assert_eq!(err, "unsupported preset version 7 (this build reads 1-6)");
        let err = decode_preset(r#"{"version": 0}"#).unwrap_err();
        assert!(err.contains("unsupported preset version 0"), "{}", err);
    }

    #[test]
    fn rejects_shape_mismatches_with_the_version() {
        let err = decode_preset(r#"{"version": 3, "layers": {"plasma": {}}}"#).unwrap_err();
        assert!(err.starts_with("malformed version 3 document:"), "{}", err);
    }

    #[test]
    fn encode_writes_the_version_field_back() {
        let mut v6 = PresetV6::default();
        v6.metadata.name = "Round".to_string();
        let value = encode_preset(&Preset::V6(v6)).unwrap();
        assert_eq!(value["version"], 6);
        assert_eq!(value["metadata"]["name"], "Round");
    }

    #[test]
    fn encoded_string_decodes_to_the_same_preset() {
        let mut v6 = PresetV6::default();
        v6.metadata.name = "Round".to_string();
        let preset = Preset::V6(v6);

        let raw = encode_preset_string(&preset).unwrap();
        assert!(raw.contains('\n'));
        let back = decode_preset(&raw).unwrap();
        assert_eq!(back, preset);
    }

    #[test]
    fn param_values_decode_as_bare_scalars() {
        let raw = r#"{
            "version": 2,
            "metadata": {"name": "Scalars"},
            "layers": [{
                "id": "layer-plasma",
                "params": {"speed": 1.5, "mirror": true, "palette": "neon"}
            }]
        }"#;
        let p = decode_preset(raw).unwrap();
        match p {
            Preset::V2(p) => {
                let params = &p.layers[0].params;
                assert_eq!(params.get("speed"), Some(&ParamValue::Number(1.5)));
                assert_eq!(params.get("mirror"), Some(&ParamValue::Toggle(true)));
                assert_eq!(
                    params.get("palette"),
                    Some(&ParamValue::Text("neon".to_string()))
                );
            }
            other => panic!("Expected V2, got {:?}", other),
        }
    }
}
