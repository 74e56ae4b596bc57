//! Read-only adapter over the host's layer-type and engine catalogs.
//!
//! The registry is injected into every stage of the pipeline rather than
//! reached through a global, so tests can swap in minimal fixture tables.
//! It answers three questions: what parameters does a layer type declare,
//! which canonical type does a legacy document id map to (and back), and
//! what macro template does an engine fix.

use std::collections::BTreeMap;

use beltane_types::{
    EngineDef, LayerTypeDef, MacroTemplate, ParamDef, ParamTarget, DEFAULT_ENGINE_ID,
    OPACITY_PARAM,
};

pub struct ParamRegistry {
    layer_types: Vec<LayerTypeDef>,
    by_id: BTreeMap<String, usize>,
    by_legacy_id: BTreeMap<String, usize>,
    engines: Vec<EngineDef>,
}

impl ParamRegistry {
    /// Build a registry from explicit tables. Declaration order of
    /// `layer_types` is the host's default stacking order.
    pub fn new(layer_types: Vec<LayerTypeDef>, engines: Vec<EngineDef>) -> Self {
        let mut by_id = BTreeMap::new();
        let mut by_legacy_id = BTreeMap::new();
        for (i, def) in layer_types.iter().enumerate() {
            by_id.insert(def.id.clone(), i);
            by_legacy_id.insert(def.legacy_id.clone(), i);
        }
        ParamRegistry {
            layer_types,
            by_id,
            by_legacy_id,
            engines,
        }
    }

    pub fn layer_type(&self, id: &str) -> Option<&LayerTypeDef> {
        self.by_id.get(id).map(|&i| &self.layer_types[i])
    }

    /// Canonical type id for a legacy document id ("layer-bars" -> "spectrum").
    pub fn canonical_for_legacy(&self, legacy_id: &str) -> Option<&str> {
        self.by_legacy_id
            .get(legacy_id)
            .map(|&i| self.layer_types[i].id.as_str())
    }

    /// Full type definition for a legacy document id.
    pub fn layer_type_for_legacy(&self, legacy_id: &str) -> Option<&LayerTypeDef> {
        self.by_legacy_id.get(legacy_id).map(|&i| &self.layer_types[i])
    }

    /// Legacy document id for a canonical type ("spectrum" -> "layer-bars").
    pub fn legacy_id_for(&self, canonical: &str) -> Option<&str> {
        self.layer_type(canonical).map(|d| d.legacy_id.as_str())
    }

    /// All layer types in the host's default stacking order.
    pub fn layer_types(&self) -> impl Iterator<Item = &LayerTypeDef> {
        self.layer_types.iter()
    }

    pub fn param(&self, layer_type: &str, name: &str) -> Option<&ParamDef> {
        self.layer_type(layer_type).and_then(|d| d.param(name))
    }

    pub fn engine(&self, id: &str) -> Option<&EngineDef> {
        self.engines.iter().find(|e| e.id == id)
    }

    /// The engine projects fall back to when a preset names an unknown one.
    pub fn default_engine(&self) -> Option<&EngineDef> {
        self.engine(DEFAULT_ENGINE_ID).or_else(|| self.engines.first())
    }

    /// The host's shipped catalog: every layer type the renderer knows, with
    /// the legacy ids presets used before V3, and the engine macro templates.
    pub fn builtin() -> Self {
        ParamRegistry::new(builtin_layer_types(), builtin_engines())
    }
}

fn opacity() -> ParamDef {
    ParamDef::number(OPACITY_PARAM, 0.0, 1.0, 1.0).modulated().midi()
}

fn builtin_layer_types() -> Vec<LayerTypeDef> {
    vec![
        LayerTypeDef::new(
            "plasma",
            "Plasma",
            "layer-plasma",
            vec![
                opacity(),
                ParamDef::number("speed", 0.1, 3.0, 1.0).modulated().midi(),
                ParamDef::number("scale", 0.25, 8.0, 2.0).modulated(),
                ParamDef::number("hue", 0.0, 360.0, 0.0).modulated().midi(),
                ParamDef::number("complexity", 1.0, 10.0, 4.0),
            ],
        ),
        LayerTypeDef::new(
            "spectrum",
            "Spectrum Bars",
            "layer-bars",
            vec![
                opacity(),
                ParamDef::number("bars", 8.0, 128.0, 64.0),
                ParamDef::number("smoothing", 0.0, 0.99, 0.6).modulated(),
                ParamDef::number("gain", 0.0, 4.0, 1.0).modulated().midi(),
                ParamDef::toggle("mirror", false),
                ParamDef::choice("palette", &["neon", "mono", "heat", "aqua"], "neon"),
            ],
        ),
        LayerTypeDef::new(
            "waveform",
            "Waveform Scope",
            "layer-scope",
            vec![
                opacity(),
                ParamDef::number("thickness", 0.5, 12.0, 2.0).modulated(),
                ParamDef::number("glow", 0.0, 1.0, 0.3).modulated().midi(),
                ParamDef::color("color", "#00ff88"),
                ParamDef::toggle("stereo", false),
            ],
        ),
        LayerTypeDef::new(
            "particles",
            "Particles",
            "layer-particles",
            vec![
                opacity(),
                ParamDef::number("count", 100.0, 20000.0, 5000.0),
                ParamDef::number("gravity", -2.0, 2.0, 0.0).modulated(),
                ParamDef::number("size", 0.5, 16.0, 3.0).modulated(),
                ParamDef::number("trail", 0.0, 1.0, 0.4).modulated().midi(),
            ],
        ),
        LayerTypeDef::new(
            "tunnel",
            "Tunnel",
            "layer-tunnel",
            vec![
                opacity(),
                ParamDef::number("speed", 0.05, 4.0, 1.0).modulated().midi(),
                ParamDef::number("depth", 2.0, 40.0, 12.0).modulated(),
                ParamDef::number("twist", -180.0, 180.0, 0.0).modulated(),
            ],
        ),
        LayerTypeDef::new(
            "kaleido",
            "Kaleidoscope",
            "layer-kaleido",
            vec![
                opacity(),
                ParamDef::number("segments", 2.0, 24.0, 6.0),
                ParamDef::number("rotation", -2.0, 2.0, 0.2).modulated().midi(),
                ParamDef::choice("source", &["camera", "layers", "noise"], "layers"),
            ],
        ),
        LayerTypeDef::new(
            "starfield",
            "Starfield",
            "layer-stars",
            vec![
                opacity(),
                ParamDef::number("density", 0.1, 5.0, 1.0).modulated(),
                ParamDef::number("speed", 0.05, 6.0, 1.2).modulated().midi(),
                ParamDef::number("warp", 0.0, 1.0, 0.0).modulated(),
            ],
        ),
        LayerTypeDef::new(
            "lattice",
            "Lattice",
            "layer-lattice",
            vec![
                opacity(),
                ParamDef::number("spacing", 4.0, 120.0, 24.0).modulated(),
                ParamDef::number("line", 0.5, 8.0, 1.5).modulated(),
                ParamDef::toggle("pulse", true),
            ],
        ),
        LayerTypeDef::new(
            "ripple",
            "Ripple",
            "layer-ripple",
            vec![
                opacity(),
                ParamDef::number("frequency", 0.1, 12.0, 2.0).modulated().midi(),
                ParamDef::number("damping", 0.0, 1.0, 0.5).modulated(),
                ParamDef::choice("origin", &["center", "random", "beat"], "center"),
            ],
        ),
        LayerTypeDef::new(
            "strobe",
            "Strobe",
            "layer-strobe",
            vec![
                opacity(),
                ParamDef::number("rate", 0.5, 30.0, 8.0).modulated().midi(),
                ParamDef::number("duty", 0.05, 0.95, 0.5).modulated(),
                ParamDef::toggle("sync", false),
            ],
        ),
    ]
}

fn builtin_engines() -> Vec<EngineDef> {
    vec![
        EngineDef::new(
            "aurora",
            "Aurora",
            vec![
                MacroTemplate::new(
                    "Intensity",
                    vec![
                        ParamTarget::new("plasma", "opacity"),
                        ParamTarget::new("starfield", "density"),
                    ],
                    0.8,
                ),
                MacroTemplate::new(
                    "Motion",
                    vec![
                        ParamTarget::new("plasma", "speed"),
                        ParamTarget::new("starfield", "speed"),
                    ],
                    0.5,
                ),
                MacroTemplate::new("Bloom", vec![ParamTarget::new("waveform", "glow")], 0.3),
                MacroTemplate::new("Color Drift", vec![ParamTarget::new("plasma", "hue")], 0.0),
                MacroTemplate::new("Pulse", vec![ParamTarget::new("ripple", "frequency")], 0.5),
            ],
        ),
        EngineDef::new(
            "pulsegrid",
            "Pulse Grid",
            vec![
                MacroTemplate::new("Drive", vec![ParamTarget::new("lattice", "spacing")], 0.5),
                MacroTemplate::new("Strobe Rate", vec![ParamTarget::new("strobe", "rate")], 0.4),
                MacroTemplate::new("Warp", vec![ParamTarget::new("starfield", "warp")], 0.0),
                MacroTemplate::new(
                    "Glow",
                    vec![
                        ParamTarget::new("waveform", "glow"),
                        ParamTarget::new("lattice", "line"),
                    ],
                    0.35,
                ),
                MacroTemplate::new("Echo", vec![ParamTarget::new("ripple", "damping")], 0.5),
                MacroTemplate::new("Scatter", vec![ParamTarget::new("particles", "trail")], 0.25),
            ],
        ),
        EngineDef::new(
            "nebula",
            "Nebula",
            vec![
                MacroTemplate::new("Density", vec![ParamTarget::new("particles", "count")], 0.5),
                MacroTemplate::new("Drift", vec![ParamTarget::new("particles", "gravity")], 0.5),
                MacroTemplate::new("Shimmer", vec![ParamTarget::new("plasma", "scale")], 0.4),
                MacroTemplate::new("Depth", vec![ParamTarget::new("tunnel", "depth")], 0.5),
                MacroTemplate::new("Haze", vec![ParamTarget::new("plasma", "opacity")], 0.6),
                MacroTemplate::new("Swirl", vec![ParamTarget::new("kaleido", "rotation")], 0.5),
                MacroTemplate::new("Flare", vec![ParamTarget::new("strobe", "duty")], 0.2),
            ],
        ),
    ]
}
