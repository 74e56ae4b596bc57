//! Preset documents, one module per schema generation.
//!
//! A preset's wire form is a single JSON object whose integer `version`
//! field selects the shape of everything else. Each generation gets its own
//! fully concrete struct so migration steps are exhaustive matches; there is
//! no untyped escape hatch.

pub mod legacy;
pub mod v3;
pub mod v4;
pub mod v5;
pub mod v6;

pub use legacy::{LegacyLayer, MetaV1, MetaV2, PresetV1, PresetV2};
pub use v3::{LayerDoc, MacroDoc, MetaV3, ModRouteDoc, PresetV3};
pub use v4::{MetaV4, PresetType, PresetV4, ProjectDoc, SceneDoc};
pub use v5::{MetaV5, PresetV5};
pub use v6::{MetaV6, PresetV6};

use serde::{Deserialize, Serialize};

/// Latest preset schema generation. Migration always lands here.
pub const LATEST_VERSION: u32 = 6;

/// Optional application-version window attached to V3+ metadata. Absent on
/// V1/V2 presets, which predate compatibility metadata entirely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatWindow {
    #[serde(default)]
    pub min_version: Option<String>,
    #[serde(default)]
    pub max_version: Option<String>,
}

/// A preset at any point in its history. The variant always matches the
/// shape actually populated; no partially-migrated hybrid ever escapes the
/// migration chain.
#[derive(Debug, Clone, PartialEq)]
pub enum Preset {
    V1(PresetV1),
    V2(PresetV2),
    V3(PresetV3),
    V4(PresetV4),
    V5(PresetV5),
    V6(PresetV6),
}

impl Preset {
    pub fn version(&self) -> u32 {
        match self {
            Preset::V1(_) => 1,
            Preset::V2(_) => 2,
            Preset::V3(_) => 3,
            Preset::V4(_) => 4,
            Preset::V5(_) => 5,
            Preset::V6(_) => 6,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Preset::V1(p) => &p.metadata.name,
            Preset::V2(p) => &p.metadata.name,
            Preset::V3(p) => &p.metadata.name,
            Preset::V4(p) => &p.metadata.name,
            Preset::V5(p) => &p.metadata.name,
            Preset::V6(p) => &p.metadata.name,
        }
    }

    /// The compatibility window, for generations that carry one.
    pub fn compatibility(&self) -> Option<&CompatWindow> {
        match self {
            Preset::V1(_) | Preset::V2(_) => None,
            Preset::V3(p) => p.metadata.compatibility.as_ref(),
            Preset::V4(p) => p.metadata.compatibility.as_ref(),
            Preset::V5(p) => p.metadata.compatibility.as_ref(),
            Preset::V6(p) => p.metadata.compatibility.as_ref(),
        }
    }

    pub fn needs_migration(&self) -> bool {
        self.version() < LATEST_VERSION
    }
}
