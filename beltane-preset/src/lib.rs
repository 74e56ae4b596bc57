//! Preset compatibility and migration engine for Beltane.
//!
//! This crate takes a preset document from any schema generation (V1–V6)
//! and carries it to the live project: a compatibility gate against the
//! running app version, a stepwise migration chain to the latest
//! generation, an advisory validator, and per-generation appliers that
//! project the result onto the runtime model.
//!
//! Everything here is a pure value transformation. No I/O, no shared
//! state; concurrent use is safe as long as the `ParamRegistry` is built
//! once and shared immutably.

pub mod apply;
pub mod compat;
pub mod document;
pub mod migrate;
pub mod registry;
pub mod validate;
pub mod version;

mod params;
mod target;

pub use apply::{
    apply_preset_v3, apply_preset_v4, apply_preset_v5, apply_preset_v6, default_project,
    AppliedProject,
};
pub use compat::{check_compatibility, check_compatibility_against, APP_VERSION};
pub use document::{decode_preset, encode_preset, encode_preset_string};
pub use migrate::{migrate_preset, migrate_preset_json, MigrationResult};
pub use registry::ParamRegistry;
pub use validate::{validate_preset, ValidationResult};
pub use version::compare_versions;
