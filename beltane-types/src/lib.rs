//! # beltane-types
//!
//! Shared type definitions for the Beltane visual performance ecosystem:
//! preset documents across every historical schema generation, the runtime
//! project model, and the parameter/engine catalog entries the preset
//! engine validates against.
//!
//! This crate is data only. The migration pipeline, validation, and JSON
//! document codec live in `beltane-preset`.

pub mod engine;
pub mod param;
pub mod preset;
pub mod project;
pub mod target;

pub use engine::{EngineDef, MacroTemplate, DEFAULT_ENGINE_ID};
pub use param::{LayerTypeDef, ParamDef, ParamKind, ParamValue, OPACITY_PARAM};
pub use target::ParamTarget;

// Re-export the document and runtime models at the crate root for convenience
pub use preset::*;
pub use project::*;
