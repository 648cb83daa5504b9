//! Preset resolution and generation.
//!
//! A preset name is a hyphen-delimited list of option tokens such as
//! `linux-make-gcc-mt-lp64-static-release-znver3`. Each token belongs to
//! exactly one [`Category`] of the [registry]. This crate provides:
//!
//! - The ordered option [registry] ([`Category`], [`CategoryDef`])
//! - The name [parser](parse()) producing a [`ResolvedConfig`]
//! - Directory name [derivations](naming)
//! - The CMake [`PresetDocument`] builder
//! - The persisted [`IncludesRegistry`]
//! - The single-preset [`PresetWriter`] and the [batch] driver
//!
//! # Ordering
//!
//! Category declaration order is significant. It defines the layout of the
//! derived directory names and the order of the configure preset's
//! `inherits` list, where later fragments override earlier ones.

pub mod batch;
pub mod config;
pub mod document;
pub mod error;
pub mod includes;
pub mod naming;
pub mod parse;
pub mod registry;
pub mod settings;
pub mod writer;

pub use batch::{BatchOptions, BatchReport};
pub use config::ResolvedConfig;
pub use document::PresetDocument;
pub use error::{Error, ParseError, Result};
pub use includes::{IncludesRegistry, Registration};
pub use naming::{build_dir_name, install_dir_name};
pub use parse::parse;
pub use registry::{Category, CategoryDef};
pub use settings::GeneratorSettings;
pub use writer::{GeneratedPreset, PresetWriter};
