//! Bundle - Build-Time Descriptor
//!
//! The declarative record describing how this remote is packaged and served.
//! Created once at startup, validated, and never mutated at runtime.

pub mod config;

pub use config::{
    BuildMode, BundleConfig, DevServerConfig, ModuleRule, OutputConfig, PublicPath, ResolveConfig,
};
