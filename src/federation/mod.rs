//! Federation - Exposure Map and Shared Dependency Contract
//!
//! The descriptor naming which modules this remote publishes, the manifest a
//! host fetches to discover them, and the runtime registry resolving exposed
//! names for hosts that link this crate directly.

pub mod manifest;
pub mod registry;

pub use manifest::{FederationConfig, RemoteEntry, SharedDependency};
pub use registry::{ExposedModule, RemoteRegistry};
