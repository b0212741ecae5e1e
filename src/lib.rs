pub mod constants;
pub mod error;
pub mod model;
pub mod registry;
pub mod videos;

pub use error::{RegistryError, Result};
pub use model::*;
pub use registry::{Registry, RegistryTables, VariantInfo};
pub use videos::{TranslationKey, Video, VideoCatalog, VideoTarget};

use lazy_static::lazy_static;

lazy_static! {
    static ref REGISTRY: Registry = match Registry::new() {
        Ok(registry) => registry,
        Err(e) => panic!("built-in variant tables are inconsistent: {}", e),
    };
}

/// The process-wide registry, built and validated on first use.
///
/// Panics if the compiled-in tables violate an invariant; callers that want
/// to report that as an error should call [`Registry::new`] first.
pub fn registry() -> &'static Registry {
    &REGISTRY
}
