//! Infrastructure adapters for ddd.
//!
//! This crate implements the ports defined in `ddd-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use builtin_templates::{StoreOrigin, resolve_store};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::JinjaRenderer;
pub use template_store::{DirectoryStore, EmbeddedStore};
