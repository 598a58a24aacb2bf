//! Template stores: where template sources come from.

mod directory;
mod embedded;

pub use directory::DirectoryStore;
pub use embedded::EmbeddedStore;
