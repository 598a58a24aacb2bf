// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for ddd.
//!
//! This module contains the pure scaffolding logic: decoding app paths,
//! validating names, and turning a request into a [`ScaffoldPlan`]. All I/O,
//! templating, and rendering concerns are handled via ports (traits) defined
//! in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable values**: All domain objects are Clone + PartialEq
pub mod app_path;
pub mod blueprints;
pub mod error;
pub mod name;
pub mod plan;
pub mod request;
pub mod template_ref;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use app_path::AppPath;
pub use error::DomainError;
pub use name::Name;
pub use plan::{Guard, ScaffoldPlan, WriteMode, WriteStep};
pub use request::{ModelStyle, ScaffoldRequest, ServiceFormat, ViewKind};
pub use template_ref::{Delimiters, ParamValue, RenderParams, TemplateRef};
pub use validation::DomainValidator;
