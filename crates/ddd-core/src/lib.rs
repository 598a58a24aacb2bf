//! ddd Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `ddd`
//! boilerplate generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             ddd-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, TemplateService)    │
//! │     Executes plans, reports outcomes    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Store, Filesystem, Render)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     ddd-adapters (Infrastructure)       │
//! │  (DirectoryStore, LocalFilesystem, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (AppPath, ScaffoldPlan, blueprints)   │
//! │         No I/O                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ddd_core::prelude::*;
//!
//! // 1. Describe the request
//! let request = ScaffoldRequest::Entity {
//!     app: AppPath::parse("apps/shop"),
//!     entity: Name::parse("entity", "Product")?,
//!     style: ModelStyle::Dataclass,
//!     split: false,
//! };
//!
//! // 2. Run it through the service (with injected adapters)
//! let service = ScaffoldService::new(store, renderer, filesystem);
//! let report = service.scaffold(&request, &ScaffoldOptions::new("."))?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, ScaffoldOptions, ScaffoldReport, ScaffoldService, StepOutcome,
        StepReport, TemplateInfo, TemplateService,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        AppPath, Delimiters, DomainError, ModelStyle, Name, ParamValue, RenderParams,
        ScaffoldPlan, ScaffoldRequest, ServiceFormat, TemplateRef, ViewKind, WriteMode,
        WriteStep,
    };
    pub use crate::error::{ErrorCategory, ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
