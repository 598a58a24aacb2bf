//! Application layer for ddd.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Reports**: What a scaffold run did
//! - **Errors**: Application-specific error types
//!
//! The application layer executes plans built by the domain layer but
//! decides nothing about paths or templates itself.

pub mod error;
pub mod ports;
pub mod report;
pub mod services;

// Re-export main services
pub use services::{
    FileMaterializer, ScaffoldOptions, ScaffoldService,
    TemplateInfo, // DTO for template metadata
    TemplateService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
pub use report::{ScaffoldReport, StepOutcome, StepReport};
