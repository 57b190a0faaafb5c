//! Fapi Core - Library for scaffolding FastAPI projects
//!
//! This library provides the core functionality behind the `fapi` CLI:
//! resolving text templates from a local override directory or a remote
//! store, substituting placeholder values, and materializing project
//! structures on disk.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Templates** - Template resolution (local-then-remote), placeholder
//!   substitution, and hand-built fallback content for when no template
//!   source is reachable
//! - **Project** - Project layout tables and the materializer that creates
//!   directories and emits files, plus the license table
//! - **Runtime** - External collaborators: git initialization and the
//!   uvicorn development server
//!
//! Interactive prompts and argument parsing live in the `fapi` binary
//! crate; everything here is drivable without a terminal, which is what the
//! integration tests do.

pub mod error;
pub mod project;
pub mod runtime;
pub mod templates;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use project::license::LicenseChoice;
pub use project::materializer::{create_model, create_router, init_project, write_license};
pub use templates::fallback::ArtifactKind;
pub use templates::resolver::{ResolvedTemplate, TemplateOrigin, TemplateResolver};
pub use templates::subst::{substitute, SubstitutionContext};
