//! Template resolution, substitution, and fallback generation
//!
//! This module provides:
//! - Template fetching from a local override directory or the remote store
//! - `{{KEY}}` placeholder substitution
//! - Hand-built fallback content for every artifact kind

pub mod fallback;
pub mod resolver;
pub mod subst;

pub use fallback::{generate, ArtifactKind};
pub use resolver::{ResolvedTemplate, TemplateNotFound, TemplateOrigin, TemplateResolver};
pub use subst::{substitute, SubstitutionContext};
