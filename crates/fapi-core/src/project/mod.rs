//! Project layout tables, license table, and the materializer

pub mod layout;
pub mod license;
pub mod materializer;

pub use layout::{project_artifacts, ArtifactSpec, PACKAGE_MARKERS, PROJECT_DIRS};
pub use license::LicenseChoice;
pub use materializer::{create_model, create_router, init_project, write_license};
