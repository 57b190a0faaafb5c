//! Fixed on-disk layout every new project receives

use crate::templates::fallback::ArtifactKind;

/// Directory structure to create, parents before children
pub const PROJECT_DIRS: &[&str] = &[
    "app",
    "app/routers",
    "app/core",
    "app/models",
    "app/config",
    "app/services",
    "tests",
];

/// Package-marker files written into each Python package directory
pub const PACKAGE_MARKERS: &[&str] = &[
    "app/__init__.py",
    "app/routers/__init__.py",
    "app/core/__init__.py",
    "app/models/__init__.py",
    "app/config/__init__.py",
    "app/services/__init__.py",
    "tests/__init__.py",
];

pub const PACKAGE_MARKER_CONTENT: &str = "\"\"\"Initialize package.\"\"\"\n";

/// One file to materialize: which template serves it and where it lands
#[derive(Debug, Clone, Copy)]
pub struct ArtifactSpec {
    pub template_id: &'static str,
    pub destination: &'static str,
    pub kind: ArtifactKind,
}

/// The six top-level templated artifacts of a fresh project
pub fn project_artifacts() -> [ArtifactSpec; 6] {
    [
        ArtifactSpec {
            template_id: "main.py",
            destination: "app/main.py",
            kind: ArtifactKind::Entrypoint,
        },
        ArtifactSpec {
            template_id: "dependencies.py",
            destination: "app/dependencies.py",
            kind: ArtifactKind::Dependencies,
        },
        ArtifactSpec {
            template_id: "requirements.txt",
            destination: "requirements.txt",
            kind: ArtifactKind::Requirements,
        },
        ArtifactSpec {
            template_id: "env.example",
            destination: ".env.example",
            kind: ArtifactKind::EnvExample,
        },
        ArtifactSpec {
            template_id: "readme.md",
            destination: "README.md",
            kind: ArtifactKind::Readme,
        },
        ArtifactSpec {
            template_id: "gitignore",
            destination: ".gitignore",
            kind: ArtifactKind::GitIgnore,
        },
    ]
}
