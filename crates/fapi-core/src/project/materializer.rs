//! Project materialization: directory scaffolding and file emission
//!
//! Every file goes through the same pipeline: resolve template, substitute
//! placeholders, write. Resolution failure is absorbed per artifact and the
//! fallback generator fills in; only structural problems (destination
//! already present, expected directory missing) and write failures abort.

use crate::error::ScaffoldError;
use crate::project::layout::{
    project_artifacts, PACKAGE_MARKERS, PACKAGE_MARKER_CONTENT, PROJECT_DIRS,
};
use crate::project::license::LicenseChoice;
use crate::templates::fallback::{self, ArtifactKind};
use crate::templates::resolver::{TemplateOrigin, TemplateResolver};
use crate::templates::subst::{substitute, SubstitutionContext, AUTHOR_NAME_KEY, PROJECT_NAME_KEY};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Create a new project skeleton at `project_dir`
///
/// Fails up front with `AlreadyExists` if the path is taken, before any
/// side effect. Directory creation and marker/artifact writes surface I/O
/// errors; template availability never fails the command.
pub async fn init_project(
    resolver: &TemplateResolver,
    project_dir: &Path,
) -> Result<(), ScaffoldError> {
    if project_dir.exists() {
        return Err(ScaffoldError::AlreadyExists(project_dir.to_path_buf()));
    }

    let project_name = project_display_name(project_dir);

    fs::create_dir_all(project_dir).await?;
    println!("Created project directory: {}", project_dir.display());

    for dir in PROJECT_DIRS {
        fs::create_dir_all(project_dir.join(dir)).await?;
        println!("Created directory: {}", dir);
    }

    for marker in PACKAGE_MARKERS {
        fs::write(project_dir.join(marker), PACKAGE_MARKER_CONTENT).await?;
        println!("Created file: {}", marker);
    }

    let ctx = SubstitutionContext::new().with(PROJECT_NAME_KEY, project_name.as_str());

    for spec in project_artifacts() {
        let content = match resolver.resolve(spec.template_id).await {
            Ok(resolved) => {
                let source = match resolved.origin {
                    TemplateOrigin::Local => "local template",
                    TemplateOrigin::Remote => "remote template",
                };
                println!("Created {} from {}", spec.destination, source);
                substitute(&resolved.content, &ctx)
            }
            Err(e) => {
                println!(
                    "{} {} ({}), using fallback content",
                    "Warning:".yellow(),
                    format!("could not fetch template for {}", spec.destination),
                    e
                );
                fallback::generate(spec.kind, &project_name)
            }
        };
        fs::write(project_dir.join(spec.destination), content).await?;
    }

    Ok(())
}

/// Resolve the chosen license text and write `LICENSE`
///
/// A `LicenseChoice::None` is a no-op. Errors are returned for the caller
/// to downgrade to a warning; license failure never fails project creation.
pub async fn write_license(
    resolver: &TemplateResolver,
    project_dir: &Path,
    choice: LicenseChoice,
    project_name: &str,
    author: &str,
) -> anyhow::Result<()> {
    let Some(template_id) = choice.template_id() else {
        return Ok(());
    };

    let resolved = resolver.resolve(template_id).await?;
    let ctx = SubstitutionContext::new()
        .with(PROJECT_NAME_KEY, project_name)
        .with(AUTHOR_NAME_KEY, author);

    fs::write(project_dir.join("LICENSE"), substitute(&resolved.content, &ctx)).await?;
    Ok(())
}

/// Add a router file to an existing project's `app/routers`
pub async fn create_router(
    resolver: &TemplateResolver,
    project_dir: &Path,
    router_name: &str,
) -> Result<PathBuf, ScaffoldError> {
    if !project_dir.exists() {
        return Err(ScaffoldError::ProjectNotFound(project_dir.to_path_buf()));
    }
    let routers_dir = project_dir.join("app").join("routers");
    if !routers_dir.is_dir() {
        return Err(ScaffoldError::RoutersDirMissing(project_dir.to_path_buf()));
    }
    write_addon(resolver, &routers_dir, router_name, ArtifactKind::Router).await
}

/// Add a model file to an existing project's `app/models`
pub async fn create_model(
    resolver: &TemplateResolver,
    project_dir: &Path,
    model_name: &str,
) -> Result<PathBuf, ScaffoldError> {
    if !project_dir.exists() {
        return Err(ScaffoldError::ProjectNotFound(project_dir.to_path_buf()));
    }
    let models_dir = project_dir.join("app").join("models");
    if !models_dir.is_dir() {
        return Err(ScaffoldError::ModelsDirMissing(project_dir.to_path_buf()));
    }
    write_addon(resolver, &models_dir, model_name, ArtifactKind::Model).await
}

/// Shared tail of `create_router`/`create_model`
///
/// The template sees the symbol-cased name; the fallback generator derives
/// route prefixes and labels from the raw name itself.
async fn write_addon(
    resolver: &TemplateResolver,
    target_dir: &Path,
    name: &str,
    kind: ArtifactKind,
) -> Result<PathBuf, ScaffoldError> {
    let file = target_dir.join(format!("{}.py", name));
    if file.exists() {
        return Err(ScaffoldError::AlreadyExists(file));
    }

    let content = match resolver.resolve(kind.file_name()).await {
        Ok(resolved) => {
            let ctx =
                SubstitutionContext::new().with(PROJECT_NAME_KEY, fallback::symbol_name(name));
            substitute(&resolved.content, &ctx)
        }
        Err(e) => {
            println!(
                "{} {} ({}), using fallback content",
                "Warning:".yellow(),
                format!("could not fetch {} template", kind.file_name()),
                e
            );
            fallback::generate(kind, name)
        }
    };

    fs::write(&file, content).await?;
    Ok(file)
}

/// Last path component, used as the `PROJECT_NAME` substitution value
fn project_display_name(project_dir: &Path) -> String {
    project_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| project_dir.display().to_string())
}
