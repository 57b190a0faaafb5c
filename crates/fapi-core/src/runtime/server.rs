//! Development server launch (uvicorn)
//!
//! The tool only launches the server and passes its exit status through;
//! it does not manage the process beyond that.

use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Check whether uvicorn is reachable on PATH
pub async fn uvicorn_available() -> bool {
    Command::new("uvicorn")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Launch `uvicorn app.main:app --reload` with the project as cwd
///
/// Blocks until the server exits and returns its exit status so the CLI
/// can pass it through.
pub async fn run_dev_server(project_dir: &Path) -> Result<ExitStatus> {
    if !project_dir.exists() {
        return Err(ScaffoldError::ProjectNotFound(project_dir.to_path_buf()).into());
    }

    let main_file = project_dir.join("app").join("main.py");
    if !main_file.exists() {
        anyhow::bail!("app/main.py not found in '{}'", project_dir.display());
    }

    if !uvicorn_available().await {
        anyhow::bail!(
            "uvicorn is not installed. Install the project requirements first:\n  \
             pip install -r {}",
            project_dir.join("requirements.txt").display()
        );
    }

    println!(
        "{}",
        format!("Starting development server for '{}'...", project_dir.display()).cyan()
    );
    println!("Access the API at http://127.0.0.1:8000");
    println!("API documentation at http://127.0.0.1:8000/docs");
    println!("Press CTRL+C to stop the server");

    let status = Command::new("uvicorn")
        .args(["app.main:app", "--reload"])
        .current_dir(project_dir)
        .status()
        .await
        .context("Failed to start development server")?;

    Ok(status)
}
