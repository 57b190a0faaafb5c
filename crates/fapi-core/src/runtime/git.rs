//! Git repository initialization
//!
//! Failure here (git missing, init error) is always non-fatal to project
//! creation; the caller downgrades the error to a notice.

use anyhow::Result;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Run `git init` in the freshly created project directory
pub async fn init_repository(project_dir: &Path) -> Result<()> {
    let status = Command::new("git")
        .arg("init")
        .current_dir(project_dir)
        .stdout(Stdio::null())
        .status()
        .await?;

    if !status.success() {
        anyhow::bail!("git init exited with {}", status);
    }
    Ok(())
}
