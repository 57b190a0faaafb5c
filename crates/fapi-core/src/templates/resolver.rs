//! Template resolution from a local override directory or the remote store
//!
//! Resolution order is fixed: if an override directory is configured and
//! holds the requested file under `templates/`, that file wins. Otherwise
//! the template is fetched from `<base_url>/templates/<id>`. The override
//! directory is per-file authoritative, not per-directory - a configured
//! directory that lacks the specific file still falls through to remote.
//!
//! Resolution never panics or raises on "template didn't exist"; it returns
//! `TemplateNotFound` so callers can fall back to generated content.

use anyhow::{Context, Result};
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use url::Url;

/// Default remote store - raw files from the upstream GitHub repository
pub const DEFAULT_TEMPLATE_URL: &str =
    "https://raw.githubusercontent.com/GonzoDMX/Fapi_Project_Creator/refs/heads/main";

/// Environment variable overriding the remote template store URL
pub const TEMPLATE_URL_ENV: &str = "FAPI_TEMPLATE_URL";

/// Environment variable pointing at a local override directory
pub const CONFIG_DIR_ENV: &str = "FAPI_CONFIG_DIR";

/// Which source ultimately served a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateOrigin {
    Local,
    Remote,
}

/// A resolved template: its raw text plus the source that served it
#[derive(Debug, Clone)]
pub struct ResolvedTemplate {
    pub content: String,
    pub origin: TemplateOrigin,
}

/// Template unavailable from both sources
///
/// Covers local read failure, transport errors, and non-2xx responses
/// alike - callers only ever need the one fallback decision.
#[derive(Debug, Error)]
#[error("template '{id}' unavailable: {reason}")]
pub struct TemplateNotFound {
    pub id: String,
    pub reason: String,
}

impl TemplateNotFound {
    fn new(id: &str, reason: impl ToString) -> Self {
        Self {
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Resolves template identifiers against the override directory and the
/// remote store
pub struct TemplateResolver {
    override_dir: Option<PathBuf>,
    base_url: Url,
    client: reqwest::Client,
}

impl TemplateResolver {
    /// Create a resolver with an explicit configuration
    ///
    /// Tests use this directly; the CLI goes through [`from_env`].
    ///
    /// [`from_env`]: TemplateResolver::from_env
    pub fn new(override_dir: Option<PathBuf>, base_url: Url) -> Self {
        Self {
            override_dir,
            base_url,
            client: reqwest::Client::builder()
                .user_agent("fapi")
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a resolver from the process environment
    ///
    /// Remote base URL comes from `FAPI_TEMPLATE_URL` (defaulting to the
    /// upstream repository); the override directory from
    /// [`discover_override_dir`].
    ///
    /// [`discover_override_dir`]: TemplateResolver::discover_override_dir
    pub fn from_env() -> Result<Self> {
        let url_str = std::env::var(TEMPLATE_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_TEMPLATE_URL.to_string());
        let base_url =
            Url::parse(&url_str).with_context(|| format!("Invalid template URL: {}", url_str))?;
        Ok(Self::new(Self::discover_override_dir(), base_url))
    }

    /// Locate the local override directory, if any
    ///
    /// Priority: `FAPI_CONFIG_DIR`, then `~/.config/fapi`, then
    /// `/etc/fapi`. Only existing directories qualify.
    pub fn discover_override_dir() -> Option<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Some(PathBuf::from(dir));
        }

        let mut candidates = Vec::new();
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(".config").join("fapi"));
        }
        candidates.push(PathBuf::from("/etc/fapi"));

        candidates.into_iter().find(|p| p.is_dir())
    }

    /// Build `<base_url>/templates/<id>`, preserving query parameters
    fn template_url(&self, id: &str) -> Result<Url, TemplateNotFound> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| TemplateNotFound::new(id, "base URL cannot have path segments"))?;
            segments.pop_if_empty().push("templates");
            for part in id.split('/') {
                segments.push(part);
            }
        }
        Ok(url)
    }

    /// Resolve a template id to its content, local override first
    pub async fn resolve(&self, id: &str) -> Result<ResolvedTemplate, TemplateNotFound> {
        if let Some(dir) = &self.override_dir {
            let path = dir.join("templates").join(id);
            if path.exists() {
                // The override file is authoritative once present; a read
                // failure here is not papered over by a remote fetch.
                return match fs::read_to_string(&path).await {
                    Ok(content) => Ok(ResolvedTemplate {
                        content,
                        origin: TemplateOrigin::Local,
                    }),
                    Err(e) => Err(TemplateNotFound::new(
                        id,
                        format!("failed to read {}: {}", path.display(), e),
                    )),
                };
            }
        }

        let url = self.template_url(id)?;
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| TemplateNotFound::new(id, e))?;

        if !response.status().is_success() {
            return Err(TemplateNotFound::new(
                id,
                format!("HTTP {} from {}", response.status(), url),
            ));
        }

        let content = response
            .text()
            .await
            .map_err(|e| TemplateNotFound::new(id, e))?;

        Ok(ResolvedTemplate {
            content,
            origin: TemplateOrigin::Remote,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver_for(base: &str) -> TemplateResolver {
        TemplateResolver::new(None, Url::parse(base).unwrap())
    }

    #[test]
    fn test_template_url_simple() {
        let r = resolver_for("https://example.com/store");
        let url = r.template_url("main.py").unwrap();
        assert_eq!(url.as_str(), "https://example.com/store/templates/main.py");
    }

    #[test]
    fn test_template_url_nested_id() {
        let r = resolver_for("https://example.com/store");
        let url = r.template_url("licenses/mit").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/store/templates/licenses/mit"
        );
    }

    #[test]
    fn test_template_url_trailing_slash() {
        let r = resolver_for("https://example.com/store/");
        let url = r.template_url("gitignore").unwrap();
        assert_eq!(url.as_str(), "https://example.com/store/templates/gitignore");
    }
}
