//! Hand-built fallback content for when template resolution fails
//!
//! Router and Model fallbacks are complete, valid FastAPI source files so
//! that a project scaffolded entirely offline still runs. Every other kind
//! degrades to a one-line placeholder comment - just enough for the file to
//! exist with a hint of what belongs there.

use std::fmt;

/// The kinds of files the materializer can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Entrypoint,
    Dependencies,
    Requirements,
    EnvExample,
    Readme,
    GitIgnore,
    License,
    Router,
    Model,
}

impl ArtifactKind {
    /// File name the artifact lands under (Router/Model files are named
    /// after the user-supplied name instead)
    pub fn file_name(&self) -> &'static str {
        match self {
            ArtifactKind::Entrypoint => "main.py",
            ArtifactKind::Dependencies => "dependencies.py",
            ArtifactKind::Requirements => "requirements.txt",
            ArtifactKind::EnvExample => ".env.example",
            ArtifactKind::Readme => "README.md",
            ArtifactKind::GitIgnore => ".gitignore",
            ArtifactKind::License => "LICENSE",
            ArtifactKind::Router => "router.py",
            ArtifactKind::Model => "model.py",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// `user_profile` -> `UserProfile`
pub fn symbol_name(name: &str) -> String {
    name.split('_')
        .filter(|seg| !seg.is_empty())
        .map(title_case)
        .collect()
}

/// `user_profile` -> `User Profile`
pub fn title_label(name: &str) -> String {
    name.split('_')
        .filter(|seg| !seg.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `user_profile` -> `user profile`
pub fn human_label(name: &str) -> String {
    name.replace('_', " ")
}

fn title_case(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

/// Produce fallback content for an artifact
///
/// `name` is the router/model name for code kinds, or the project name for
/// placeholder kinds. Deterministic; performs no I/O.
pub fn generate(kind: ArtifactKind, name: &str) -> String {
    match kind {
        ArtifactKind::Router => router_source(name),
        ArtifactKind::Model => model_source(name),
        _ => format!("# {} for {}\n", kind.file_name(), name),
    }
}

/// Minimal CRUD router scoped under `/{name}`
///
/// The route prefix and payload wording use the raw name; only the tag is
/// title-cased for display.
fn router_source(name: &str) -> String {
    let human = human_label(name);
    let tag = title_label(name);
    format!(
        r#""""Router for {name} endpoints."""

from fastapi import APIRouter, Depends, HTTPException
from typing import List, Optional

router = APIRouter(
    prefix="/{name}",
    tags=["{tag}"],
    responses={{404: {{"description": "Not found"}}}}
)

@router.get("/")
async def get_{name}s():
    """Get all {human}s."""
    return {{"message": "List of {human}s"}}

@router.get("/{{item_id}}")
async def get_{name}(item_id: int):
    """Get a specific {human}."""
    return {{"id": item_id, "name": "{human} name"}}

@router.post("/")
async def create_{name}():
    """Create a new {human}."""
    return {{"message": "Created {human}"}}

@router.put("/{{item_id}}")
async def update_{name}(item_id: int):
    """Update a {human}."""
    return {{"id": item_id, "message": "Updated {human}"}}

@router.delete("/{{item_id}}")
async def delete_{name}(item_id: int):
    """Delete a {human}."""
    return {{"message": "Deleted {human} with id {{item_id}}"}}
"#
    )
}

/// Pydantic base/create/full model trio with an ORM compatibility marker
fn model_source(name: &str) -> String {
    let class_name = symbol_name(name);
    let human = human_label(name);
    format!(
        r#""""Pydantic models for {name}."""

from pydantic import BaseModel, Field
from typing import List, Optional
from datetime import datetime

class {class_name}Base(BaseModel):
    """Base {class_name} model with common attributes."""
    name: str = Field(..., description="Name of the {human}")
    description: Optional[str] = Field(None, description="Description of the {human}")

class {class_name}Create({class_name}Base):
    """Model for creating a new {class_name}."""
    pass

class {class_name}({class_name}Base):
    """Model for a {class_name} with all attributes."""
    id: int = Field(..., description="Unique identifier")
    created_at: datetime = Field(..., description="Creation timestamp")
    updated_at: Optional[datetime] = Field(None, description="Last update timestamp")

    class Config:
        """Pydantic config."""
        orm_mode = True
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_name() {
        assert_eq!(symbol_name("user_profile"), "UserProfile");
        assert_eq!(symbol_name("widget"), "Widget");
        assert_eq!(symbol_name("blog_post"), "BlogPost");
        // Stray underscores do not produce empty segments
        assert_eq!(symbol_name("user__profile"), "UserProfile");
    }

    #[test]
    fn test_labels() {
        assert_eq!(title_label("user_profile"), "User Profile");
        assert_eq!(human_label("user_profile"), "user profile");
    }

    #[test]
    fn test_router_prefix_uses_raw_name() {
        let content = generate(ArtifactKind::Router, "widget");
        assert!(content.contains("prefix=\"/widget\""));
        assert!(!content.contains("prefix=\"/Widget\""));
        assert!(content.contains("tags=[\"Widget\"]"));
    }

    #[test]
    fn test_router_has_crud_handlers() {
        let content = generate(ArtifactKind::Router, "user_profile");
        assert!(content.contains("async def get_user_profiles()"));
        assert!(content.contains("async def get_user_profile(item_id: int)"));
        assert!(content.contains("async def create_user_profile()"));
        assert!(content.contains("async def update_user_profile(item_id: int)"));
        assert!(content.contains("async def delete_user_profile(item_id: int)"));
        assert!(content.contains("List of user profiles"));
    }

    #[test]
    fn test_model_declarations() {
        let content = generate(ArtifactKind::Model, "blog_post");
        assert!(content.contains("class BlogPostBase(BaseModel):"));
        assert!(content.contains("class BlogPostCreate(BlogPostBase):"));
        assert!(content.contains("class BlogPost(BlogPostBase):"));
        assert!(content.contains("orm_mode = True"));
        assert!(content.contains("created_at: datetime"));
    }

    #[test]
    fn test_placeholder_kinds() {
        assert_eq!(
            generate(ArtifactKind::Requirements, "shop"),
            "# requirements.txt for shop\n"
        );
        assert_eq!(
            generate(ArtifactKind::GitIgnore, "shop"),
            "# .gitignore for shop\n"
        );
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            generate(ArtifactKind::Router, "order"),
            generate(ArtifactKind::Router, "order")
        );
    }
}
