//! Animation asset loading.
//!
//! Animation descriptions are JSON files consumed by the external Lottie
//! player. The loader never interprets them; it only checks they parse.
//! Failures collapse to "absent" for callers that just want to render,
//! while [`AssetLoader::load_tagged`] keeps the cause for tests and logs.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Errors from reading an animation resource.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// An opaque animation document, passed through to the player untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimationDocument(serde_json::Value);

impl AnimationDocument {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }

    /// Serialize the document back to compact JSON.
    pub fn to_json(&self) -> String {
        // Serializing a `Value` cannot fail: all keys are strings.
        serde_json::to_string(&self.0).unwrap_or_else(|_| "null".to_string())
    }
}

/// Result of a load attempt, with the failure kind kept.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(AnimationDocument),
    NotFound,
    Unreadable(String),
    ParseError(String),
}

impl LoadOutcome {
    /// Collapse to the public present/absent contract.
    pub fn into_document(self) -> Option<AnimationDocument> {
        match self {
            LoadOutcome::Loaded(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LoadOutcome::Loaded(_) => "loaded",
            LoadOutcome::NotFound => "not_found",
            LoadOutcome::Unreadable(_) => "unreadable",
            LoadOutcome::ParseError(_) => "parse_error",
        }
    }
}

/// Reads animation documents by resource name, relative to a root directory.
#[derive(Debug, Clone)]
pub struct AssetLoader {
    root: PathBuf,
}

impl Default for AssetLoader {
    /// A loader rooted at the process working directory.
    fn default() -> Self {
        Self::new(".")
    }
}

impl AssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a resource name against the loader root.
    pub fn resolve(&self, resource_name: &str) -> PathBuf {
        self.root.join(resource_name)
    }

    /// Load a document, or `None` if it is missing or unusable.
    ///
    /// Every call re-reads the file.
    pub async fn load(&self, resource_name: &str) -> Option<AnimationDocument> {
        let outcome = self.load_tagged(resource_name).await;
        if !matches!(outcome, LoadOutcome::Loaded(_)) {
            tracing::debug!(
                resource = resource_name,
                kind = outcome.kind(),
                "animation resource unavailable"
            );
        }
        outcome.into_document()
    }

    /// Load a document, keeping the reason when it fails.
    pub async fn load_tagged(&self, resource_name: &str) -> LoadOutcome {
        match read_document(&self.resolve(resource_name)).await {
            Ok(doc) => LoadOutcome::Loaded(doc),
            Err(AssetError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                LoadOutcome::NotFound
            }
            Err(AssetError::Io(e)) => LoadOutcome::Unreadable(e.to_string()),
            Err(AssetError::Json(e)) => LoadOutcome::ParseError(e.to_string()),
        }
    }
}

async fn read_document(path: &Path) -> Result<AnimationDocument, AssetError> {
    let content = fs::read_to_string(path).await?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    Ok(AnimationDocument(value))
}
