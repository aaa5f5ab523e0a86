//! Testing utilities for the portfolio.
//!
//! - `MockBackend` answers assistant queries without network calls
//! - `write_animation` drops a small valid animation file into a directory

use crate::assistant::{Backend, BackendError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A scripted backend that records every prompt it receives.
pub struct MockBackend {
    reply: Result<String, String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockBackend {
    /// A backend that always returns `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A backend whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Number of `generate` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.reply.clone().map_err(BackendError::Other)
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Minimal Lottie document used by fixtures.
pub fn sample_animation() -> serde_json::Value {
    serde_json::json!({
        "v": "5.7.4",
        "fr": 30,
        "ip": 0,
        "op": 60,
        "w": 200,
        "h": 200,
        "nm": "pulse",
        "layers": [],
        "assets": []
    })
}

/// Write [`sample_animation`] to `dir/name` and return the path.
pub fn write_animation(dir: &Path, name: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, sample_animation().to_string())?;
    Ok(path)
}
