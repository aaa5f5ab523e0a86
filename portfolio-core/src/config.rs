//! Process configuration and secret resolution.
//!
//! The backend credential is resolved once, when the config is built.
//! Secrets are layered with figment, later sources win:
//! 1. The `GOOGLE_API_KEY` key of a TOML secrets file
//! 2. The `GOOGLE_API_KEY` environment variable (callers load `.env` first)
//!
//! A blank environment variable does not shadow the file. A missing
//! credential is not an error for the process; it only disables the
//! assistant.

use crate::assistant::{Assistant, Backend, Persona};
use figment::{
    error::Kind,
    providers::{Env, Format, Toml},
    Figment,
};
use gemini::Gemini;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Default location of the secrets file, relative to the working directory.
pub const DEFAULT_SECRETS_PATH: &str = ".streamlit/secrets.toml";

/// Name of the backend credential in every secret source.
pub const API_KEY_NAME: &str = gemini::API_KEY_VAR;

pub use gemini::DEFAULT_MODEL;

/// Errors from secret resolution.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("secret {0} not found")]
    Missing(String),

    #[error("secret {0} is empty")]
    Empty(String),

    #[error("secret {0} is not a string")]
    NotString(String),

    #[error("secrets source error: {0}")]
    Source(#[from] figment::Error),
}

/// An API key that never prints its value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Looks up named secrets in a TOML file, overridden by the environment.
#[derive(Debug, Clone)]
pub struct SecretStore {
    file: Option<PathBuf>,
    use_env: bool,
}

impl Default for SecretStore {
    fn default() -> Self {
        Self {
            file: Some(PathBuf::from(DEFAULT_SECRETS_PATH)),
            use_env: true,
        }
    }
}

impl SecretStore {
    /// A store reading only the given TOML file.
    pub fn file_only(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
            use_env: false,
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Build the provider chain for `name`.
    ///
    /// A missing secrets file contributes nothing. The environment layer is
    /// only merged when the variable holds a non-blank value.
    pub fn figment(&self, name: &str) -> Figment {
        let mut figment = Figment::new();

        if let Some(path) = &self.file {
            figment = figment.merge(Toml::file(path));
        }

        if self.use_env {
            let env = Env::raw().only(&[name]).lowercase(false);
            if env.iter().any(|(_, value)| !value.trim().is_empty()) {
                figment = figment.merge(env);
            }
        }

        figment
    }

    /// Resolve `name` from the configured sources.
    pub fn resolve(&self, name: &str) -> Result<String, SecretError> {
        let value = match self.figment(name).find_value(name) {
            Ok(value) => value,
            Err(e) if matches!(e.kind, Kind::MissingField(_)) => {
                return Err(SecretError::Missing(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let value = value
            .into_string()
            .ok_or_else(|| SecretError::NotString(name.to_string()))?;
        if value.trim().is_empty() {
            return Err(SecretError::Empty(name.to_string()));
        }
        Ok(value)
    }
}

/// Runtime configuration shared by every page render.
#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    /// Directory animation resources are resolved against.
    pub asset_dir: PathBuf,
    /// Optional JSON file overriding the built-in site content.
    pub content_path: Option<PathBuf>,
    /// Gemini model name.
    pub model: String,
    /// HTML-escape assistant replies instead of inserting them verbatim.
    pub escape_output: bool,
    /// Backend credential; `None` disables the assistant.
    pub api_key: Option<ApiKey>,
    /// Override for the Gemini API root.
    pub api_base: Option<String>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("."),
            content_path: None,
            model: DEFAULT_MODEL.to_string(),
            escape_output: false,
            api_key: None,
            api_base: None,
        }
    }
}

impl PortfolioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    pub fn with_content_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_path = Some(path.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_escape_output(mut self, escape: bool) -> Self {
        self.escape_output = escape;
        self
    }

    pub fn with_api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Resolve the API key from `store`. Any failure leaves it unset.
    pub fn with_secrets(mut self, store: &SecretStore) -> Self {
        self.api_key = match store.resolve(API_KEY_NAME) {
            Ok(key) => Some(ApiKey::new(key)),
            Err(e) => {
                tracing::info!(reason = %e, "assistant disabled");
                None
            }
        };
        self
    }

    /// The Gemini client, if a credential is configured.
    pub fn backend(&self) -> Option<Arc<dyn Backend>> {
        let key = self.api_key.as_ref()?;
        let mut client = Gemini::new(key.expose()).with_model(&self.model);
        if let Some(base) = &self.api_base {
            client = client.with_base_url(base);
        }
        let backend: Arc<dyn Backend> = Arc::new(client);
        Some(backend)
    }

    /// Build the assistant for this configuration.
    pub fn assistant(&self, persona: Persona) -> Assistant {
        Assistant::new(self.backend(), persona)
    }
}
