//! Neon portfolio page engine.
//!
//! This crate provides:
//! - Animation asset loading with tagged failure outcomes
//! - Sandboxed Lottie panel rendering with per-panel identifiers
//! - A Gemini-backed terminal assistant with a fixed persona
//! - Page composition from replaceable site content
//!
//! # Quick Start
//!
//! ```ignore
//! use portfolio_core::{Portfolio, PortfolioConfig, SecretStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = PortfolioConfig::new()
//!         .with_asset_dir("assets")
//!         .with_secrets(&SecretStore::default());
//!
//!     let site = Portfolio::from_config(&config).await;
//!     let page = site.render(Some("explain IoT Telemetry")).await;
//!     println!("{}", page.html);
//! }
//! ```

pub mod animation;
pub mod assets;
pub mod assistant;
pub mod config;
pub mod content;
pub mod html;
pub mod page;
pub mod site;
pub mod testing;
pub mod theme;

// Primary public API
pub use animation::{AnimationRenderer, Panel, PanelId};
pub use assets::{AnimationDocument, AssetLoader, LoadOutcome};
pub use assistant::{Assistant, AssistantQuery, Backend, BackendError, Persona, QueryState};
pub use config::{ApiKey, PortfolioConfig, SecretError, SecretStore};
pub use content::SiteContent;
pub use site::{Portfolio, RenderedPage};
pub use testing::MockBackend;
pub use theme::Theme;
