//! Static site content.
//!
//! Everything shown on the page apart from the animation panels and the
//! assistant output lives here. The defaults reproduce the stock portfolio;
//! a JSON file can override any subset of fields.
//!
//! Text fields marked "markup" are inserted as trusted HTML.

use crate::assistant::Persona;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tokio::fs;

/// Errors from loading a content file.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// All page content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub page_title: String,
    pub hero: Hero,
    pub about: About,
    pub projects_heading: String,
    pub projects: Vec<Project>,
    pub terminal: Terminal,
    /// Footer line (markup).
    pub footer: String,
    pub animations: Animations,
    pub persona: Persona,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub kicker: String,
    pub name: String,
    pub headline: String,
    pub headline_accent: String,
    /// Introductory paragraph (markup).
    pub intro: String,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub heading: String,
    /// Paragraphs (markup).
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub icon: String,
    pub title: String,
    /// Short description (markup).
    pub summary: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Terminal {
    pub title: String,
    pub prompt_hint: String,
    pub placeholder: String,
}

/// Which resource each panel shows, and how tall it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationSlot {
    pub resource: String,
    pub height: u32,
}

impl AnimationSlot {
    pub fn new(resource: impl Into<String>, height: u32) -> Self {
        Self {
            resource: resource.into(),
            height,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Animations {
    pub hero: AnimationSlot,
    pub about: AnimationSlot,
    pub chat: AnimationSlot,
}

impl Default for Animations {
    fn default() -> Self {
        Self {
            hero: AnimationSlot::new("Background looping animation.json", 420),
            about: AnimationSlot::new("Coding.json", 300),
            chat: AnimationSlot::new("Typing Animation.json", 250),
        }
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            kicker: "> INITIALIZING_PORTFOLIO...".to_string(),
            name: "Shressh sandip ghambir".to_string(),
            headline: "ENGINEERING INTELLIGENCE &".to_string(),
            headline_accent: "SOLVING COMPLEXITY".to_string(),
            intro: "VJTI Mumbai Sophomore (EXTC). I don't just write code; I architect systems. \
                    Bridging the gap between <b>Hardware (IoT)</b> and <b>High-Level Intelligence (ML)</b>."
                .to_string(),
            badges: ["PYTHON", "TENSORFLOW", "C++", "ESP32", "STREAMLIT"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Default for About {
    fn default() -> Self {
        Self {
            heading: "ABOUT_ME".to_string(),
            paragraphs: vec![
                "I am an engineer at heart. My work focuses on the intersection of \
                 <b>embedded systems</b> and <b>algorithmic efficiency</b>."
                    .to_string(),
                "Currently, I am deep-diving into Data Science architectures and Competitive Programming. \
                 My goal is simple: Build scalable, intelligent solutions for real-world hardware."
                    .to_string(),
            ],
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self {
            title: "INTERACTIVE_TERMINAL".to_string(),
            prompt_hint: "Run a query on the Sahil_Desai database:".to_string(),
            placeholder: "root@sahil:~$ ask_about_projects --verbose".to_string(),
        }
    }
}

fn project(icon: &str, title: &str, summary: &str, tags: &[&str]) -> Project {
    Project {
        icon: icon.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            page_title: "Sahil Desai | Portfolio".to_string(),
            hero: Hero::default(),
            about: About::default(),
            projects_heading: "DEPLOYED_PROJECTS".to_string(),
            projects: vec![
                project(
                    "\u{1F6E1}\u{FE0F}",
                    "AIthentic: Deepfake Detector",
                    "High-precision detection system utilizing <b>EfficientNet-B3</b> and <b>Bi-LSTMs</b>. \
                     Features \"Active Sampling\" to analyze high-motion frames, achieving <b>96.7% accuracy</b>.",
                    &["DEEP LEARNING", "COMPUTER VISION", "PYTHON"],
                ),
                project(
                    "\u{1F916}",
                    "Self-Balancing Bot",
                    "Autonomous stabilization using <b>ESP32 &amp; MPU6050</b>. \
                     Implemented custom PID algorithms for millisecond-level reaction times to maintain equilibrium.",
                    &["C++", "ROBOTICS", "EMBEDDED"],
                ),
                project(
                    "\u{1F4E1}",
                    "IoT Telemetry",
                    "Smart distance monitoring system with real-time web visualization. \
                     Features <b>WebSockets</b> for zero-latency data streaming via Chart.js dashboards.",
                    &["IoT", "ESP32", "WEBSOCKETS"],
                ),
                project(
                    "\u{1F50D}",
                    "Fuzzy Logic Search",
                    "High-efficiency search engine using <b>Levenshtein Distance</b>. \
                     Maps and ranks approximate string matches across large datasets instantly.",
                    &["NLP", "PYTHON", "ALGORITHMS"],
                ),
            ],
            terminal: Terminal::default(),
            footer: "// SYSTEM_STATUS: ONLINE | &copy; 2024 SAHIL DESAI".to_string(),
            animations: Animations::default(),
            persona: Persona::default(),
        }
    }
}

impl SiteContent {
    /// Load content from a JSON file. Missing fields keep their defaults.
    pub async fn load_json(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let content = fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load `path` if given, falling back to the defaults on any error.
    pub async fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load_json(path).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using built-in site content");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_content_shape() {
        let content = SiteContent::default();
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.animations.hero.height, 420);
        assert_eq!(content.animations.about.resource, "Coding.json");
        assert_eq!(content.animations.chat.height, 250);
        assert_eq!(content.hero.badges.len(), 5);
    }

    #[test]
    fn test_default_reproduces_stock_page_text() {
        let content = SiteContent::default();
        assert_eq!(content.page_title, "Sahil Desai | Portfolio");
        assert_eq!(content.hero.name, "Shressh sandip ghambir");
        assert_eq!(content.persona.owner, "Sahil Desai");
        assert_eq!(
            content.terminal.prompt_hint,
            "Run a query on the Sahil_Desai database:"
        );
    }

    #[tokio::test]
    async fn test_partial_override_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(
            &path,
            r#"{
                "page_title": "Ada | Portfolio",
                "hero": { "name": "Ada" },
                "persona": { "owner": "Ada", "style": "Terse.", "context": "Compiler engineer." }
            }"#,
        )
        .unwrap();

        let content = SiteContent::load_json(&path).await.unwrap();
        assert_eq!(content.page_title, "Ada | Portfolio");
        assert_eq!(content.hero.name, "Ada");
        assert_eq!(content.hero.kicker, Hero::default().kicker);
        assert_eq!(content.persona.owner, "Ada");
        assert_eq!(content.projects.len(), 4);
    }

    #[tokio::test]
    async fn test_bad_file_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(SiteContent::load_json(&path).await.is_err());
        let content = SiteContent::load_or_default(Some(&path)).await;
        assert_eq!(content.page_title, SiteContent::default().page_title);
    }
}
