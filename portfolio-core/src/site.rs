//! Portfolio - one page render pass.
//!
//! Wraps the asset loader, animation renderer, assistant and content into
//! a single entry point. Each call to [`Portfolio::render`] re-reads the
//! animation resources, answers the query (if any) and composes the page.

use crate::animation::AnimationRenderer;
use crate::assets::AssetLoader;
use crate::assistant::{Assistant, QueryState};
use crate::config::PortfolioConfig;
use crate::content::{AnimationSlot, SiteContent};
use crate::page::{render_page, PagePanels, PageView};
use crate::theme::Theme;

/// The result of one render pass.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub state: QueryState,
    pub panels: PagePanels,
}

/// A configured portfolio site.
#[derive(Debug, Clone)]
pub struct Portfolio {
    loader: AssetLoader,
    renderer: AnimationRenderer,
    assistant: Assistant,
    content: SiteContent,
    theme: Theme,
    escape_output: bool,
}

impl Portfolio {
    /// Assemble a portfolio from explicit parts.
    pub fn new(loader: AssetLoader, assistant: Assistant, content: SiteContent) -> Self {
        let theme = Theme::default();
        Self {
            loader,
            renderer: AnimationRenderer::new(theme.clone()),
            assistant,
            content,
            theme,
            escape_output: false,
        }
    }

    /// Build from a resolved configuration, loading the content file if any.
    pub async fn from_config(config: &PortfolioConfig) -> Self {
        let content = SiteContent::load_or_default(config.content_path.as_deref()).await;
        let assistant = config.assistant(content.persona.clone());
        Self::new(AssetLoader::new(&config.asset_dir), assistant, content)
            .with_escape_output(config.escape_output)
    }

    pub fn with_escape_output(mut self, escape: bool) -> Self {
        self.escape_output = escape;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.renderer = AnimationRenderer::new(theme.clone());
        self.theme = theme;
        self
    }

    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// Run one render pass for an optional query.
    pub async fn render(&self, query: Option<&str>) -> RenderedPage {
        let query = query.unwrap_or_default();
        let animations = &self.content.animations;

        let panels = PagePanels {
            hero: self.panel(&animations.hero, "hero").await,
            about: self.panel(&animations.about, "about").await,
            chat: self.panel(&animations.chat, "chat").await,
        };

        let state = self.assistant.handle(query).await;

        let html = render_page(&PageView {
            content: &self.content,
            theme: &self.theme,
            panels: &panels,
            query,
            state: &state,
            escape_output: self.escape_output,
        });

        RenderedPage {
            html,
            state,
            panels,
        }
    }

    async fn panel(&self, slot: &AnimationSlot, key: &str) -> crate::animation::Panel {
        let document = self.loader.load(&slot.resource).await;
        self.renderer.render(document.as_ref(), slot.height, key)
    }
}
