//! Animated panel rendering.
//!
//! A panel is a sandboxed `<iframe srcdoc>` holding a neon-bordered
//! container and a `<lottie-player>` element. The animation document is
//! handed to the player by a script that runs after the element exists,
//! addressing it by a per-panel [`PanelId`].

use crate::assets::AnimationDocument;
use crate::html;
use crate::theme::Theme;
use std::fmt;
use uuid::Uuid;

/// Vertical space taken by the container's padding, border and margin.
pub const CHROME_ALLOWANCE: u32 = 40;

/// External playback library loaded inside each panel.
pub const PLAYER_SCRIPT_URL: &str =
    "https://unpkg.com/@lottiefiles/lottie-player@latest/dist/lottie-player.js";

/// Notice shown in place of a panel whose document is unavailable.
pub const UNAVAILABLE_NOTICE: &str = "Animation file not found or invalid.";

/// Identifier binding a panel's load script to its player element.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(Uuid);

impl PanelId {
    /// Create a new random ID
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[inline]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PanelId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PanelId({})", &self.0.simple().to_string()[..8])
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lottie_{}", self.0.simple())
    }
}

/// A rendered panel slot.
#[derive(Debug, Clone)]
pub enum Panel {
    /// A live animation panel.
    Embedded(EmbeddedPanel),
    /// The document could not be loaded; an error notice stands in.
    Unavailable { key: String },
}

/// A panel with a bound player element.
#[derive(Debug, Clone)]
pub struct EmbeddedPanel {
    pub id: PanelId,
    pub key: String,
    /// Outer frame height in logical pixels.
    pub height: u32,
    /// The self-contained document shown inside the sandboxed frame.
    pub document_html: String,
}

impl EmbeddedPanel {
    /// Height of the neon container inside the frame.
    pub fn inner_height(&self) -> u32 {
        self.height.saturating_sub(CHROME_ALLOWANCE)
    }
}

impl Panel {
    pub fn key(&self) -> &str {
        match self {
            Panel::Embedded(panel) => &panel.key,
            Panel::Unavailable { key } => key,
        }
    }

    pub fn panel_id(&self) -> Option<PanelId> {
        match self {
            Panel::Embedded(panel) => Some(panel.id),
            Panel::Unavailable { .. } => None,
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, Panel::Embedded(_))
    }

    /// Markup to place in the host page.
    pub fn to_html(&self) -> String {
        match self {
            Panel::Embedded(panel) => format!(
                r#"<iframe class="anim-panel" data-panel-key="{key}" title="{key}" sandbox="allow-scripts" height="{height}" style="width: 100%; height: {height}px; border: 0;" srcdoc="{srcdoc}"></iframe>"#,
                key = html::escape(&panel.key),
                height = panel.height,
                srcdoc = html::escape(&panel.document_html),
            ),
            Panel::Unavailable { key } => format!(
                r#"<div class="notice-error" data-panel-key="{}">{UNAVAILABLE_NOTICE}</div>"#,
                html::escape(key)
            ),
        }
    }
}

/// Builds animation panels in the page theme.
#[derive(Debug, Clone, Default)]
pub struct AnimationRenderer {
    theme: Theme,
}

impl AnimationRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Render a panel for `document` at `height` pixels.
    ///
    /// An absent document yields [`Panel::Unavailable`] and no player.
    pub fn render(&self, document: Option<&AnimationDocument>, height: u32, key: &str) -> Panel {
        let Some(document) = document else {
            return Panel::Unavailable {
                key: key.to_string(),
            };
        };

        let id = PanelId::new();
        let inner_height = height.saturating_sub(CHROME_ALLOWANCE);
        let document_html = self.panel_document(id, inner_height, document);

        Panel::Embedded(EmbeddedPanel {
            id,
            key: key.to_string(),
            height,
            document_html,
        })
    }

    fn panel_document(&self, id: PanelId, inner_height: u32, document: &AnimationDocument) -> String {
        let data = html::script_safe_json(&document.to_json());
        let style = self.theme.panel_stylesheet(inner_height);

        // The load script must follow the player element.
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <script src="{PLAYER_SCRIPT_URL}"></script>
    <style>
{style}    </style>
</head>
<body>
    <div class="neon-container">
        <lottie-player id="{id}" background="transparent" speed="1" loop autoplay></lottie-player>
    </div>
    <script>
        const animData = {data};
        const player = document.getElementById("{id}");
        player.load(animData);
    </script>
</body>
</html>
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_doc() -> AnimationDocument {
        AnimationDocument::new(json!({ "v": "5.7.4", "layers": [{ "nm": "</script>" }] }))
    }

    #[test]
    fn test_absent_document_has_no_player() {
        let panel = AnimationRenderer::default().render(None, 300, "about");

        assert!(!panel.is_embedded());
        assert!(panel.panel_id().is_none());
        let html = panel.to_html();
        assert!(html.contains(UNAVAILABLE_NOTICE));
        assert!(!html.contains("lottie-player"));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn test_two_renders_get_distinct_ids() {
        let renderer = AnimationRenderer::default();
        let doc = sample_doc();
        let first = renderer.render(Some(&doc), 420, "hero");
        let second = renderer.render(Some(&doc), 420, "hero");

        assert_ne!(first.panel_id(), second.panel_id());
    }

    #[test]
    fn test_panel_id_format() {
        let id = PanelId::new().to_string();
        assert!(id.starts_with("lottie_"));
        let hex = &id["lottie_".len()..];
        assert_eq!(hex.len(), 32);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_inner_height_subtracts_chrome() {
        let panel = AnimationRenderer::default().render(Some(&sample_doc()), 250, "chat");
        let Panel::Embedded(embedded) = panel else {
            panic!("expected an embedded panel");
        };
        assert_eq!(embedded.inner_height(), 210);
        assert!(embedded.document_html.contains("height: 210px;"));
    }

    #[test]
    fn test_tiny_height_saturates() {
        let panel = AnimationRenderer::default().render(Some(&sample_doc()), 10, "tiny");
        let Panel::Embedded(embedded) = panel else {
            panic!("expected an embedded panel");
        };
        assert_eq!(embedded.inner_height(), 0);
    }

    #[test]
    fn test_player_precedes_load_script() {
        let panel = AnimationRenderer::default().render(Some(&sample_doc()), 300, "about");
        let Panel::Embedded(embedded) = &panel else {
            panic!("expected an embedded panel");
        };
        let doc = &embedded.document_html;
        let id = embedded.id.to_string();

        let player_at = doc.find(&format!(r#"<lottie-player id="{id}""#)).unwrap();
        let load_at = doc.find(&format!(r#"document.getElementById("{id}")"#)).unwrap();
        assert!(player_at < load_at);
        assert!(doc.contains("loop autoplay"));
        assert!(!doc.contains("controls"));
        assert!(doc.contains(PLAYER_SCRIPT_URL));
    }

    #[test]
    fn test_document_payload_is_embedded_script_safe() {
        let panel = AnimationRenderer::default().render(Some(&sample_doc()), 300, "about");
        let Panel::Embedded(embedded) = &panel else {
            panic!("expected an embedded panel");
        };
        assert!(embedded.document_html.contains(r#""nm":"\u003c/script>""#));
        // Only the two real closing tags remain: the library include and the loader.
        assert_eq!(embedded.document_html.matches("</script>").count(), 2);
    }

    #[test]
    fn test_embedded_html_is_sandboxed_frame() {
        let panel = AnimationRenderer::default().render(Some(&sample_doc()), 420, "hero");
        let html = panel.to_html();

        assert!(html.starts_with("<iframe"));
        assert!(html.contains(r#"sandbox="allow-scripts""#));
        assert!(!html.contains("allow-same-origin"));
        assert!(html.contains(r#"height="420""#));
        assert!(html.contains(r#"data-panel-key="hero""#));
        // srcdoc is attribute-escaped, so no raw tags leak into the host page.
        assert!(!html.contains("<lottie-player"));
        assert!(html.contains("&lt;lottie-player"));
    }
}
