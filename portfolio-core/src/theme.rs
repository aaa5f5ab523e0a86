//! Neon color theme and the stylesheets derived from it.

/// Page color theme.
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub background: &'static str,
    pub foreground: &'static str,
    pub muted: &'static str,
    pub card: &'static str,
    pub card_hover: &'static str,

    // Accents
    pub cyan: &'static str,
    pub purple: &'static str,
    pub error: &'static str,

    // Fonts
    pub heading_font: &'static str,
    pub mono_font: &'static str,
    pub font_import: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#020202",
            foreground: "#e0e0e0",
            muted: "#b0b0b0",
            card: "rgba(20, 20, 20, 0.7)",
            card_hover: "rgba(30, 30, 30, 0.9)",

            cyan: "#00f3ff",
            purple: "#bc13fe",
            error: "#ff4b4b",

            heading_font: "'Rajdhani', sans-serif",
            mono_font: "'JetBrains Mono', monospace",
            font_import: "https://fonts.googleapis.com/css2?family=Rajdhani:wght@500;600;700&family=JetBrains+Mono:wght@400;700&display=swap",
        }
    }
}

impl Theme {
    /// Global stylesheet for the host page.
    pub fn stylesheet(&self) -> String {
        let Theme {
            background,
            foreground,
            muted,
            card,
            card_hover,
            cyan,
            purple,
            error,
            heading_font,
            mono_font,
            font_import,
        } = self;

        format!(
            r#"@import url('{font_import}');
body {{
    margin: 0;
    background-color: {background};
    background-image:
        radial-gradient(at 0% 0%, rgba(0, 243, 255, 0.05) 0px, transparent 50%),
        radial-gradient(at 100% 100%, rgba(188, 19, 254, 0.05) 0px, transparent 50%);
    color: {foreground};
    font-family: {heading_font};
}}
.page {{ max-width: 1200px; margin: 0 auto; padding: 3rem 1.5rem; }}
h1, h2, h3 {{ font-family: {heading_font}; text-transform: uppercase; letter-spacing: 2px; }}
p {{ font-family: {heading_font}; font-size: 1.15rem; font-weight: 500; color: {muted}; line-height: 1.5; }}
hr {{ border: none; border-top: 1px solid rgba(255, 255, 255, 0.1); margin: 2.5rem 0; }}
.row {{ display: flex; gap: 1.5rem; align-items: stretch; }}
.row > .col {{ min-width: 0; }}
.grid {{ display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 1.5rem; }}
.neon-cyan {{ color: {cyan}; text-shadow: 0 0 10px rgba(0, 243, 255, 0.6); }}
.neon-purple {{ color: {purple}; text-shadow: 0 0 10px rgba(188, 19, 254, 0.6); }}
.neon-card {{
    background: {card};
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-left: 4px solid #333;
    border-radius: 8px;
    padding: 30px;
    position: relative;
    overflow: hidden;
    transition: all 0.3s ease-in-out;
    box-shadow: 0 4px 15px rgba(0, 0, 0, 0.5);
    height: 100%;
    box-sizing: border-box;
}}
.neon-card::before {{
    content: ""; position: absolute; top: 0; left: -100%; width: 100%; height: 100%;
    background: linear-gradient(120deg, transparent, rgba(0, 243, 255, 0.15), transparent);
    transition: all 0.6s;
}}
.neon-card:hover::before {{ left: 100%; }}
.neon-card:hover {{
    transform: translateY(-8px) scale(1.01);
    border-left: 4px solid {cyan};
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.5), 0 0 20px rgba(0, 243, 255, 0.4);
    background: {card_hover};
}}
.tech-badge {{
    font-family: {mono_font}; font-size: 0.85rem; color: {cyan};
    background: rgba(0, 243, 255, 0.08); border: 1px solid rgba(0, 243, 255, 0.3);
    padding: 4px 10px; border-radius: 4px; margin-right: 8px; margin-bottom: 5px;
    display: inline-block; transition: 0.3s;
}}
.tech-badge:hover {{ background: rgba(0, 243, 255, 0.2); box-shadow: 0 0 10px rgba(0, 243, 255, 0.4); cursor: default; }}
.terminal-input {{
    width: 100%; box-sizing: border-box; padding: 0.6rem 0.8rem;
    background-color: #080808; border: 1px solid #333;
    color: {cyan}; font-family: {mono_font}; font-size: 1rem;
}}
.terminal-input:focus {{ outline: none; border-color: {cyan}; box-shadow: 0 0 15px rgba(0, 243, 255, 0.15); }}
.terminal-output {{
    background: #0d0d0d; border-left: 2px solid {cyan}; padding: 20px;
    border-radius: 4px; font-family: {mono_font}; margin-top: 10px;
}}
.terminal-output .label {{ color: {cyan}; font-size: 0.8rem; margin-bottom: 5px; }}
.terminal-output .body {{ color: #ccc; font-size: 1rem; white-space: pre-wrap; }}
.spinner {{ font-family: {mono_font}; color: {cyan}; margin-top: 10px; }}
.notice-error {{
    background: rgba(255, 75, 75, 0.1); color: {error};
    border: 1px solid rgba(255, 75, 75, 0.4); border-radius: 6px;
    padding: 12px 16px; margin: 10px 0; font-family: {mono_font};
}}
.footer {{ text-align: center; margin-top: 80px; color: #444; font-family: {mono_font}; font-size: 0.8rem; }}
"#
        )
    }

    /// Stylesheet for the sandboxed animation panel document.
    ///
    /// `inner_height` is the container height after the chrome allowance.
    pub fn panel_stylesheet(&self, inner_height: u32) -> String {
        let Theme { cyan, purple, .. } = self;
        format!(
            r#"body {{ margin: 0; overflow: hidden; background: transparent; }}
.neon-container {{
    background: rgba(10, 10, 10, 0.6);
    border: 2px solid {cyan};
    border-radius: 15px;
    padding: 15px;
    height: {inner_height}px;
    display: flex;
    align-items: center;
    justify-content: center;
    box-shadow: 0 0 20px rgba(0, 243, 255, 0.4), inset 0 0 15px rgba(0, 243, 255, 0.1);
    backdrop-filter: blur(5px);
    animation: pulse-border 4s infinite alternate;
    margin: 5px;
}}
@keyframes pulse-border {{
    0% {{ border-color: {cyan}; box-shadow: 0 0 20px rgba(0, 243, 255, 0.4); }}
    100% {{ border-color: {purple}; box-shadow: 0 0 30px rgba(188, 19, 254, 0.6); }}
}}
lottie-player {{ width: 100%; height: 100%; }}
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_uses_theme_colors() {
        let theme = Theme {
            cyan: "#123456",
            ..Theme::default()
        };
        let css = theme.stylesheet();
        assert!(css.contains("color: #123456"));
        assert!(css.contains(".neon-card"));
        assert!(css.contains(".tech-badge"));
    }

    #[test]
    fn test_panel_stylesheet_height() {
        let css = Theme::default().panel_stylesheet(380);
        assert!(css.contains("height: 380px;"));
        assert!(css.contains("@keyframes pulse-border"));
    }
}
