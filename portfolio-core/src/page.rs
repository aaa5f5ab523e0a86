//! Page composition.
//!
//! Sections are emitted in a fixed order: hero, about, projects, terminal,
//! footer. Every section is a pure function of its inputs.

use crate::animation::Panel;
use crate::assistant::{QueryState, PENDING_NOTICE};
use crate::content::{Project, SiteContent};
use crate::html;
use crate::theme::Theme;

/// The three animated slots of the page.
#[derive(Debug, Clone)]
pub struct PagePanels {
    pub hero: Panel,
    pub about: Panel,
    pub chat: Panel,
}

/// Everything one page render needs.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub content: &'a SiteContent,
    pub theme: &'a Theme,
    pub panels: &'a PagePanels,
    /// The query as typed, echoed back into the input box.
    pub query: &'a str,
    pub state: &'a QueryState,
    pub escape_output: bool,
}

/// Render the full HTML document.
pub fn render_page(view: &PageView<'_>) -> String {
    let sections = [
        hero_section(view),
        about_section(view),
        projects_section(view.content),
        terminal_section(view),
        footer_section(view.content),
    ];

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title}</title>
<style>
{style}</style>
</head>
<body>
<main class="page">
{body}
</main>
</body>
</html>
"#,
        title = html::escape(&view.content.page_title),
        style = view.theme.stylesheet(),
        body = sections.join("\n<hr>\n"),
    )
}

fn badges(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!(r#"<span class="tech-badge">{}</span>"#, html::escape(t)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn hero_section(view: &PageView<'_>) -> String {
    let hero = &view.content.hero;
    let cyan = view.theme.cyan;
    format!(
        r#"<section id="hero" class="row">
<div class="col" style="flex: 1.8;">
<p style="color: {cyan}; font-family: JetBrains Mono; font-size: 1rem; margin-bottom: 0;">{kicker}</p>
<h1 style="font-size: 5rem; line-height: 0.9; margin-bottom: 15px; color: white;">I AM <span class="neon-cyan">{name}</span></h1>
<h3 style="font-size: 1.8rem; color: #888; margin-bottom: 25px;">{headline} <span class="neon-purple">{accent}</span></h3>
<p>{intro}</p>
<div style="margin-top: 30px; margin-bottom: 30px;">
{badges}
</div>
</div>
<div class="col" style="flex: 1;">
{panel}
</div>
</section>"#,
        kicker = html::escape(&hero.kicker),
        name = html::escape(&hero.name),
        headline = html::escape(&hero.headline),
        accent = html::escape(&hero.headline_accent),
        intro = hero.intro,
        badges = badges(&hero.badges),
        panel = view.panels.hero.to_html(),
    )
}

fn about_section(view: &PageView<'_>) -> String {
    let about = &view.content.about;
    let paragraphs = about
        .paragraphs
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if i == 0 {
                format!(r#"<p style="color: #eee;">{p}</p>"#)
            } else {
                format!("<p>{p}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section id="about">
<h2 style="margin-bottom: 30px;"><span class="neon-cyan">//</span> {heading}</h2>
<div class="row">
<div class="col" style="flex: 2;">
<div class="neon-card">
{paragraphs}
</div>
</div>
<div class="col" style="flex: 1;">
{panel}
</div>
</div>
</section>"#,
        heading = html::escape(&about.heading),
        panel = view.panels.about.to_html(),
    )
}

fn project_card(project: &Project) -> String {
    format!(
        r#"<div class="neon-card">
<h3 style="color: white; font-size: 1.6rem;">{icon} {title}</h3>
<p style="font-size: 1rem;">{summary}</p>
<div style="margin-top: 15px;">
{badges}
</div>
</div>"#,
        icon = html::escape(&project.icon),
        title = html::escape(&project.title),
        summary = project.summary,
        badges = badges(&project.tags),
    )
}

fn projects_section(content: &SiteContent) -> String {
    let cards = content
        .projects
        .iter()
        .map(project_card)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section id="projects">
<h2 style="margin-bottom: 30px;"><span class="neon-cyan">//</span> {heading}</h2>
<div class="grid">
{cards}
</div>
</section>"#,
        heading = html::escape(&content.projects_heading),
    )
}

fn terminal_section(view: &PageView<'_>) -> String {
    let terminal = &view.content.terminal;
    let result = view.state.to_html(view.escape_output);
    let pending = QueryState::Pending.to_html(false);

    format!(
        r#"<section id="terminal" class="row">
<div class="col" style="flex: 1.5;">
<h3 class="neon-purple">{title}</h3>
<p style="font-family: JetBrains Mono; font-size: 0.9rem; color: #888;">{hint}</p>
<form method="get" action="/" onsubmit="document.getElementById('terminal-pending').hidden = false;">
<input class="terminal-input" type="text" name="q" autocomplete="off" aria-label="{hint}" placeholder="{placeholder}" value="{query}">
</form>
<div id="terminal-pending" hidden aria-label="{pending_label}">{pending}</div>
{result}
</div>
<div class="col" style="flex: 1;">
{panel}
</div>
</section>"#,
        title = html::escape(&terminal.title),
        hint = html::escape(&terminal.prompt_hint),
        placeholder = html::escape(&terminal.placeholder),
        query = html::escape(view.query),
        pending_label = PENDING_NOTICE,
        panel = view.panels.chat.to_html(),
    )
}

fn footer_section(content: &SiteContent) -> String {
    format!(r#"<footer class="footer">{}</footer>"#, content.footer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::FAILURE_NOTICE;

    fn unavailable_panels() -> PagePanels {
        PagePanels {
            hero: Panel::Unavailable { key: "hero".into() },
            about: Panel::Unavailable { key: "about".into() },
            chat: Panel::Unavailable { key: "chat".into() },
        }
    }

    fn render_with(query: &str, state: &QueryState) -> String {
        let content = SiteContent::default();
        let theme = Theme::default();
        let panels = unavailable_panels();
        render_page(&PageView {
            content: &content,
            theme: &theme,
            panels: &panels,
            query,
            state,
            escape_output: false,
        })
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let page = render_with("", &QueryState::Idle);
        let positions: Vec<usize> = [
            r#"id="hero""#,
            r#"id="about""#,
            r#"id="projects""#,
            r#"id="terminal""#,
            r#"class="footer""#,
        ]
        .iter()
        .map(|marker| page.find(marker).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_projects_rendered_as_cards() {
        let page = render_with("", &QueryState::Idle);
        assert!(page.contains("AIthentic: Deepfake Detector"));
        assert!(page.contains("Fuzzy Logic Search"));
        assert_eq!(page.matches(r#"<div class="neon-card">"#).count(), 5);
    }

    #[test]
    fn test_idle_renders_no_output_block() {
        let page = render_with("", &QueryState::Idle);
        assert!(!page.contains(r#"class="terminal-output""#));
        assert!(!page.contains(FAILURE_NOTICE));
    }

    #[test]
    fn test_query_is_escaped_in_input() {
        let page = render_with(r#""><script>x</script>"#, &QueryState::Failure);
        assert!(page.contains(r#"value="&quot;&gt;&lt;script&gt;x&lt;/script&gt;""#));
        assert!(page.contains(FAILURE_NOTICE));
    }

    #[test]
    fn test_pending_indicator_hidden_until_submit() {
        let page = render_with("", &QueryState::Idle);
        assert!(page.contains(r#"<div id="terminal-pending" hidden"#));
        assert!(page.contains("onsubmit="));
    }

    #[test]
    fn test_unavailable_panels_show_notice() {
        let page = render_with("", &QueryState::Idle);
        assert_eq!(
            page.matches(crate::animation::UNAVAILABLE_NOTICE).count(),
            3
        );
    }
}
