//! Markup escaping helpers.

/// Escape text for use inside HTML element content or a quoted attribute.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Make serialized JSON safe to inline inside a `<script>` element.
///
/// Every `<` becomes `\u003c`. JSON only allows `<` inside strings, so the
/// result is equivalent JSON and never opens or closes a tag.
pub fn script_safe_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}
