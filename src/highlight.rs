//! Regex-based syntax classification for JSON previews
//!
//! Escapes the text for embedding in HTML, then wraps each JSON token in a
//! `<span class="...">` element. Classification order is the authoritative
//! tie-break where patterns overlap: a quoted token followed by a colon is a
//! key; any other quoted token is a string; bare `true`/`false` and `null`
//! are literal matches; the numeric pattern is the fallback.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Matches one JSON token: a quoted string (optionally followed by a colon,
/// making it an object key), a bare literal, or a number.
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#""(\\u[a-zA-Z0-9]{4}|\\[^u]|[^\\"])*"(\s*:)?|\b(true|false|null)\b|-?\d+(?:\.\d*)?(?:[eE][+-]?\d+)?"#,
    )
    .expect("Failed to compile JSON token regex")
});

/// Token classes assigned by the highlighter, in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Key,
    Str,
    Boolean,
    Null,
    Number,
}

impl TokenClass {
    /// Classify a matched token. Quoted tokens ending in a colon are keys,
    /// other quoted tokens are strings, bare literals match exactly, and
    /// everything else the pattern accepts is a number.
    pub fn classify(token: &str) -> Self {
        if token.starts_with('"') {
            if token.ends_with(':') {
                TokenClass::Key
            } else {
                TokenClass::Str
            }
        } else if token == "true" || token == "false" {
            TokenClass::Boolean
        } else if token == "null" {
            TokenClass::Null
        } else {
            TokenClass::Number
        }
    }

    /// CSS class name used in the rendered markup
    pub fn css_class(&self) -> &'static str {
        match self {
            TokenClass::Key => "key",
            TokenClass::Str => "string",
            TokenClass::Boolean => "boolean",
            TokenClass::Null => "null",
            TokenClass::Number => "number",
        }
    }
}

/// Escape text for embedding in an HTML fragment
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape JSON text and wrap each token in classification markup
pub fn syntax_highlight(json: &str) -> String {
    let escaped = escape_html(json);
    TOKEN_REGEX
        .replace_all(&escaped, |caps: &Captures| {
            let token = &caps[0];
            format!(
                "<span class=\"{}\">{}</span>",
                TokenClass::classify(token).css_class(),
                token
            )
        })
        .into_owned()
}
