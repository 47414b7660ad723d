//! Markdown-style `[text](url)` links rendered as OSC 8 hyperlinks.

use regex::Regex;
use std::sync::LazyLock;

use crate::escape::EscapeTemplateProvider;
use crate::shell::ShellKind;

// Link text runs up to the first unescaped `]`.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?P<text>(?:\\.|[^\]\\])+)\]\((?P<url>[^)]*)\)")
        .expect("hyperlink regex must compile")
});

/// Characters fish would interpret when they start a link's text.
pub const FISH_ESCAPED: [char; 33] = [
    'c', 'a', 'b', 'e', 'f', 'n', 'r', 't', 'v', '$', '*', '?', '~', '%', '#', '(', ')', '{',
    '}', '[', ']', '<', '>', '^', '&', ';', '"', '\'', 'x', 'X', '0', 'u', 'U',
];

/// Escaped form of `c` for fish, or `None` when it needs no escaping.
pub fn fish_escape(c: char) -> Option<&'static str> {
    let escaped = match c {
        'c' => r"\c",
        'a' => r"\a",
        'b' => r"\b",
        'e' => r"\e",
        'f' => r"\f",
        'n' => r"\n",
        'r' => r"\r",
        't' => r"\t",
        'v' => r"\v",
        '$' => r"\$",
        '*' => r"\*",
        '?' => r"\?",
        '~' => r"\~",
        '%' => r"\%",
        '#' => r"\#",
        '(' => r"\(",
        ')' => r"\)",
        '{' => r"\{",
        '}' => r"\}",
        '[' => r"\[",
        ']' => r"\]",
        '<' => r"\<",
        '>' => r"\>",
        '^' => r"\^",
        '&' => r"\&",
        ';' => r"\;",
        '"' => r#"\""#,
        '\'' => r"\'",
        'x' => r"\x",
        'X' => r"\X",
        '0' => r"\0",
        'u' => r"\u",
        'U' => r"\U",
        _ => return None,
    };
    Some(escaped)
}

/// A single `[text](url)` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyperlinkMatch<'t> {
    /// The whole `[text](url)` span.
    pub full: &'t str,
    pub text: &'t str,
    pub url: &'t str,
    /// Byte offset of `full` within the searched text.
    pub start: usize,
}

impl<'t> HyperlinkMatch<'t> {
    /// First link in `haystack`, if any.
    pub fn find(haystack: &'t str) -> Option<Self> {
        let caps = LINK_RE.captures(haystack)?;
        let full = caps.get(0)?;
        Some(Self {
            full: full.as_str(),
            text: caps.name("text")?.as_str(),
            url: caps.name("url")?.as_str(),
            start: full.start(),
        })
    }
}

/// Escape the first character of `text` when the shell needs it. The rest of
/// the text is left as is.
pub fn escape_link_text(text: &str, shell: ShellKind) -> String {
    if !shell.escapes_link_text() {
        return text.to_string();
    }
    let mut chars = text.chars();
    match chars.next().and_then(fish_escape) {
        Some(escaped) => format!("{}{}", escaped, chars.as_str()),
        None => text.to_string(),
    }
}

/// Replace the first `[text](url)` in `text` with a terminal hyperlink.
///
/// Text without a link is returned unchanged. Later links, even identical
/// ones, are not touched.
pub fn build_hyperlink(text: &str, shell: ShellKind) -> String {
    let Some(link) = HyperlinkMatch::find(text) else {
        return text.to_string();
    };
    let link_text = escape_link_text(link.text, shell);
    let rendered = shell.table().hyperlink.fill(&[link.url, &link_text]);

    let end = link.start + link.full.len();
    let mut out = String::with_capacity(text.len() + rendered.len());
    out.push_str(&text[..link.start]);
    out.push_str(&rendered);
    out.push_str(&text[end..]);
    out
}
