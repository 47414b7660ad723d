//! Inline format tags: `<b>bold</b>`, `<u>underline</u>` and friends.
//!
//! Tags are resolved innermost-first. Each pass replaces every tag whose inner
//! text holds no `<`; nested tags become matchable once their children have
//! been expanded. Expansions never contain a tag, so every pass strictly
//! reduces the number of tags left.

use regex::Regex;
use std::sync::LazyLock;

use crate::escape::{EscapeTable, Template};

/// Upper bound on resolution passes; deeper nesting is left partially resolved.
pub const MAX_PASSES: usize = 16;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(?P<open>[buisrdfo])>(?P<text>[^<]+)</(?P<close>[buisrdfo])>")
        .expect("format tag regex must compile")
});

/// Style selected by a single-letter tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Bold,
    Underline,
    Overline,
    Italic,
    Strikethrough,
    Dimmed,
    Blink,
    Reverse,
}

impl FormatKind {
    pub const ALL: [FormatKind; 8] = [
        FormatKind::Bold,
        FormatKind::Underline,
        FormatKind::Overline,
        FormatKind::Italic,
        FormatKind::Strikethrough,
        FormatKind::Dimmed,
        FormatKind::Blink,
        FormatKind::Reverse,
    ];

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'b' => Some(FormatKind::Bold),
            'u' => Some(FormatKind::Underline),
            'o' => Some(FormatKind::Overline),
            'i' => Some(FormatKind::Italic),
            's' => Some(FormatKind::Strikethrough),
            'd' => Some(FormatKind::Dimmed),
            'f' => Some(FormatKind::Blink),
            'r' => Some(FormatKind::Reverse),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            FormatKind::Bold => 'b',
            FormatKind::Underline => 'u',
            FormatKind::Overline => 'o',
            FormatKind::Italic => 'i',
            FormatKind::Strikethrough => 's',
            FormatKind::Dimmed => 'd',
            FormatKind::Blink => 'f',
            FormatKind::Reverse => 'r',
        }
    }

    pub fn template<'a>(&self, table: &'a EscapeTable) -> &'a Template {
        match self {
            FormatKind::Bold => &table.bold,
            FormatKind::Underline => &table.underline,
            FormatKind::Overline => &table.overline,
            FormatKind::Italic => &table.italic,
            FormatKind::Strikethrough => &table.strikethrough,
            FormatKind::Dimmed => &table.dimmed,
            FormatKind::Blink => &table.blink,
            FormatKind::Reverse => &table.reverse,
        }
    }
}

/// One parsed `<f>text</f>` span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTag<'t> {
    pub kind: FormatKind,
    pub inner: &'t str,
}

fn first_char(s: &str) -> Option<char> {
    s.chars().next()
}

/// Run a single pass. Returns the rewritten text and how many tags were replaced.
///
/// Spans whose closing letter differs from the opening one are left untouched.
pub fn resolve_pass(text: &str, table: &EscapeTable) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut replaced = 0;

    for caps in TAG_RE.captures_iter(text) {
        let (Some(whole), Some(open), Some(close), Some(inner)) = (
            caps.get(0),
            caps.name("open"),
            caps.name("close"),
            caps.name("text"),
        ) else {
            continue;
        };
        if open.as_str() != close.as_str() {
            continue;
        }
        let Some(kind) = first_char(open.as_str()).and_then(FormatKind::from_code) else {
            continue;
        };
        let tag = FormatTag {
            kind,
            inner: inner.as_str(),
        };
        out.push_str(&text[last..whole.start()]);
        out.push_str(&tag.kind.template(table).fill(&[tag.inner]));
        last = whole.end();
        replaced += 1;
    }

    out.push_str(&text[last..]);
    (out, replaced)
}

/// Expand every format tag in `text` until none are left.
///
/// Malformed or mismatched tags pass through as literal text.
pub fn resolve_formatting(text: &str, table: &EscapeTable) -> String {
    let mut current = text.to_string();
    for _ in 0..MAX_PASSES {
        let (next, replaced) = resolve_pass(&current, table);
        if replaced == 0 {
            return next;
        }
        current = next;
    }
    if TAG_RE.is_match(&current) {
        tracing::warn!(
            max_passes = MAX_PASSES,
            "format tags nested too deeply, leaving remainder unresolved"
        );
    }
    current
}
