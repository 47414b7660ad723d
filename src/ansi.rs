use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

use crate::escape::EscapeTable;
use crate::shell::ShellKind;

/// ANSI escape sequences:
/// - CSI sequences: ESC [ ... (params) final_byte  (colors, cursor movement, etc.;
///   params may be negative, as in `ESC[-3D`)
/// - OSC sequences: ESC ] ... ST  (hyperlinks, titles, cwd reports; ST may carry
///   bash's doubled backslash)
/// - Character set designators: ESC ( B, ESC ) 0, etc.
/// - Cursor save/restore: ESC 7, ESC 8
/// - Simple two-byte escapes: ESC =, ESC >, ESC M, etc.
const ANSI_PATTERN: &str = concat!(
    r"\x1b\[[\-0-?]*[ -/]*[@-~]",
    r"|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\\\?)",
    r"|\x1b[()][A-Z0-9]",
    r"|\x1b[78]",
    r"|\x1b[^\[\]()0-9]",
);

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ANSI_PATTERN).expect("ANSI regex must compile"));

/// Marker pairs wrapping only escape sequences, keyed by the left marker.
/// Markers around anything else are left for the caller to see.
static MARKED_RES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [ShellKind::Bash, ShellKind::Zsh]
        .iter()
        .map(|shell| {
            let table = EscapeTable::for_shell(*shell);
            let pattern = format!(
                "{}(?:{})*{}",
                regex::escape(table.escape_left),
                ANSI_PATTERN,
                regex::escape(table.escape_right)
            );
            let re = Regex::new(&pattern).expect("marker pattern must compile");
            (table.escape_left, re)
        })
        .collect()
});

/// Compiled hyperlink recognizers, one per distinct escape table.
static HYPERLINK_RES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [ShellKind::Plain, ShellKind::Bash, ShellKind::Zsh]
        .iter()
        .map(|shell| {
            let pattern = EscapeTable::for_shell(*shell).hyperlink_pattern;
            let re = Regex::new(pattern).expect("hyperlink pattern must compile");
            (pattern, re)
        })
        .collect()
});

fn marked_regex(table: &EscapeTable) -> Option<&'static Regex> {
    if table.escape_left.is_empty() {
        return None;
    }
    MARKED_RES
        .iter()
        .find(|(left, _)| *left == table.escape_left)
        .map(|(_, re)| re)
}

fn hyperlink_regex(table: &EscapeTable) -> Option<&'static Regex> {
    HYPERLINK_RES
        .iter()
        .find(|(pattern, _)| *pattern == table.hyperlink_pattern)
        .map(|(_, re)| re)
}

/// Strip all ANSI escape sequences from a string.
pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Reduce shell output back to the text a user sees.
///
/// Hyperlinks collapse to their link text and escape sequences are dropped
/// together with the zero-width markers around them. Printable markers that
/// wrap ordinary text (a literal `%{` under zsh) are kept.
pub fn strip_escapes(text: &str, table: &EscapeTable) -> String {
    let unlinked = match hyperlink_regex(table) {
        Some(re) => re.replace_all(text, "$TEXT").into_owned(),
        None => text.to_string(),
    };
    let unmarked = match marked_regex(table) {
        Some(re) => re.replace_all(&unlinked, "").into_owned(),
        None => unlinked,
    };
    let mut plain = strip_ansi(&unmarked);
    // Control-byte markers are never visible text.
    for marker in [table.escape_left, table.escape_right] {
        if !marker.is_empty() && marker.chars().all(char::is_control) {
            plain = plain.replace(marker, "");
        }
    }
    plain
}

/// Terminal columns taken by `text` once escapes are removed.
pub fn visible_width(text: &str, table: &EscapeTable) -> usize {
    strip_escapes(text, table).width()
}
