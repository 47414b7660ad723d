//! Escape templates for every supported shell.
//!
//! A [`Template`] is a list of literal pieces with an insertion point between
//! each pair. An [`EscapeTable`] holds one template per terminal operation and
//! is picked once per [`ShellKind`]; it is never mutated afterwards.

mod table;

use crate::shell::ShellKind;

/// Literal pieces with `pieces.len() - 1` insertion points between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pieces: &'static [&'static str],
}

impl Template {
    pub const fn new(pieces: &'static [&'static str]) -> Self {
        Self { pieces }
    }

    /// Number of arguments [`Template::fill`] expects.
    pub fn insertion_points(&self) -> usize {
        self.pieces.len().saturating_sub(1)
    }

    /// Interleave `args` between the literal pieces.
    ///
    /// Arguments are copied verbatim and never re-scanned. Missing arguments
    /// render as empty, extra arguments are ignored.
    pub fn fill(&self, args: &[&str]) -> String {
        let capacity = self.pieces.iter().map(|p| p.len()).sum::<usize>()
            + args.iter().map(|a| a.len()).sum::<usize>();
        let mut out = String::with_capacity(capacity);
        for (i, piece) in self.pieces.iter().enumerate() {
            if i > 0 {
                out.push_str(args.get(i - 1).copied().unwrap_or(""));
            }
            out.push_str(piece);
        }
        out
    }

    /// The template with no arguments substituted.
    pub fn literal(&self) -> String {
        self.pieces.concat()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.iter().all(|p| p.is_empty())
    }
}

/// One template per terminal operation, for a single shell.
#[derive(Debug, PartialEq, Eq)]
pub struct EscapeTable {
    /// Start of a zero-width region (`\x01` for bash, `%{` for zsh).
    pub escape_left: &'static str,
    /// End of a zero-width region.
    pub escape_right: &'static str,
    /// Wraps arbitrary text in the zero-width markers.
    pub invisible: Template,
    pub title: Template,
    /// Arguments: line count, direction letter (`B` down, `F` up).
    pub line_change: Template,
    pub cursor_right: Template,
    pub cursor_left: Template,
    pub color_reset: Template,
    pub clear_below: Template,
    pub clear_line: Template,
    pub save_cursor: Template,
    pub restore_cursor: Template,
    /// Arguments: SGR color parameters, text.
    pub color_single: Template,
    /// Arguments: background SGR, foreground SGR, text.
    pub color_full: Template,
    /// Arguments: SGR color parameters, text. Draws the color as a reversed overlay.
    pub color_transparent: Template,
    /// Arguments: url, link text.
    pub hyperlink: Template,
    /// Arguments: path.
    pub osc99: Template,
    /// Arguments: host, path.
    pub osc7: Template,
    pub bold: Template,
    pub italic: Template,
    pub underline: Template,
    pub overline: Template,
    pub blink: Template,
    pub reverse: Template,
    pub dimmed: Template,
    pub strikethrough: Template,
    /// Regex recognizing a hyperlink produced by `hyperlink`, with `TEXT` and
    /// `URL` named groups.
    pub hyperlink_pattern: &'static str,
}

impl EscapeTable {
    /// The table for `shell`. Fish shares the plain table.
    pub fn for_shell(shell: ShellKind) -> &'static EscapeTable {
        match shell {
            ShellKind::Zsh => &table::ZSH,
            ShellKind::Bash => &table::BASH,
            ShellKind::Fish | ShellKind::Plain => &table::PLAIN,
        }
    }

    /// Every template with its operation name, in declaration order.
    pub fn templates(&self) -> [(&'static str, &Template); 24] {
        [
            ("invisible", &self.invisible),
            ("title", &self.title),
            ("line_change", &self.line_change),
            ("cursor_right", &self.cursor_right),
            ("cursor_left", &self.cursor_left),
            ("color_reset", &self.color_reset),
            ("clear_below", &self.clear_below),
            ("clear_line", &self.clear_line),
            ("save_cursor", &self.save_cursor),
            ("restore_cursor", &self.restore_cursor),
            ("color_single", &self.color_single),
            ("color_full", &self.color_full),
            ("color_transparent", &self.color_transparent),
            ("hyperlink", &self.hyperlink),
            ("osc99", &self.osc99),
            ("osc7", &self.osc7),
            ("bold", &self.bold),
            ("italic", &self.italic),
            ("underline", &self.underline),
            ("overline", &self.overline),
            ("blink", &self.blink),
            ("reverse", &self.reverse),
            ("dimmed", &self.dimmed),
            ("strikethrough", &self.strikethrough),
        ]
    }
}

/// Source of the escape table used by the formatting functions.
pub trait EscapeTemplateProvider {
    fn table(&self) -> &'static EscapeTable;
}

impl EscapeTemplateProvider for ShellKind {
    fn table(&self) -> &'static EscapeTable {
        EscapeTable::for_shell(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SHELLS: [ShellKind; 4] = [
        ShellKind::Zsh,
        ShellKind::Bash,
        ShellKind::Fish,
        ShellKind::Plain,
    ];

    #[test]
    fn test_fill_interleaves_arguments() {
        let t = Template::new(&["<", "|", ">"]);
        assert_eq!(t.insertion_points(), 2);
        assert_eq!(t.fill(&["a", "b"]), "<a|b>");
    }

    #[test]
    fn test_fill_does_not_rescan_arguments() {
        let t = Template::new(&["[", "]"]);
        assert_eq!(t.fill(&["%{x%}"]), "[%{x%}]");
    }

    #[test]
    fn test_fill_missing_arguments_render_empty() {
        let t = Template::new(&["a", "b", "c"]);
        assert_eq!(t.fill(&["1"]), "a1bc");
    }

    #[test]
    fn test_every_template_is_non_empty_for_every_shell() {
        for shell in ALL_SHELLS {
            let table = EscapeTable::for_shell(shell);
            for (name, template) in table.templates() {
                // Plain output has no zero-width markers to wrap with.
                if name == "invisible" && table.escape_left.is_empty() {
                    continue;
                }
                assert!(!template.is_empty(), "{} template empty for {}", name, shell);
            }
            assert!(!table.hyperlink_pattern.is_empty());
        }
    }

    #[test]
    fn test_fish_uses_plain_table() {
        assert_eq!(
            EscapeTable::for_shell(ShellKind::Fish),
            EscapeTable::for_shell(ShellKind::Plain)
        );
    }

    #[test]
    fn test_plain_has_no_markers() {
        let table = EscapeTable::for_shell(ShellKind::Plain);
        assert_eq!(table.escape_left, "");
        assert_eq!(table.escape_right, "");
        assert_eq!(table.bold.fill(&["x"]), "\x1b[1mx\x1b[22m");
    }

    #[test]
    fn test_bash_wraps_every_sequence() {
        let table = EscapeTable::for_shell(ShellKind::Bash);
        assert_eq!(table.escape_left, "\x01");
        assert_eq!(table.escape_right, "\x02");
        assert_eq!(table.color_reset.literal(), "\x01\x1b[0m\x02");
        assert_eq!(
            table.bold.fill(&["x"]),
            "\x01\x1b[1m\x02x\x01\x1b[22m\x02"
        );
    }

    #[test]
    fn test_bash_doubles_string_terminator_backslash() {
        let table = EscapeTable::for_shell(ShellKind::Bash);
        assert_eq!(table.osc99.fill(&["/tmp"]), "\x01\x1b]9;9;\"/tmp\"\x1b\\\\\x02");
    }

    #[test]
    fn test_zsh_wraps_every_sequence() {
        let table = EscapeTable::for_shell(ShellKind::Zsh);
        assert_eq!(table.escape_left, "%{");
        assert_eq!(table.escape_right, "%}");
        assert_eq!(table.clear_line.literal(), "%{\x1b[K%}");
        assert_eq!(
            table.underline.fill(&["x"]),
            "%{\x1b[4m%}x%{\x1b[24m%}"
        );
    }

    #[test]
    fn test_zsh_osc7_quotes_after_scheme() {
        let table = EscapeTable::for_shell(ShellKind::Zsh);
        assert_eq!(
            table.osc7.fill(&["host", "/home/x"]),
            "%{\x1b]7;file:\"//host//home/x\"\x1b\\%}"
        );
        let plain = EscapeTable::for_shell(ShellKind::Plain);
        assert_eq!(
            plain.osc7.fill(&["host", "/home/x"]),
            "\x1b]7;\"file://host//home/x\"\x1b\\"
        );
    }

    #[test]
    fn test_color_templates() {
        let table = EscapeTable::for_shell(ShellKind::Plain);
        assert_eq!(table.color_single.fill(&["31", "x"]), "\x1b[31mx\x1b[0m");
        assert_eq!(
            table.color_full.fill(&["44", "31", "x"]),
            "\x1b[44m\x1b[31mx\x1b[0m"
        );
        assert_eq!(
            table.color_transparent.fill(&["34", "x"]),
            "\x1b[34;49m\x1b[7mx\x1b[0m"
        );
    }

    #[test]
    fn test_hyperlink_patterns_compile() {
        for shell in ALL_SHELLS {
            let table = EscapeTable::for_shell(shell);
            let re = regex::Regex::new(table.hyperlink_pattern).unwrap();
            let link = table.hyperlink.fill(&["https://example.com", "site"]);
            let caps = re.captures(&link).expect("emitted hyperlink should match");
            assert_eq!(&caps["TEXT"], "site");
            assert_eq!(&caps["URL"], "https://example.com");
        }
    }

    #[test]
    fn test_provider_matches_for_shell() {
        for shell in ALL_SHELLS {
            assert!(std::ptr::eq(shell.table(), EscapeTable::for_shell(shell)));
        }
    }
}
