//! Shell-bound entry point tying the escape table to every formatting helper.

use crate::ansi;
use crate::cursor::{self, PwdProtocol};
use crate::escape::{EscapeTable, EscapeTemplateProvider};
use crate::hyperlink;
use crate::markup;
use crate::shell::ShellKind;

/// Produces escape sequences for one shell.
///
/// Immutable after construction and `Copy`; share it freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct AnsiFormatter {
    shell: ShellKind,
    table: &'static EscapeTable,
}

impl AnsiFormatter {
    pub fn new(shell: ShellKind) -> Self {
        Self {
            shell,
            table: shell.table(),
        }
    }

    /// Formatter for output that needs no zero-width markers.
    pub fn plain() -> Self {
        Self::new(ShellKind::Plain)
    }

    pub fn shell(&self) -> ShellKind {
        self.shell
    }

    pub fn table(&self) -> &'static EscapeTable {
        self.table
    }

    /// Render the first markdown link, then resolve inline format tags.
    pub fn format_text(&self, text: &str) -> String {
        let linked = self.build_hyperlink(text);
        self.resolve_formatting(&linked)
    }

    pub fn resolve_formatting(&self, text: &str) -> String {
        markup::resolve_formatting(text, self.table)
    }

    pub fn build_hyperlink(&self, text: &str) -> String {
        hyperlink::build_hyperlink(text, self.shell)
    }

    /// Wrap `text` in the shell's zero-width markers.
    pub fn invisible(&self, text: &str) -> String {
        self.table.invisible.fill(&[text])
    }

    /// Foreground or background color around `text`, then reset.
    pub fn colorize(&self, color: &str, text: &str) -> String {
        self.table.color_single.fill(&[color, text])
    }

    pub fn colorize_full(&self, background: &str, foreground: &str, text: &str) -> String {
        self.table.color_full.fill(&[background, foreground, text])
    }

    /// `color` drawn as a reversed overlay on the default background.
    pub fn transparent(&self, color: &str, text: &str) -> String {
        self.table.color_transparent.fill(&[color, text])
    }

    pub fn carriage_forward(&self) -> String {
        cursor::carriage_forward(self.table)
    }

    pub fn cursor_for_right_write(&self, length: i64, offset: i64) -> String {
        cursor::cursor_for_right_write(self.table, length, offset)
    }

    pub fn change_line(&self, lines: i64) -> String {
        cursor::change_line(self.table, lines)
    }

    pub fn report_working_directory(
        &self,
        protocol: PwdProtocol,
        host: &str,
        path: &str,
    ) -> String {
        cursor::report_working_directory(self.table, protocol, host, path)
    }

    pub fn clear_after(&self) -> String {
        cursor::clear_after(self.table)
    }

    pub fn title(&self, title: &str) -> String {
        cursor::title(self.table, title)
    }

    pub fn color_reset(&self) -> String {
        cursor::color_reset(self.table)
    }

    pub fn save_cursor_position(&self) -> String {
        cursor::save_cursor_position(self.table)
    }

    pub fn restore_cursor_position(&self) -> String {
        cursor::restore_cursor_position(self.table)
    }

    /// Remove every escape this formatter can produce.
    pub fn strip(&self, text: &str) -> String {
        ansi::strip_escapes(text, self.table)
    }

    pub fn width(&self, text: &str) -> usize {
        ansi::visible_width(text, self.table)
    }
}

impl Default for AnsiFormatter {
    fn default() -> Self {
        Self::plain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_format_text_resolves_tags_and_link() {
        let f = AnsiFormatter::new(ShellKind::Zsh);
        let out = f.format_text("<b>[repo](https://x.y)</b>");
        assert_eq!(
            out,
            "%{\x1b[1m%}%{\x1b]8;;https://x.y\x1b\\%}repo%{\x1b]8;;\x1b\\%}%{\x1b[22m%}"
        );
        assert_eq!(f.strip(&out), "repo");
    }

    #[test]
    fn test_fish_formatter_escapes_link_text() {
        let f = AnsiFormatter::new(ShellKind::Fish);
        let out = f.format_text("[$cost](https://x)");
        assert_eq!(out, "\x1b]8;;https://x\x1b\\\\$cost\x1b]8;;\x1b\\");
    }

    #[test]
    fn test_invisible() {
        assert_eq!(AnsiFormatter::new(ShellKind::Bash).invisible("x"), "\x01x\x02");
        assert_eq!(AnsiFormatter::new(ShellKind::Zsh).invisible("x"), "%{x%}");
        assert_eq!(AnsiFormatter::plain().invisible("x"), "x");
    }

    #[test]
    fn test_colorize_variants() {
        let f = AnsiFormatter::new(ShellKind::Bash);
        assert_eq!(f.colorize("38;5;1", "x"), "\x01\x1b[38;5;1m\x02x\x01\x1b[0m\x02");
        assert_eq!(
            f.colorize_full("44", "31", "x"),
            "\x01\x1b[44m\x1b[31m\x02x\x01\x1b[0m\x02"
        );
        assert_eq!(
            f.transparent("34", "x"),
            "\x01\x1b[34;49m\x1b[7m\x02x\x01\x1b[0m\x02"
        );
    }

    #[test]
    fn test_width_ignores_escapes() {
        let f = AnsiFormatter::new(ShellKind::Zsh);
        let out = f.colorize("31", &f.format_text("<u>abc</u>"));
        assert_eq!(f.width(&out), 3);
    }

    #[test]
    fn test_default_is_plain() {
        assert_eq!(AnsiFormatter::default().shell(), ShellKind::Plain);
    }

    #[test]
    fn test_shared_across_threads() {
        let f = Arc::new(AnsiFormatter::new(ShellKind::Bash));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let f = Arc::clone(&f);
                thread::spawn(move || f.change_line(i))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("\x01\x1b[{}B\x02", i));
        }
    }
}
