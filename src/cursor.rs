//! Cursor movement, line changes and working-directory reporting.

use crate::escape::EscapeTable;

/// Columns to move right when pushing the cursor to the end of the line.
/// Terminals clamp at the right margin.
pub const CARRIAGE_FORWARD_COLUMNS: i64 = 1000;

/// Terminal convention for reporting the current directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PwdProtocol {
    /// `OSC 7 ; file://host/path`
    Osc7,
    /// `OSC 9 ; 9 ; "path"` (Windows Terminal, ConEmu)
    #[default]
    Osc99,
}

impl PwdProtocol {
    /// Names accepted by [`PwdProtocol::from_name`].
    pub const NAMES: [&'static str; 2] = ["osc7", "osc99"];

    /// `"osc7"` selects OSC 7; any other value selects OSC 99.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("osc7") {
            PwdProtocol::Osc7
        } else {
            PwdProtocol::Osc99
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PwdProtocol::Osc7 => "osc7",
            PwdProtocol::Osc99 => "osc99",
        }
    }
}

/// Move the cursor far enough right to land on the last column.
pub fn carriage_forward(table: &EscapeTable) -> String {
    table
        .cursor_right
        .fill(&[&CARRIAGE_FORWARD_COLUMNS.to_string()])
}

/// Move left from the end of the line so `length - offset` columns remain
/// for right-aligned text. A negative distance is emitted as is.
pub fn cursor_for_right_write(table: &EscapeTable, length: i64, offset: i64) -> String {
    let distance = length - offset;
    table.cursor_left.fill(&[&distance.to_string()])
}

/// Move down `lines` lines, or up when negative.
pub fn change_line(table: &EscapeTable, lines: i64) -> String {
    let direction = if lines < 0 { "F" } else { "B" };
    let magnitude = lines.unsigned_abs();
    table
        .line_change
        .fill(&[&magnitude.to_string(), direction])
}

/// Report `path` as the working directory.
///
/// A bare drive (`C:`) gets a trailing separator so terminals resolve it to
/// the drive root.
pub fn report_working_directory(
    table: &EscapeTable,
    protocol: PwdProtocol,
    host: &str,
    path: &str,
) -> String {
    let path = if path.ends_with(':') {
        format!("{}\\", path)
    } else {
        path.to_string()
    };
    match protocol {
        PwdProtocol::Osc7 => table.osc7.fill(&[host, &path]),
        PwdProtocol::Osc99 => table.osc99.fill(&[&path]),
    }
}

/// Clear the rest of the current line and everything below it.
pub fn clear_after(table: &EscapeTable) -> String {
    let mut out = table.clear_line.literal();
    out.push_str(&table.clear_below.literal());
    out
}

pub fn title(table: &EscapeTable, title: &str) -> String {
    table.title.fill(&[title])
}

pub fn color_reset(table: &EscapeTable) -> String {
    table.color_reset.literal()
}

pub fn save_cursor_position(table: &EscapeTable) -> String {
    table.save_cursor.literal()
}

pub fn restore_cursor_position(table: &EscapeTable) -> String {
    table.restore_cursor.literal()
}
