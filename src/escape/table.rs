use super::{EscapeTable, Template};

/// Build a table whose every sequence is wrapped in `$l ... $r`.
///
/// `$st` is the OSC string terminator as the shell must receive it, and
/// `$osc7_open` the part of the OSC 7 sequence between `ESC ] 7 ;` and the host.
macro_rules! escape_table {
    (
        left: $l:literal,
        right: $r:literal,
        st: $st:literal,
        osc7_open: $osc7_open:literal,
        hyperlink_pattern: $pattern:literal $(,)?
    ) => {
        EscapeTable {
            escape_left: $l,
            escape_right: $r,
            invisible: Template::new(&[$l, $r]),
            title: Template::new(&[concat!($l, "\x1b]0;"), concat!("\x07", $r)]),
            line_change: Template::new(&[concat!($l, "\x1b["), "", $r]),
            cursor_right: Template::new(&[concat!($l, "\x1b["), concat!("C", $r)]),
            cursor_left: Template::new(&[concat!($l, "\x1b["), concat!("D", $r)]),
            color_reset: Template::new(&[concat!($l, "\x1b[0m", $r)]),
            clear_below: Template::new(&[concat!($l, "\x1b[0J", $r)]),
            clear_line: Template::new(&[concat!($l, "\x1b[K", $r)]),
            save_cursor: Template::new(&[concat!($l, "\x1b7", $r)]),
            restore_cursor: Template::new(&[concat!($l, "\x1b8", $r)]),
            color_single: Template::new(&[
                concat!($l, "\x1b["),
                concat!("m", $r),
                concat!($l, "\x1b[0m", $r),
            ]),
            color_full: Template::new(&[
                concat!($l, "\x1b["),
                "m\x1b[",
                concat!("m", $r),
                concat!($l, "\x1b[0m", $r),
            ]),
            color_transparent: Template::new(&[
                concat!($l, "\x1b["),
                concat!(";49m\x1b[7m", $r),
                concat!($l, "\x1b[0m", $r),
            ]),
            hyperlink: Template::new(&[
                concat!($l, "\x1b]8;;"),
                concat!($st, $r),
                concat!($l, "\x1b]8;;", $st, $r),
            ]),
            osc99: Template::new(&[concat!($l, "\x1b]9;9;\""), concat!("\"", $st, $r)]),
            osc7: Template::new(&[
                concat!($l, "\x1b]7;", $osc7_open),
                "/",
                concat!("\"", $st, $r),
            ]),
            bold: Template::new(&[concat!($l, "\x1b[1m", $r), concat!($l, "\x1b[22m", $r)]),
            italic: Template::new(&[concat!($l, "\x1b[3m", $r), concat!($l, "\x1b[23m", $r)]),
            underline: Template::new(&[concat!($l, "\x1b[4m", $r), concat!($l, "\x1b[24m", $r)]),
            overline: Template::new(&[concat!($l, "\x1b[53m", $r), concat!($l, "\x1b[55m", $r)]),
            blink: Template::new(&[concat!($l, "\x1b[5m", $r), concat!($l, "\x1b[25m", $r)]),
            reverse: Template::new(&[concat!($l, "\x1b[7m", $r), concat!($l, "\x1b[27m", $r)]),
            dimmed: Template::new(&[concat!($l, "\x1b[2m", $r), concat!($l, "\x1b[22m", $r)]),
            strikethrough: Template::new(&[
                concat!($l, "\x1b[9m", $r),
                concat!($l, "\x1b[29m", $r),
            ]),
            hyperlink_pattern: $pattern,
        }
    };
}

pub(super) static PLAIN: EscapeTable = escape_table! {
    left: "",
    right: "",
    st: "\x1b\\",
    osc7_open: "\"file://",
    // A doubled terminator backslash is tolerated so bash output that went
    // through a plain stripper is still recognized.
    hyperlink_pattern: r"(?P<STR>\x1b\]8;;(?P<URL>.+?)\x1b\\\\?(?P<TEXT>.+?)\x1b\]8;;\x1b\\\\?)",
};

pub(super) static BASH: EscapeTable = escape_table! {
    left: "\x01",
    right: "\x02",
    st: "\x1b\\\\",
    osc7_open: "\"file://",
    hyperlink_pattern: r"(?P<STR>\x01\x1b\]8;;(?P<URL>.+?)\x1b\\\\\x02(?P<TEXT>.+?)\x01\x1b\]8;;\x1b\\\\\x02)",
};

pub(super) static ZSH: EscapeTable = escape_table! {
    left: "%{",
    right: "%}",
    st: "\x1b\\",
    osc7_open: "file:\"//",
    hyperlink_pattern: r"(?P<STR>%\{\x1b\]8;;(?P<URL>.+?)\x1b\\%\}(?P<TEXT>.+?)%\{\x1b\]8;;\x1b\\%\})",
};
