// Library interface for shellansi
// Exposes the formatting engine for prompt renderers and the CLI binary

pub mod ansi;
pub mod config;
pub mod cursor;
pub mod escape;
pub mod formatter;
pub mod hyperlink;
pub mod markup;
pub mod shell;

pub use cursor::PwdProtocol;
pub use escape::{EscapeTable, EscapeTemplateProvider, Template};
pub use formatter::AnsiFormatter;
pub use shell::ShellKind;
