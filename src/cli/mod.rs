//! CLI subcommand infrastructure for shellansi.
//!
//! Provides subcommand definitions for producing escape sequences and
//! inspecting configuration.

use clap::{Args, Subcommand};

/// Available subcommands for shellansi.
#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Render(RenderCommand),

    /// Config file commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Subcommands that write escape sequences or measured text to stdout.
#[derive(Subcommand, Debug)]
pub enum RenderCommand {
    /// Render inline format tags and the first markdown link
    Format(TextArgs),

    /// Set the terminal window title
    Title(TextArgs),

    /// Report a working directory to the terminal
    Pwd(PwdArgs),

    /// Move the cursor down (positive) or up (negative) a number of lines
    Line(LineArgs),

    /// Move the cursor left to make room for right-aligned text
    RightWrite(RightWriteArgs),

    /// Push the cursor to the end of the line
    CarriageForward,

    /// Clear the rest of the line and the screen below
    ClearAfter,

    /// Remove escape sequences and zero-width markers from text
    Strip(TextArgs),

    /// Print the visible width of text in columns
    Width(TextArgs),

    /// List every escape template for the active shell
    Templates,
}

/// Arguments for subcommands taking a single text value.
#[derive(Args, Debug)]
pub struct TextArgs {
    /// Input text
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for the pwd subcommand.
#[derive(Args, Debug)]
pub struct PwdArgs {
    /// Directory to report
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Host name for OSC 7 reports (default: config, then $HOSTNAME)
    #[arg(long)]
    pub host: Option<String>,

    /// Reporting protocol: osc7 or osc99 (default: config, then osc99)
    #[arg(long)]
    pub protocol: Option<String>,
}

/// Arguments for the line subcommand.
#[derive(Args, Debug)]
pub struct LineArgs {
    /// Number of lines; negative moves up
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub lines: i64,
}

/// Arguments for the right-write subcommand.
#[derive(Args, Debug)]
pub struct RightWriteArgs {
    /// Visible length of the text to write
    #[arg(value_name = "LENGTH", allow_negative_numbers = true)]
    pub length: i64,

    /// Columns to keep free at the right edge
    #[arg(value_name = "OFFSET", default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i64,
}

/// Config subcommand actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the config file
    Validate,
    /// Show effective configuration
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    fn parse(args: &[&str]) -> Commands {
        TestCli::try_parse_from(std::iter::once("shellansi").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn test_render_commands_are_top_level() {
        match parse(&["line", "-2"]) {
            Commands::Render(RenderCommand::Line(args)) => assert_eq!(args.lines, -2),
            other => panic!("unexpected {:?}", other),
        }
        match parse(&["right-write", "2", "5"]) {
            Commands::Render(RenderCommand::RightWrite(args)) => {
                assert_eq!((args.length, args.offset), (2, 5))
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            parse(&["templates"]),
            Commands::Render(RenderCommand::Templates)
        ));
    }

    #[test]
    fn test_config_commands_are_not_render_commands() {
        assert!(matches!(
            parse(&["config", "validate"]),
            Commands::Config {
                action: ConfigAction::Validate
            }
        ));
    }
}
