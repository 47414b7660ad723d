//! Escape-producing subcommands.

use colored::Colorize;
use shellansi::config::Config;
use shellansi::{AnsiFormatter, PwdProtocol};

use crate::cli::{PwdArgs, RenderCommand};

const SAMPLE_ARGS: [&str; 3] = ["<1>", "<2>", "<3>"];

/// Resolved settings for a single invocation.
pub struct RenderContext {
    pub formatter: AnsiFormatter,
    pub config: Config,
}

impl RenderContext {
    pub fn new(config: Config) -> Self {
        Self {
            formatter: config.formatter(),
            config,
        }
    }

    fn pwd(&self, args: &PwdArgs) -> String {
        let protocol = args
            .protocol
            .as_deref()
            .map(PwdProtocol::from_name)
            .unwrap_or_else(|| self.config.pwd_protocol_or_default());
        let host = args
            .host
            .clone()
            .or_else(|| self.config.host.clone())
            .or_else(|| std::env::var("HOSTNAME").ok())
            .unwrap_or_else(|| "localhost".to_string());
        self.formatter
            .report_working_directory(protocol, &host, &args.path)
    }

    fn templates(&self) -> String {
        let mut out = format!(
            "{} {}\n",
            "shell:".bold(),
            self.formatter.shell().to_string().green()
        );
        for (name, template) in self.formatter.table().templates() {
            let args = &SAMPLE_ARGS[..template.insertion_points().min(SAMPLE_ARGS.len())];
            out.push_str(&format!("{:>18} {:?}\n", name.cyan(), template.fill(args)));
        }
        out
    }

    /// Produce the output for `command`. Escape sequences carry no trailing newline.
    pub fn render(&self, command: &RenderCommand) -> String {
        let f = &self.formatter;
        match command {
            RenderCommand::Format(args) => f.format_text(&args.text),
            RenderCommand::Title(args) => f.title(&args.text),
            RenderCommand::Pwd(args) => self.pwd(args),
            RenderCommand::Line(args) => f.change_line(args.lines),
            RenderCommand::RightWrite(args) => f.cursor_for_right_write(args.length, args.offset),
            RenderCommand::CarriageForward => f.carriage_forward(),
            RenderCommand::ClearAfter => f.clear_after(),
            RenderCommand::Strip(args) => f.strip(&args.text),
            RenderCommand::Width(args) => format!("{}\n", f.width(&args.text)),
            RenderCommand::Templates => self.templates(),
        }
    }
}
