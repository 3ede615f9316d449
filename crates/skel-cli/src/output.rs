//! Human-facing status lines on stdout.

use std::io;

use console::Term;
use owo_colors::{OwoColorize, Style};

use crate::{cli::GlobalArgs, config::AppConfig};

#[derive(Debug, Clone, Copy)]
enum Tone {
    Success,
    Warning,
    Info,
}

impl Tone {
    fn glyph(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Warning => "\u{26a0}",
            Self::Info => "\u{2139}",
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Success => Style::new().green(),
            Self::Warning => Style::new().yellow(),
            Self::Info => Style::new().blue(),
        }
    }
}

pub struct OutputManager {
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            color: args.color(config),
            term: Term::stdout(),
        }
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(msg.to_owned())
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(self.status(Tone::Success, msg))
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(self.status(Tone::Warning, msg))
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(self.status(Tone::Info, msg))
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        let line = if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_owned()
        };
        self.emit(line)
    }

    /// Machine-readable output (JSON, config values). Ignores `--quiet`.
    pub fn data(&self, payload: &str) -> io::Result<()> {
        self.term.write_line(payload)
    }

    fn emit(&self, line: String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&line)
    }

    fn status(&self, tone: Tone, msg: &str) -> String {
        if !self.color {
            return format!("{} {msg}", tone.glyph());
        }
        format!(
            "{} {}",
            tone.glyph().style(tone.style().bold()),
            msg.style(tone.style())
        )
    }
}
