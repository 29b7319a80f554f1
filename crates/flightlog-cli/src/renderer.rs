//! Terminal rendering of flight log replies
//!
//! Replies are markdown. With color enabled they are styled through
//! termimad; otherwise the markdown is printed as is.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Prints replies to the terminal, rich or plain
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render a markdown reply to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();

        if self.rich_enabled {
            for line in markdown.lines() {
                if let Some(title) = line.strip_prefix("## ") {
                    // card titles keep their color without the hash marks
                    writeln!(out, "\x1b[32;1m{title}\x1b[0m")?;
                } else {
                    writeln!(out, "{}", self.skin.inline(line))?;
                }
            }
        } else {
            write!(out, "{markdown}")?;
        }

        out.flush()?;
        Ok(())
    }

    /// Render an error reply to stderr, always plain.
    pub fn render_error(&self, message: &str) {
        eprint!("{message}");
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
