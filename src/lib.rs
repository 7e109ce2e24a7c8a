use anstyle::{AnsiColor, Color, Style};
use anyhow::{Context, Result};
use log::debug;
use std::{io::Write, process::ExitStatus};

mod command;
pub use command::shell;

mod terminal;
pub use terminal::{AnsiTerminal, Terminal};

pub const WINDOW_TITLE: &str = "KorvaqScrip Node.js Runner";

pub const COMMAND: &str = "node ./code/script.js";

pub const PROMPT: &str = "Starting KorvaqScrip...";

/// Foreground intensity maps to the bright variant of the ANSI color
pub const PROMPT_COLORS: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::BrightGreen)))
    .bg_color(Some(Color::Ansi(AnsiColor::Black)));

pub const DEFAULT_COLORS: Style = Style::new();

#[derive(Clone, Copy)]
pub enum Chrome {
    Plain,
    Colored,
}

impl std::fmt::Display for Chrome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Chrome::Plain => f.write_str("plain"),
            Chrome::Colored => f.write_str("colored"),
        }
    }
}

#[must_use]
pub fn plain() -> Launcher {
    Launcher {
        chrome: Chrome::Plain,
        title: String::from(WINDOW_TITLE),
        command: String::from(COMMAND),
    }
}

#[must_use]
pub fn colored() -> Launcher {
    Launcher {
        chrome: Chrome::Colored,
        ..plain()
    }
}

pub struct Launcher {
    chrome: Chrome,
    title: String,
    command: String,
}

impl Launcher {
    /// Replace the window title
    #[must_use]
    pub fn title<S>(mut self, title: S) -> Launcher
    where
        S: Into<String>,
    {
        self.title = title.into();
        self
    }

    /// Replace the command line passed to the command interpreter
    #[must_use]
    pub fn command<S>(mut self, command: S) -> Launcher
    where
        S: Into<String>,
    {
        self.command = command.into();
        self
    }

    /// Run the command and return the shell's exit status.
    ///
    /// `Err` means the shell itself could not be spawned. A successfully spawned shell counts as
    /// success regardless of the status it exits with, so callers that care must inspect the
    /// returned status themselves.
    pub fn status<T: Terminal>(self, terminal: &mut T) -> Result<ExitStatus> {
        env_logger::try_init().unwrap_or_default();

        // smoelius: Terminal control is cosmetic. None of the calls below may affect the exit
        // condition, so their results are ignored.
        if matches!(self.chrome, Chrome::Colored) {
            terminal.clear().unwrap_or_default();
        }

        terminal.set_title(&self.title).unwrap_or_default();

        if matches!(self.chrome, Chrome::Colored) {
            terminal.set_colors(PROMPT_COLORS).unwrap_or_default();
            writeln!(terminal, "{PROMPT}").unwrap_or_default();
        }

        terminal.flush().unwrap_or_default();

        let mut command = shell(&self.command);
        let chrome = self.chrome;
        debug!("{chrome}: {:?}", &command);
        let result = command.status();

        if matches!(self.chrome, Chrome::Colored) {
            terminal.set_colors(DEFAULT_COLORS).unwrap_or_default();
        }

        let status = result.with_context(|| format!("failed to run `{}`", self.command))?;
        debug!("shell exited with {status}");
        Ok(status)
    }
}
