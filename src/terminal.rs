use anstyle::{Reset, Style};
use std::io::{self, IsTerminal, Stdout, Write};

pub trait Terminal: Write {
    fn set_title(&mut self, title: &str) -> io::Result<()>;
    fn set_colors(&mut self, colors: Style) -> io::Result<()>;
    fn clear(&mut self) -> io::Result<()>;
}

pub struct AnsiTerminal<W> {
    writer: W,
    enabled: bool,
}

impl AnsiTerminal<Stdout> {
    /// Best-effort control of the terminal attached to stdout. Control sequences are emitted only
    /// when stdout is actually a terminal.
    #[must_use]
    pub fn stdout() -> Self {
        let stdout = io::stdout();
        let enabled = stdout.is_terminal();
        Self::new(stdout, enabled)
    }
}

impl<W: Write> AnsiTerminal<W> {
    #[must_use]
    pub fn new(writer: W, enabled: bool) -> Self {
        Self { writer, enabled }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Write for AnsiTerminal<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write> Terminal for AnsiTerminal<W> {
    fn set_title(&mut self, title: &str) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        write!(self.writer, "\x1b]2;{title}\x07")?;
        self.writer.flush()
    }

    fn set_colors(&mut self, colors: Style) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        // smoelius: Writing the reset first makes each call replace the current attributes rather
        // than accumulate them.
        write!(self.writer, "{}{}", Reset.render(), colors.render())?;
        self.writer.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        write!(self.writer, "\x1b[2J\x1b[H")?;
        self.writer.flush()
    }
}
