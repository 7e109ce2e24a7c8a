use anyhow::Result;
use korvaq_runner::AnsiTerminal;
use std::process::ExitStatus;

fn main() -> Result<()> {
    let mut terminal = AnsiTerminal::stdout();

    let _: ExitStatus = korvaq_runner::colored().status(&mut terminal)?;

    Ok(())
}
