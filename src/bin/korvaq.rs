use anyhow::Result;
use korvaq_runner::AnsiTerminal;
use std::process::ExitStatus;

fn main() -> Result<()> {
    let mut terminal = AnsiTerminal::stdout();

    // smoelius: Spawning the shell is the success condition. The script's own exit status is
    // deliberately not forwarded.
    let _: ExitStatus = korvaq_runner::plain().status(&mut terminal)?;

    Ok(())
}
