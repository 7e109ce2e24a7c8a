pub use os_specific::shell;

#[cfg(unix)]
mod os_specific {
    use std::process::Command;

    // smoelius: `sh -c` is what `system` uses on POSIX systems.
    #[must_use]
    pub fn shell(command_line: &str) -> Command {
        let mut command = Command::new("sh");
        command.args(["-c", command_line]);
        command
    }
}

#[cfg(windows)]
mod os_specific {
    use std::process::Command;

    #[must_use]
    pub fn shell(command_line: &str) -> Command {
        let mut command = Command::new("cmd");
        command.args(["/C", command_line]);
        command
    }
}
