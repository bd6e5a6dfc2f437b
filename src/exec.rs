use std::{
    io,
    process::{Child, Command, Stdio},
    thread,
};

/// Launches menu commands in the background.
///
/// Commands go to `sh -c` unmodified: they come from whoever started the
/// tray, so they run with that user's authority and are not sanitised.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRunner {
    echo: bool,
}

impl CommandRunner {
    /// `echo` logs every command as it is launched (the `--debug` flag).
    pub fn new(echo: bool) -> Self {
        Self { echo }
    }

    /// Starts `cmd` and returns immediately. Failures are logged, never returned.
    pub fn run(&self, cmd: &str) {
        if self.echo {
            tracing::info!("{cmd} &");
        }
        match self.spawn(cmd) {
            Ok(child) => reap_detached(child),
            Err(e) => tracing::warn!(command = cmd, error = %e, "failed to launch command"),
        }
    }

    fn spawn(&self, cmd: &str) -> io::Result<Child> {
        Command::new("sh")
            .arg("-c")
            .arg(cmd)
            .stdin(Stdio::null())
            .spawn()
    }
}

// Nobody waits for the result, but the exit status still has to be collected.
fn reap_detached(mut child: Child) {
    let pid = child.id();
    let spawned = thread::Builder::new()
        .name(format!("reap-{pid}"))
        .spawn(move || match child.wait() {
            Ok(status) => tracing::debug!(pid, %status, "command finished"),
            Err(e) => tracing::debug!(pid, error = %e, "waiting for command failed"),
        });
    if let Err(e) = spawned {
        tracing::warn!(pid, error = %e, "could not start reaper thread");
    }
}
