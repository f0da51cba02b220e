use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

/// Program name plus arguments, for log lines and error messages.
pub fn describe(cmd: &Command) -> String {
    let mut s = cmd.get_program().to_string_lossy().into_owned();
    for arg in cmd.get_args() {
        s.push(' ');
        s.push_str(&arg.to_string_lossy());
    }
    s
}

/// Run `cmd` to completion and fail unless it exits with status zero.
///
/// Blocks with no timeout; stdout and stderr are inherited.
pub fn run_checked(cmd: &mut Command) -> Result<()> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    debug!(cmd = %describe(cmd), "spawning");
    let status = cmd
        .status()
        .map_err(|source| Error::Spawn { program: program.clone(), source })?;
    if !status.success() {
        return Err(Error::ProcessFailed { program, code: status.code() });
    }
    Ok(())
}
