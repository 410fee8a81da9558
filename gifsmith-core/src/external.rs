//! Blocking invocation of the external decoder, prober, and compositor.
//!
//! Every tool is spawned from a discrete argument list, never through a
//! shell. Command lines are debug-logged before they run so a failing
//! invocation can be reproduced by hand.

use std::io;
use std::process::{Command, Stdio};

use crate::error::{CoreError, CoreResult};

fn log_command(program: &str, args: &[String]) {
    log::debug!("Running command: {} {}", program, args.join(" "));
}

fn map_spawn_error(program: &str, err: io::Error) -> CoreError {
    if err.kind() == io::ErrorKind::NotFound {
        CoreError::DependencyNotFound(program.to_string())
    } else {
        CoreError::CommandStart(program.to_string(), err)
    }
}

/// Runs an external tool to completion, failing on a non-zero exit with
/// the tool's captured stderr in the error message.
pub fn run_tool(program: &str, args: &[String]) -> CoreResult<()> {
    log_command(program, args);
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| map_spawn_error(program, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CoreError::ExternalTool(format!(
            "{} exited with {}: {}",
            program,
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}

/// Runs a tool and returns its captured stderr regardless of exit status.
///
/// Probe-mode decoders write their diagnostics to stderr and may exit
/// non-zero for inputs they can still describe; whether the output is
/// usable is decided by the parser, not the exit code.
pub fn capture_stderr(program: &str, args: &[String]) -> CoreResult<String> {
    log_command(program, args);
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| map_spawn_error(program, e))?;
    Ok(String::from_utf8_lossy(&output.stderr).into_owned())
}

/// Checks that a required external command is available and executable by
/// running `<name> -version` and discarding its output.
pub fn check_dependency(name: &str) -> CoreResult<()> {
    let result = Command::new(name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {name}");
            Ok(())
        }
        Err(e) => Err(map_spawn_error(name, e)),
    }
}
