//! Component 6 – execute composed command lines.

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use crate::writer::command::CommandLine;

/// Runs one command to completion and reports its exit status.
pub trait ProcessRunner {
    fn execute(&mut self, cmd: &CommandLine) -> io::Result<i32>;

    /// Delete the generated script once the simulator is done with it.
    fn remove(&mut self, path: &Path) -> io::Result<()> {
        debug!("removing {}", path.display());
        fs::remove_file(path)
    }
}

/// Spawns real processes, resolving `program` on `PATH`.
///
/// Stdio is inherited except stdout when the command asks for a
/// redirection. Death by signal is reported as `-1`.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn execute(&mut self, cmd: &CommandLine) -> io::Result<i32> {
        debug!("executing `{cmd}`");
        let mut command = Command::new(&cmd.program);
        command.args(&cmd.args);
        if let Some(out) = &cmd.stdout {
            command.stdout(Stdio::from(File::create(out)?));
        }
        let status = command.status()?;
        debug!("`{}` exited with {status}", cmd.program);
        Ok(status.code().unwrap_or(-1))
    }
}
