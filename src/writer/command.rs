//! Component 5 – compose the external command lines.
//!
//! Only data is produced here; `runner` decides how to execute it.

use std::fmt;

use crate::config::Toolchain;
use crate::model::RunPlan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
    /// Redirect stdout into this file (`> file`).
    pub stdout: Option<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdout: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn stdout_to(mut self, file: impl Into<String>) -> Self {
        self.stdout = Some(file.into());
        self
    }
}

/// Shell form, e.g. `lc3sim -s .run_script > a.out`.
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        if let Some(out) = &self.stdout {
            write!(f, " > {out}")?;
        }
        Ok(())
    }
}

/// One command per input file, in load order. No extension is appended.
pub fn assembler_commands(plan: &RunPlan, tools: &Toolchain) -> Vec<CommandLine> {
    plan.input_files
        .iter()
        .map(|file| CommandLine::new(&tools.assembler).arg(file))
        .collect()
}

pub fn simulator_command(plan: &RunPlan, tools: &Toolchain) -> CommandLine {
    let cmd = CommandLine::new(&tools.simulator)
        .arg(&tools.script_flag)
        .arg(&plan.output_script_name);
    if plan.write_sim_output {
        cmd.stdout_to(&plan.sim_output_file)
    } else {
        cmd
    }
}
