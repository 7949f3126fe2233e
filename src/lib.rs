pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod runner;
pub mod writer;

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use log::{debug, error, info, warn};

use config::Toolchain;
use error::Lc3Error;
use model::{Invocation, RunPlan};
use runner::{ProcessRunner, SystemRunner};
use writer::command;

/// How a run that did not fail ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Help banner shown, nothing else done.
    Help,
    Completed,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Help => 1,
            Outcome::Completed => 0,
        }
    }
}

/// Binary entry point: real processes, real stdout, current directory.
pub fn run() -> ExitCode {
    let cli = cli::Cli::capture();
    let mut stdout = io::stdout().lock();

    let result = Toolchain::from_env()
        .map_err(Lc3Error::Config)
        .and_then(|tools| {
            run_with(&cli.args, &tools, &mut SystemRunner, &mut stdout, Path::new("."))
        });

    match result {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            if let Err(e) = report(&err, &mut stdout) {
                error!("could not report `{err}`: {e}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}

/// Print a terminating error, followed by the usage banner for usage mistakes.
pub fn report(err: &Lc3Error, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{err}")?;
    if err.is_usage() {
        writeln!(out, "{}", cli::USAGE)?;
    }
    Ok(())
}

/// The whole pipeline for one invocation.
///
/// `args` excludes the program name. The script is written to
/// `dir/<script name>`; status lines go to `out`.
pub fn run_with(
    args: &[String],
    tools: &Toolchain,
    runner: &mut dyn ProcessRunner,
    out: &mut dyn Write,
    dir: &Path,
) -> Result<Outcome, Lc3Error> {
    if args.is_empty() {
        return Err(Lc3Error::NoArguments);
    }

    // 1. ── Scan ───────────────────────────────────────────────────────
    let opts = match parser::scan(args) {
        Invocation::Help => {
            writeln!(out, "{}\n\n{}", cli::USAGE, cli::HELP)?;
            return Ok(Outcome::Help);
        }
        Invocation::Options(opts) => opts,
    };
    if !opts.auto_continue {
        writeln!(out, "Continue disabled.")?;
    }

    // 2. ── Validate ───────────────────────────────────────────────────
    let plan = processor::validate(opts)?;
    debug!("{plan:?}");
    writeln!(
        out,
        "{} filenames received: {}",
        plan.input_files.len(),
        plan.input_files.join(" ")
    )?;

    // 3. ── Assemble ───────────────────────────────────────────────────
    if plan.use_assembler {
        assemble(&plan, tools, runner, out)?;
    }

    // 4. ── Write script ───────────────────────────────────────────────
    let script_path = dir.join(&plan.output_script_name);
    writer::script::emit(&plan, &script_path).map_err(|source| Lc3Error::WriteScript {
        path: script_path.clone(),
        source,
    })?;
    info!("script written to {}", script_path.display());
    if plan.save_script {
        writeln!(out, "Script written in: {}", plan.output_script_name)?;
    }

    // 5. ── Simulate ───────────────────────────────────────────────────
    if plan.auto_run {
        writeln!(out, "Starting {}...", tools.simulator)?;
        let cmd = command::simulator_command(&plan, tools);
        match runner.execute(&cmd) {
            Ok(0) => {}
            Ok(code) => warn!("`{cmd}` exited with status {code}"),
            Err(e) => warn!("could not launch `{cmd}`: {e}"),
        }
    }

    let mut status = String::new();
    if plan.auto_continue && plan.auto_run {
        status.push_str(&format!("{} done. ", tools.simulator));
    }
    if plan.write_sim_output {
        status.push_str(&format!("Output written in {}", plan.sim_output_file));
    }
    if !status.is_empty() {
        writeln!(out, "{}", status.trim_end())?;
    }

    // 6. ── Clean up ───────────────────────────────────────────────────
    if !plan.save_script && plan.auto_run {
        writeln!(out, "Removing script...")?;
        if let Err(e) = runner.remove(&script_path) {
            warn!("could not remove {}: {e}", script_path.display());
        }
    }

    writeln!(out, "All works done.")?;
    Ok(Outcome::Completed)
}

/// Assemble every input file in order. A failure does not stop the
/// remaining files; the run is aborted once all of them were tried.
fn assemble(
    plan: &RunPlan,
    tools: &Toolchain,
    runner: &mut dyn ProcessRunner,
    out: &mut dyn Write,
) -> Result<(), Lc3Error> {
    writeln!(out)?;
    let mut failed = Vec::new();

    for (file, cmd) in plan
        .input_files
        .iter()
        .zip(command::assembler_commands(plan, tools))
    {
        writeln!(
            out,
            "Assembling object file {file}.obj using {}...",
            tools.assembler
        )?;
        match runner.execute(&cmd) {
            Ok(0) => {}
            Ok(code) => {
                warn!("`{cmd}` exited with status {code}");
                failed.push(file.clone());
            }
            Err(e) => {
                warn!("could not launch `{cmd}`: {e}");
                failed.push(file.clone());
            }
        }
        writeln!(out)?;
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(Lc3Error::Assembly(failed))
    }
}
