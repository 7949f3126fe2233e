//! Component 3 – the validator.
//!
//! Rejects a scan that cannot produce a run and fills in the defaults that
//! depend on other options.

use crate::error::Lc3Error;
use crate::model::{ParsedOptions, RunPlan, SIM_OUTPUT_SUFFIX};

/// Unrecognized tokens are reported before a missing file list.
pub fn validate(opts: ParsedOptions) -> Result<RunPlan, Lc3Error> {
    if !opts.unrecognized.is_empty() {
        return Err(Lc3Error::Unrecognized(opts.unrecognized));
    }
    let Some(last) = opts.input_files.last() else {
        return Err(Lc3Error::NoInputFiles);
    };

    let sim_output_file = opts
        .sim_output_file
        .unwrap_or_else(|| format!("{last}{SIM_OUTPUT_SUFFIX}"));

    Ok(RunPlan {
        input_files: opts.input_files,
        output_script_name: opts.output_script_name,
        save_script: opts.save_script,
        auto_continue: opts.auto_continue,
        auto_dump: opts.auto_dump,
        dump_args: opts.dump_args,
        sim_output_file,
        write_sim_output: opts.write_sim_output,
        auto_run: opts.auto_run,
        use_assembler: opts.use_assembler,
    })
}
