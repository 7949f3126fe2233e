//! Component 2 – the argument scanner.
//!
//! One left-to-right walk over the raw tokens. Flags with operands look
//! ahead into the remaining slice; everything a flag consumes is data and
//! is never checked against the catalog.
pub mod flags;

use log::debug;

use crate::model::{Invocation, ParsedOptions};
use flags::{Arity, Flag, is_flag_shaped, lookup};

/// Scan `args` (program name already stripped).
///
/// `-h` / `--help` anywhere wins over everything else, including tokens
/// that would otherwise be reported as unrecognized.
pub fn scan(args: &[String]) -> Invocation {
    if args.iter().any(|a| lookup(a).map(|s| s.flag) == Some(Flag::Help)) {
        return Invocation::Help;
    }

    let mut opts = ParsedOptions::default();

    for (i, token) in args.iter().enumerate() {
        let Some(spec) = lookup(token) else {
            if is_flag_shaped(token) {
                debug!("unrecognized token `{token}`");
                opts.unrecognized.push(token.clone());
            }
            continue;
        };
        let operands = operands_for(spec.arity, &args[i + 1..]);

        match spec.flag {
            Flag::Help => unreachable!("help is handled before scanning"),
            Flag::Run => opts.auto_run = true,
            Flag::Assemble => opts.use_assembler = true,
            Flag::File => {
                // rebuilt from scratch: the last -f wins
                opts.input_files = operands.to_vec();
            }
            Flag::Script => {
                opts.save_script = true;
                if let Some(name) = operands.first() {
                    opts.output_script_name = name.clone();
                }
            }
            Flag::Continue => {
                if operands.first().map(String::as_str) == Some("disable") {
                    opts.auto_continue = false;
                }
            }
            Flag::Dump => {
                opts.auto_dump = true;
                opts.dump_args.extend_from_slice(operands);
            }
            Flag::Output => {
                opts.write_sim_output = true;
                if let Some(name) = operands.first() {
                    opts.sim_output_file = Some(name.clone());
                }
            }
        }
    }

    Invocation::Options(opts)
}

/// The run of non-flag-shaped tokens at the head of `rest`.
fn take_operands(rest: &[String]) -> &[String] {
    let end = rest
        .iter()
        .position(|t| is_flag_shaped(t))
        .unwrap_or(rest.len());
    &rest[..end]
}

/// What a flag of the given arity consumes from the tokens after it.
fn operands_for(arity: Arity, rest: &[String]) -> &[String] {
    let run = take_operands(rest);
    match arity {
        Arity::None => &[],
        Arity::One => &run[..run.len().min(1)],
        Arity::Variadic => run,
    }
}
