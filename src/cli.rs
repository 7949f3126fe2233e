use std::ffi::OsString;

use clap::Parser;

/// Raw command line.
///
/// clap only decodes the OS arguments; flag meaning is decided by
/// [`crate::parser::scan`], since `-f`/`-d` take a variable number of
/// operands and unknown flags must be collected rather than rejected.
#[derive(Parser, Debug)]
#[command(name = "lc3script", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Capture the process arguments, exiting on undecodable input.
    pub fn capture() -> Self {
        Self::capture_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Every token after the program name, unchanged.
    pub fn capture_from<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        let mut cli = Self::try_parse_from(argv.clone())?;
        // clap eats a leading `--` as its end-of-options marker
        if argv.get(1).is_some_and(|t| t == "--") && cli.args.len() + 2 == argv.len() {
            cli.args.insert(0, "--".to_string());
        }
        Ok(cli)
    }
}

pub const USAGE: &str = "\
Usage: lc3script [-r | --run] -f [Target File] [-s Output Script Name]
[-c disable] [-d label | location] [-o simulator output] [-a | --assemble]
Or use lc3script -h | --help for help.";

pub const HELP: &str = "\
Lc3 runscript generator
Use -h or --help for help
Recommended usage: lc3script -f yourfilename -o -r
Commands:
    -r    --run             Run lc3sim after writing the script.
    -h    --help            Show help message.
    -f    --file            Set input .obj file(s) in sequence.
                            The order is how lc3sim loads each file.
                            Filename extension is not required.
    -s    [output filename] Keep the script, default name: .run_script
    -c    disable/enable    Automatically continue in lc3sim, default: enable.
    -d    [label/location]  Call dump to see memory contents.
                            Arguments are labels or locations given to lc3sim.
    -o    [lc3sim output]   Let lc3sim save its output in a file.
                            Default name is [last input].out
    -a    --assemble        Use the assembler to build lc3 binaries before launch.
";
