// names the tool falls back to when the command line says nothing
pub const DEFAULT_SCRIPT_NAME: &str = ".run_script";
pub const SIM_OUTPUT_SUFFIX: &str = ".out";

/// Result of scanning the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// `-h` / `--help` was seen somewhere; nothing else matters.
    Help,
    Options(ParsedOptions),
}

/// Everything the scanner collected, in "raw" form.
///
/// Nothing here has been checked yet; the validator turns it into a
/// [`RunPlan`] or rejects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOptions {
    /// Files in the order the simulator should load them.
    pub input_files: Vec<String>,
    pub output_script_name: String,
    /// `-s` was present, with or without a name.
    pub save_script: bool,
    pub auto_continue: bool,
    pub auto_dump: bool,
    /// Operands of every `-d`, in order.
    pub dump_args: Vec<String>,
    /// Explicit `-o NAME`; `None` means "derive from the last input".
    pub sim_output_file: Option<String>,
    pub write_sim_output: bool,
    pub auto_run: bool,
    pub use_assembler: bool,
    /// Flag-shaped tokens that matched nothing in the catalog.
    pub unrecognized: Vec<String>,
}

impl Default for ParsedOptions {
    fn default() -> Self {
        Self {
            input_files: Vec::new(),
            output_script_name: DEFAULT_SCRIPT_NAME.to_string(),
            save_script: false,
            auto_continue: true,
            auto_dump: false,
            dump_args: Vec::new(),
            sim_output_file: None,
            write_sim_output: false,
            auto_run: false,
            use_assembler: false,
            unrecognized: Vec::new(),
        }
    }
}

/// Validated options handed to the script builder and command composer.
///
/// `input_files` is never empty and `sim_output_file` is always resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub input_files: Vec<String>,
    pub output_script_name: String,
    pub save_script: bool,
    pub auto_continue: bool,
    pub auto_dump: bool,
    pub dump_args: Vec<String>,
    pub sim_output_file: String,
    pub write_sim_output: bool,
    pub auto_run: bool,
    pub use_assembler: bool,
}

impl RunPlan {
    /// Dump operands as they appear on the `d` line.
    pub fn dump_line_args(&self) -> String {
        self.dump_args.join(" ")
    }
}
