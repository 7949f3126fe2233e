use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Lc3Error {
    #[error("No arguments given.")]
    NoArguments,

    #[error("Invalid arguments: {}", .0.join(" "))]
    Unrecognized(Vec<String>),

    #[error("No filename received. Script launch aborted.")]
    NoInputFiles,

    /// Names of the input files whose assembly failed.
    #[error("The assembler returned an error for {}. Launch aborted.", .0.join(" "))]
    Assembly(Vec<String>),

    #[error("Could not write script {}: {source}", path.display())]
    WriteScript { path: PathBuf, source: io::Error },

    #[error("Could not load toolchain configuration: {0:#}")]
    Config(anyhow::Error),

    #[error("Could not write status output: {0}")]
    Output(#[from] io::Error),
}

impl Lc3Error {
    /// Process exit status reported for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Lc3Error::NoArguments => 1,
            Lc3Error::Unrecognized(_) => 2,
            Lc3Error::NoInputFiles => 3,
            Lc3Error::Assembly(_) => 4,
            Lc3Error::WriteScript { .. } | Lc3Error::Config(_) | Lc3Error::Output(_) => 5,
        }
    }

    /// Usage mistakes get the short banner printed after the message.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Lc3Error::NoArguments | Lc3Error::Unrecognized(_) | Lc3Error::NoInputFiles
        )
    }
}
