//! Output side of the pipeline: the script file and the external commands.
pub mod command;
pub mod script;
