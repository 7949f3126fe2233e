//! The fixed catalog of command-line flags.

/// How many following tokens a flag may take as operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Presence only.
    None,
    /// At most the next token, if it is not flag-shaped.
    One,
    /// Every following token up to the next flag-shaped one.
    Variadic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Help,
    Run,
    File,
    Script,
    Continue,
    Dump,
    Output,
    Assemble,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    pub flag: Flag,
    pub short: Option<&'static str>,
    pub long: Option<&'static str>,
    pub arity: Arity,
}

impl FlagSpec {
    const fn new(
        flag: Flag,
        short: Option<&'static str>,
        long: Option<&'static str>,
        arity: Arity,
    ) -> Self {
        Self { flag, short, long, arity }
    }
}

pub static CATALOG: &[FlagSpec] = &[
    FlagSpec::new(Flag::Help, Some("-h"), Some("--help"), Arity::None),
    FlagSpec::new(Flag::Run, Some("-r"), Some("--run"), Arity::None),
    FlagSpec::new(Flag::File, Some("-f"), Some("--file"), Arity::Variadic),
    FlagSpec::new(Flag::Script, Some("-s"), None, Arity::One),
    FlagSpec::new(Flag::Continue, Some("-c"), None, Arity::One),
    FlagSpec::new(Flag::Dump, Some("-d"), None, Arity::Variadic),
    FlagSpec::new(Flag::Output, Some("-o"), None, Arity::One),
    FlagSpec::new(Flag::Assemble, Some("-a"), Some("--assemble"), Arity::None),
];

/// A token is flag-shaped iff it starts with `-`.
pub fn is_flag_shaped(token: &str) -> bool {
    token.starts_with('-')
}

/// Exact match against the short or long form of every catalog entry.
pub fn lookup(token: &str) -> Option<&'static FlagSpec> {
    CATALOG
        .iter()
        .find(|spec| spec.short == Some(token) || spec.long == Some(token))
}
