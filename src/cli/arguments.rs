use log::{debug, trace};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

pub const HELP_SHORT: &str = "-h";
pub const HELP_LONG: &str = "--help";
pub const VERBOSE_SHORT: &str = "-v";
pub const VERBOSE_LONG: &str = "--verbose";

/// What the front end should do once every token has been looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A help flag was found; print usage and stop.
    Help,
    /// No help flag; carry on with the normal output.
    Continue { verbose: bool },
}

/// The process argument vector, program name included.
#[derive(Debug, Clone, Default)]
pub struct DemoArguments {
    args: Vec<OsString>,
}

/// Exact, case-sensitive match against either spelling of a flag.
pub fn is_arg(arg: &OsStr, short_name: &str, long_name: &str) -> bool {
    arg == short_name || arg == long_name
}

impl DemoArguments {
    pub fn from_env() -> Self {
        Self::new(std::env::args_os())
    }

    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self { args: args.into_iter().map(Into::into).collect() }
    }

    /// Name the program was invoked as. Empty if the OS handed us no arguments at all.
    pub fn program_name(&self) -> Cow<'_, str> {
        self.args.first().map(|name| name.to_string_lossy()).unwrap_or(Cow::Borrowed(""))
    }

    /// Everything after the program name.
    pub fn tokens(&self) -> &[OsString] {
        self.args.get(1..).unwrap_or_default()
    }

    /// Walks the tokens in order. The first help flag wins, even after a verbose flag;
    /// anything unrecognized is ignored.
    pub fn scan(&self) -> ScanOutcome {
        let mut verbose = false;
        for token in self.tokens() {
            if is_arg(token, HELP_SHORT, HELP_LONG) {
                debug!("Help flag {:?} found, skipping remaining arguments", token);
                return ScanOutcome::Help;
            } else if is_arg(token, VERBOSE_SHORT, VERBOSE_LONG) {
                debug!("Verbose flag {:?} found", token);
                verbose = true;
            } else {
                trace!("Ignoring argument {:?}", token);
            }
        }
        ScanOutcome::Continue { verbose }
    }
}
