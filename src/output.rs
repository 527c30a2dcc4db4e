//! Everything the front end writes to stdout.

use crate::cli::{DemoArguments, ScanOutcome};
use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

pub const GREETING: &str = "Hello, world!";
pub const FAREWELL: &str = "Goodbye, world!";
pub const VERBOSE_NOTICE: &str = "Verbose mode enabled!";

const HELP_TEMPLATE: &str = "Usage: {name} [-h] [-v]

Do some stuff!

Options:
 -h, --help        Print this help text and exit.
 -v, --verbose     Enable verbose mode.
";

/// Usage text with the invocation name filled in. Ends with a newline.
pub fn render_help(name: &str) -> String {
    HELP_TEMPLATE.replacen("{name}", name, 1)
}

/// `name:` followed by each token with a single leading space, no trailing newline.
pub fn render_echo(args: &DemoArguments) -> String {
    let mut line = format!("{}:", args.program_name());
    for token in args.tokens() {
        line.push(' ');
        line.push_str(&token.to_string_lossy());
    }
    line
}

/// Writes one full run to `out` and flushes it.
///
/// The scan happens before the first write, so the help path produces the usage text and nothing
/// else. Otherwise: greeting, echo line, the verbose notice if asked for, farewell.
pub fn write_run<W: Write>(args: &DemoArguments, out: &mut W) -> Result<ScanOutcome> {
    let outcome = args.scan();
    match outcome {
        ScanOutcome::Help => {
            out.write_all(render_help(&args.program_name()).as_bytes()).context("Failed to write help text")?;
        }
        ScanOutcome::Continue { verbose } => {
            writeln!(out, "{}", GREETING).context("Failed to write greeting")?;
            writeln!(out, "{}", render_echo(args)).context("Failed to echo arguments")?;
            if verbose {
                writeln!(out, "{}", VERBOSE_NOTICE).context("Failed to write verbose notice")?;
            }
            writeln!(out, "{}", FAREWELL).context("Failed to write farewell")?;
        }
    }
    out.flush().context("Failed to flush output")?;
    debug!("Run finished: {:?}", outcome);
    Ok(outcome)
}
