mod cli;
mod output;

use crate::cli::DemoArguments;
use log::{LevelFilter, error, trace};

fn main() {
    pretty_env_logger::env_logger::builder()
        .format_timestamp(None)
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = DemoArguments::from_env();
    trace!("Arguments: {:#?}", args);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = output::write_run(&args, &mut out) {
        // Exit status stays 0 even when stdout is gone
        error!("{:#}", e);
    }
}
