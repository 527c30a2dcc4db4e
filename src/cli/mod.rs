// CLI module
//
// This module contains command-line interface functionality:
// - arguments: Argument vector ownership and the help/verbose flag scan

pub mod arguments;

pub use arguments::{DemoArguments, ScanOutcome};
