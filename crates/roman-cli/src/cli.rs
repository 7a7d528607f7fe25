//! CLI argument definitions for the Roman numeral converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roman",
    version,
    about = "Convert between integers and Roman numerals",
    long_about = "Convert between integers and Roman numerals.\n\n\
                  Encoding produces canonical subtractive notation for values\n\
                  in 1..=3999. Decoding also accepts relaxed non-canonical\n\
                  forms such as IIII or MIM."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert an integer to its canonical Roman numeral.
    Encode(EncodeArgs),

    /// Convert a Roman numeral to its integer value.
    Decode(DecodeArgs),

    /// Check whether a numeral is in canonical form.
    Check(CheckArgs),

    /// Print the symbol-to-value table used by the encoder.
    Table,
}

#[derive(Parser)]
pub struct EncodeArgs {
    /// Integer value in the range 1..=3999.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: i32,
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// Roman numeral string (case-insensitive).
    #[arg(value_name = "NUMERAL")]
    pub numeral: String,

    /// Reject numerals that are not in canonical form.
    ///
    /// By default relaxed forms are accepted, so IIII decodes to 4. With
    /// this flag the input must match its own canonical re-encoding.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Roman numeral string (case-insensitive).
    #[arg(value_name = "NUMERAL")]
    pub numeral: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
