//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Content type manifest (positional).
pub fn manifest_arg() -> Arg {
    Arg::new("manifest")
        .value_name("MANIFEST")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Content type manifest (JSON), or - for stdin")
}

/// Root content type (positional).
pub fn type_arg() -> Arg {
    Arg::new("type")
        .value_name("TYPE")
        .required(true)
        .help("Content type key to compile")
}

/// Include form elements in experience compositions (--form-elements).
pub fn form_elements_arg() -> Arg {
    Arg::new("form_elements")
        .long("form-elements")
        .action(ArgAction::SetTrue)
        .help("Include form element types in experience compositions")
}

/// Fan-out warning threshold (--max-fragments).
pub fn max_fragments_arg() -> Arg {
    Arg::new("max_fragments")
        .long("max-fragments")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Warn when an unconstrained property generates more than N fragments")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file instead of stdout")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for info, -vv for debug, -vvv for trace)")
}
