//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `Into<*Args>` impls resolve the compiler config (environment first,
//!   then explicit flags)

use std::path::PathBuf;

use clap::ArgMatches;

use cmsgraph_compiler::Config;

use crate::commands::check::CheckArgs;
use crate::commands::fragments::FragmentsArgs;
use crate::commands::query::QueryArgs;

pub struct FragmentsParams {
    pub manifest: PathBuf,
    pub type_name: String,
    pub form_elements: bool,
    pub max_fragments: Option<usize>,
    pub verbose: u8,
}

impl FragmentsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest: parse_manifest(m),
            type_name: m.get_one::<String>("type").cloned().unwrap_or_default(),
            form_elements: m.get_flag("form_elements"),
            max_fragments: m.get_one::<usize>("max_fragments").copied(),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<FragmentsParams> for FragmentsArgs {
    fn from(p: FragmentsParams) -> Self {
        Self {
            manifest: p.manifest,
            type_name: p.type_name,
            config: build_config(p.form_elements, p.max_fragments),
        }
    }
}

pub struct QueryParams {
    pub manifest: PathBuf,
    pub type_name: String,
    pub form_elements: bool,
    pub max_fragments: Option<usize>,
    pub output: Option<PathBuf>,
    pub verbose: u8,
}

impl QueryParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest: parse_manifest(m),
            type_name: m.get_one::<String>("type").cloned().unwrap_or_default(),
            form_elements: m.get_flag("form_elements"),
            max_fragments: m.get_one::<usize>("max_fragments").copied(),
            output: m.get_one::<PathBuf>("output").cloned(),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<QueryParams> for QueryArgs {
    fn from(p: QueryParams) -> Self {
        Self {
            manifest: p.manifest,
            type_name: p.type_name,
            config: build_config(p.form_elements, p.max_fragments),
            output: p.output,
        }
    }
}

pub struct CheckParams {
    pub manifest: PathBuf,
    pub form_elements: bool,
    pub max_fragments: Option<usize>,
    pub strict: bool,
    pub verbose: u8,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest: parse_manifest(m),
            form_elements: m.get_flag("form_elements"),
            max_fragments: m.get_one::<usize>("max_fragments").copied(),
            strict: m.get_flag("strict"),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            manifest: p.manifest,
            config: build_config(p.form_elements, p.max_fragments),
            strict: p.strict,
        }
    }
}

fn parse_manifest(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("manifest").cloned().unwrap_or_default()
}

/// Environment config with flag overrides applied on top.
fn build_config(form_elements: bool, max_fragments: Option<usize>) -> Config {
    let config = Config::from_env().form_elements(form_elements);
    match max_fragments {
        Some(n) => config.fragment_threshold(n),
        None => config,
    }
}
