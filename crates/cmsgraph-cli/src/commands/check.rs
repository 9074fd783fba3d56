use std::path::PathBuf;

use cmsgraph_compiler::{Config, Diagnostics, Error, compile_all};
use cmsgraph_core::ContentTypes;

use super::manifest_loader::load_manifest;

pub struct CheckArgs {
    pub manifest: PathBuf,
    pub config: Config,
    pub strict: bool,
}

/// Outcome of compiling every type in a manifest.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub compiled: usize,
    pub failures: Vec<(String, Error)>,
    pub diagnostics: Diagnostics,
}

impl CheckReport {
    pub fn is_valid(&self, strict: bool) -> bool {
        !self.diagnostics.has_errors() && !(strict && self.diagnostics.has_warnings())
    }

    /// One line per diagnostic, in manifest order.
    pub fn render(&self) -> String {
        self.diagnostics.render()
    }
}

pub fn check_types(types: &ContentTypes, config: &Config) -> CheckReport {
    let mut report = CheckReport::default();
    for (key, result) in compile_all(types, config) {
        match result {
            Ok((_, diagnostics)) => {
                report.compiled += 1;
                report.diagnostics.extend(diagnostics);
            }
            Err(err) => {
                err.report(&key, &mut report.diagnostics);
                report.failures.push((key, err));
            }
        }
    }
    tracing::debug!(
        compiled = report.compiled,
        errors = report.diagnostics.error_count(),
        warnings = report.diagnostics.warning_count(),
        "checked manifest"
    );
    report
}

pub fn run(args: CheckArgs) {
    let types = load_manifest(&args.manifest).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });

    let report = check_types(&types, &args.config);
    eprint!("{}", report.render());

    if !report.is_valid(args.strict) {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
