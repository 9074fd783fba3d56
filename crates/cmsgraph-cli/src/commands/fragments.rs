use std::path::PathBuf;

use cmsgraph_compiler::{Config, compile};

use super::manifest_loader::load_manifest;

pub struct FragmentsArgs {
    pub manifest: PathBuf,
    pub type_name: String,
    pub config: Config,
}

pub fn run(args: FragmentsArgs) {
    let types = load_manifest(&args.manifest).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });

    let (fragments, diagnostics) = match compile(&types, &args.type_name, &args.config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    for fragment in &fragments {
        println!("{}", fragment);
    }

    if diagnostics.has_warnings() {
        eprint!("{}", diagnostics.render());
    }
}
