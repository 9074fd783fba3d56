use std::fs;
use std::path::PathBuf;

use cmsgraph_compiler::{Assembler, Config};

use super::manifest_loader::load_manifest;

pub struct QueryArgs {
    pub manifest: PathBuf,
    pub type_name: String,
    pub config: Config,
    pub output: Option<PathBuf>,
}

pub fn run(args: QueryArgs) {
    let types = load_manifest(&args.manifest).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });

    let (document, diagnostics) = match Assembler::new(&types)
        .config(args.config)
        .assemble(&args.type_name)
    {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, format!("{document}\n")) {
                eprintln!("error: failed to write '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            tracing::info!(
                path = %path.display(),
                fragments = document.fragments().len(),
                "wrote query document"
            );
        }
        None => println!("{}", document),
    }

    if diagnostics.has_warnings() {
        eprint!("{}", diagnostics.render());
    }
}
