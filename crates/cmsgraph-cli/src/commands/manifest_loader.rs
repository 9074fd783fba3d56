use std::fs;
use std::io::{self, Read};
use std::path::Path;

use cmsgraph_core::ContentTypes;

/// Load a content type manifest from a file, or stdin for `-`.
pub fn load_manifest(path: &Path) -> Result<ContentTypes, String> {
    let (label, content) = if path.as_os_str() == "-" {
        ("<stdin>".to_string(), read_stdin()?)
    } else {
        (path.display().to_string(), read_file(path)?)
    };

    let types = ContentTypes::from_json(&content)
        .map_err(|e| format!("failed to parse '{label}': {e}"))?;
    tracing::info!(manifest = %label, types = types.len(), "loaded manifest");
    Ok(types)
}

fn read_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}
