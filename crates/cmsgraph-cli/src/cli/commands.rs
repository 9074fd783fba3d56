//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("cmsgraph")
        .about("Compile content type manifests into graph query fragments")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(fragments_command())
        .subcommand(query_command())
        .subcommand(check_command())
}

/// Print the fragment closure of one content type.
pub fn fragments_command() -> Command {
    Command::new("fragments")
        .about("Print the fragments compiled for a content type")
        .override_usage("  cmsgraph fragments <MANIFEST> <TYPE>")
        .after_help(
            r#"EXAMPLES:
  cmsgraph fragments types.json ArticlePage
  cat types.json | cmsgraph fragments - ArticlePage"#,
        )
        .arg(manifest_arg())
        .arg(type_arg())
        .arg(form_elements_arg())
        .arg(max_fragments_arg())
        .arg(verbose_arg())
}

/// Assemble an executable query document.
pub fn query_command() -> Command {
    Command::new("query")
        .about("Assemble the query document for a content type")
        .override_usage(
            "\
  cmsgraph query <MANIFEST> <TYPE>
  cmsgraph query <MANIFEST> <TYPE> -o <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  cmsgraph query types.json ArticlePage
  cmsgraph query types.json LandingPage --form-elements
  cmsgraph query types.json ArticlePage --max-fragments 50 -o article.graphql"#,
        )
        .arg(manifest_arg())
        .arg(type_arg())
        .arg(form_elements_arg())
        .arg(max_fragments_arg())
        .arg(output_arg())
        .arg(verbose_arg())
}

/// Compile every content type in a manifest.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Compile every content type and report problems")
        .override_usage("  cmsgraph check <MANIFEST> [--strict]")
        .after_help(
            r#"EXAMPLES:
  cmsgraph check types.json            # fail on missing references
  cmsgraph check types.json --strict   # also fail on fan-out warnings"#,
        )
        .arg(manifest_arg())
        .arg(form_elements_arg())
        .arg(max_fragments_arg())
        .arg(strict_arg())
        .arg(verbose_arg())
}
