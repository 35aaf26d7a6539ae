pub(crate) mod determinize;
pub(crate) mod fmt;
pub(crate) mod problem;
pub(crate) mod reduce;

use std::path::Path;
use std::process;

use recast_core::{parse, strip_comments, Node};

use crate::{report_core_error, report_error, OutputFormat};

/// Read a description file, strip `;;` comments and blank lines, and parse
/// it. Reports and exits with status 1 on any failure.
pub(crate) fn load_description(path: &Path, output: OutputFormat, quiet: bool) -> Node {
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            report_error(
                &format!("could not read file {}: {}", path.display(), e),
                output,
                quiet,
            );
            process::exit(1);
        }
    };
    match parse(&strip_comments(&text)) {
        Ok(tree) => tree,
        Err(e) => {
            report_core_error(&e, output, quiet);
            process::exit(1);
        }
    }
}

pub(crate) fn write_artifact(path: &Path, contents: &str, output: OutputFormat, quiet: bool) {
    if let Err(e) = std::fs::write(path, contents) {
        report_error(
            &format!("could not write {}: {}", path.display(), e),
            output,
            quiet,
        );
        process::exit(1);
    }
}
