use std::path::Path;
use std::process;

use recast_core::{find_domain, reduce_model, serialize};

use super::{load_description, write_artifact};
use crate::{report_core_error, OutputFormat};

pub(crate) fn cmd_reduce(
    file: &Path,
    out: Option<&Path>,
    domain: Option<&str>,
    output: OutputFormat,
    quiet: bool,
) {
    let root = load_description(file, output, quiet);
    let mut document = match find_domain(&root, domain) {
        Ok(i) => root.children().unwrap_or(&[])[i].clone(),
        Err(e) => {
            report_core_error(&e, output, quiet);
            process::exit(1);
        }
    };
    if let Err(e) = reduce_model(&mut document) {
        report_core_error(&e, output, quiet);
        process::exit(1);
    }

    let text = serialize(&document);
    match out {
        Some(path) => {
            write_artifact(path, &text, output, quiet);
            if !quiet && output == OutputFormat::Text {
                println!("wrote reduced model to {}", path.display());
            }
        }
        None => println!("{}", text),
    }
}
