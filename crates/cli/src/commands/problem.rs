use std::path::Path;
use std::process;

use recast_core::{clean_problem, find_problem, serialize};

use super::{load_description, write_artifact};
use crate::{report_core_error, OutputFormat};

pub(crate) fn cmd_problem(
    file: &Path,
    out: Option<&Path>,
    problem: Option<&str>,
    output: OutputFormat,
    quiet: bool,
) {
    let root = load_description(file, output, quiet);
    let mut document = match find_problem(&root, problem) {
        Ok(i) => root.children().unwrap_or(&[])[i].clone(),
        Err(e) => {
            report_core_error(&e, output, quiet);
            process::exit(1);
        }
    };
    clean_problem(&mut document);

    let text = serialize(&document);
    match out {
        Some(path) => {
            write_artifact(path, &text, output, quiet);
            if !quiet && output == OutputFormat::Text {
                println!("wrote problem to {}", path.display());
            }
        }
        None => println!("{}", text),
    }
}
