use std::path::Path;

use recast_core::serialize;

use super::load_description;
use crate::OutputFormat;

pub(crate) fn cmd_fmt(file: &Path, output: OutputFormat, quiet: bool) {
    let root = load_description(file, output, quiet);
    let forms = root.children().unwrap_or(&[]);
    let text = forms.iter().map(serialize).collect::<Vec<_>>().join("\n");
    println!("{}", text);
}
