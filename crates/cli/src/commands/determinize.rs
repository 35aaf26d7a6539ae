use std::path::{Path, PathBuf};
use std::process;

use recast_core::{
    apply, clean, combination_records, description_text, determinization_records,
    enumerate_determinizations, find_domain, most_likely_outcome, serialize, Combination, Node,
};

use super::{load_description, write_artifact};
use crate::{report_core_error, Mode, OutputFormat};

pub(crate) fn cmd_determinize(
    file: &Path,
    prefix: &Path,
    mode: Mode,
    limit: Option<usize>,
    domain: Option<&str>,
    output: OutputFormat,
    quiet: bool,
) {
    let root = load_description(file, output, quiet);
    let domain_tree = match find_domain(&root, domain) {
        Ok(i) => &root.children().unwrap_or(&[])[i],
        Err(e) => {
            report_core_error(&e, output, quiet);
            process::exit(1);
        }
    };
    let records = match determinization_records(domain_tree) {
        Ok(r) => r,
        Err(e) => {
            report_core_error(&e, output, quiet);
            process::exit(1);
        }
    };

    // One determinization is materialized, written, and dropped before the
    // next is generated; the Cartesian product never lives in memory. Only
    // the JSON summary retains per-artifact detail.
    let mut written = 0usize;
    let mut artifacts: Vec<serde_json::Value> = Vec::new();
    match mode {
        Mode::All => {
            for (idx, combination) in enumerate_determinizations(&records).enumerate() {
                if limit.is_some_and(|limit| idx >= limit) {
                    break;
                }
                let stem = format!("{}_det{}", prefix.display(), idx);
                write_pair(&combination, domain_tree, &stem, output, quiet);
                if output == OutputFormat::Json {
                    artifacts.push(artifact_summary(&stem, &combination));
                }
                written += 1;
            }
        }
        Mode::Mlo => {
            let combination = most_likely_outcome(&records);
            let stem = format!("{}_mlo_det", prefix.display());
            write_pair(&combination, domain_tree, &stem, output, quiet);
            if output == OutputFormat::Json {
                artifacts.push(artifact_summary(&stem, &combination));
            }
            written = 1;
        }
    }

    match output {
        OutputFormat::Text => {
            if !quiet {
                println!(
                    "created {} determinization(s) for {}",
                    written,
                    file.display()
                );
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "count": written, "artifacts": artifacts })
            );
        }
    }
}

fn artifact_summary(stem: &str, combination: &Combination<'_>) -> serde_json::Value {
    serde_json::json!({
        "stem": stem,
        "choices": combination_records(combination),
    })
}

/// Write one `<stem>.pddl` / `<stem>.desc` artifact pair.
fn write_pair(
    combination: &Combination<'_>,
    domain_tree: &Node,
    stem: &str,
    output: OutputFormat,
    quiet: bool,
) {
    let mut document = domain_tree.clone();
    if let Err(e) = apply(combination, &mut document) {
        report_core_error(&e, output, quiet);
        process::exit(1);
    }
    clean(&mut document);

    write_artifact(
        &PathBuf::from(format!("{}.pddl", stem)),
        &serialize(&document),
        output,
        quiet,
    );
    write_artifact(
        &PathBuf::from(format!("{}.desc", stem)),
        &description_text(combination),
        output,
        quiet,
    );
}
