//! Source preparation and multi-document lookup.
//!
//! A description file may hold several top-level `define` forms (domains
//! and problems). The parser never sees comments: callers strip `;;` lines
//! and blank lines first, which is the interface contract with whatever
//! reads the file.

use crate::ast::Node;
use crate::error::RecastError;

/// Line-comment marker of the description grammar.
pub const COMMENT_MARKER: &str = ";;";

/// Drop comment lines and blank lines before parsing.
pub fn strip_comments(text: &str) -> String {
    let mut out = String::new();
    for line in text.lines() {
        if line.starts_with(COMMENT_MARKER) || line.trim().is_empty() {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Index of a `(define (domain <name>) ...)` form among the top-level
/// forms, optionally restricted to a specific name.
pub fn find_domain(root: &Node, name: Option<&str>) -> Result<usize, RecastError> {
    find_document(root, "domain", name)
}

/// Index of a `(define (problem <name>) ...)` form among the top-level
/// forms, optionally restricted to a specific name.
pub fn find_problem(root: &Node, name: Option<&str>) -> Result<usize, RecastError> {
    find_document(root, "problem", name)
}

fn find_document(root: &Node, kind: &str, name: Option<&str>) -> Result<usize, RecastError> {
    let forms = root.children().unwrap_or(&[]);
    for (i, form) in forms.iter().enumerate() {
        if form.head() != Some("define") {
            continue;
        }
        let Some(header) = form.children().and_then(|c| c.get(1)) else {
            continue;
        };
        if header.head() != Some(kind) {
            continue;
        }
        match (name, document_name(header)) {
            (None, _) => return Ok(i),
            (Some(wanted), Some(found)) if wanted == found => return Ok(i),
            _ => {}
        }
    }
    Err(RecastError::Lookup {
        kind: kind.to_owned(),
        name: name.unwrap_or("<any>").to_owned(),
    })
}

/// The declared name inside a `(domain <name>)` / `(problem <name>)` header.
pub fn document_name(header: &Node) -> Option<&str> {
    match header.children()?.get(1)? {
        Node::Atom(a) => Some(a.as_str()),
        Node::List(_) => None,
    }
}
