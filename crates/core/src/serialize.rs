//! Canonical text output for description trees.
//!
//! One parenthesized line per list with two-space indentation per nesting
//! level. Keyword atoms (leading `:`) other than a list's head break onto a
//! fresh line at the continuation indent, which keeps `:action`,
//! `:precondition`, `:effect` and friends readable. Round-tripping through
//! [`crate::parser::parse`] is exact up to whitespace, not byte-for-byte.

use crate::ast::Node;

/// Serialize one tree to canonical indented text.
pub fn serialize(node: &Node) -> String {
    serialize_at(node, 0)
}

fn serialize_at(node: &Node, level: usize) -> String {
    let children = match node {
        Node::Atom(a) => return a.clone(),
        Node::List(children) => children,
    };
    if children.is_empty() {
        return String::new();
    }

    let indent = " ".repeat(2 * level);
    let continuation = format!("{} ", indent);
    let mut out = format!("{}(", indent);
    for (i, child) in children.iter().enumerate() {
        match child {
            Node::List(_) => {
                out.push('\n');
                out.push_str(&serialize_at(child, level + 1));
            }
            Node::Atom(a) => {
                if a.starts_with(':') && i != 0 {
                    out.push('\n');
                    out.push_str(&continuation);
                }
                out.push_str(a);
                if i != children.len() - 1 {
                    out.push(' ');
                    // Zero-parameter actions must keep their empty list,
                    // which otherwise serializes to nothing.
                    if a == ":parameters" && children[i + 1].is_empty_list() {
                        out.push_str("()");
                    }
                }
            }
        }
    }
    out.push_str(") ");
    out
}
