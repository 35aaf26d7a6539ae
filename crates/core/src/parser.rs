//! S-expression parser.
//!
//! Single left-to-right scan over the input, maintaining a stack of open
//! list frames and a pending-token buffer. `(` opens a frame, `)` closes
//! the innermost one, whitespace delimits atoms, and `"` toggles a quoted
//! region in which no special character is interpreted. Comment lines are
//! the caller's concern — see [`crate::document::strip_comments`].

use crate::ast::Node;
use crate::error::RecastError;

/// Parse description text into a list of top-level forms.
///
/// The returned node is always a `List` whose children are the file's
/// top-level expressions, e.g. `parse("(+ 5 (+ 3 5))")` yields a list with
/// the single child `(+ 5 (+ 3 5))`.
pub fn parse(text: &str) -> Result<Node, RecastError> {
    let mut stack: Vec<Vec<Node>> = vec![Vec::new()];
    let mut word = String::new();
    let mut in_str = false;
    let mut line: u32 = 1;

    for c in text.chars() {
        match c {
            '(' if !in_str => {
                stack.push(Vec::new());
            }
            ')' if !in_str => {
                flush_word(&mut word, &mut stack);
                let finished = match stack.pop() {
                    Some(frame) => frame,
                    None => return Err(RecastError::UnbalancedClose { line }),
                };
                match stack.last_mut() {
                    Some(top) => top.push(Node::List(finished)),
                    None => return Err(RecastError::UnbalancedClose { line }),
                }
            }
            // CR is deliberately not a delimiter: DOS-format files leave a
            // trailing \r on the last token of a line, which downstream
            // consumers strip where it matters (see effects::collect_effects).
            ' ' | '\t' | '\n' if !in_str => {
                flush_word(&mut word, &mut stack);
            }
            '"' => {
                in_str = !in_str;
            }
            _ => word.push(c),
        }
        if c == '\n' {
            line += 1;
        }
    }
    flush_word(&mut word, &mut stack);

    if stack.len() != 1 {
        return Err(RecastError::UnbalancedOpen {
            open: stack.len() - 1,
        });
    }
    // The root frame is the only one left; its contents are the top-level forms.
    let forms = stack.pop().unwrap_or_default();
    Ok(Node::List(forms))
}

fn flush_word(word: &mut String, stack: &mut Vec<Vec<Node>>) {
    if word.is_empty() {
        return;
    }
    if let Some(top) = stack.last_mut() {
        top.push(Node::Atom(std::mem::take(word)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atoms(items: &[&str]) -> Vec<Node> {
        items.iter().map(|a| Node::atom(*a)).collect()
    }

    #[test]
    fn parses_nested_arithmetic() {
        let tree = parse("(+ 5 (+ 3 5))").unwrap();
        let expected = Node::list(vec![Node::list(vec![
            Node::atom("+"),
            Node::atom("5"),
            Node::list(atoms(&["+", "3", "5"])),
        ])]);
        assert_eq!(tree, expected);
    }

    #[test]
    fn whitespace_variants_delimit_atoms() {
        let tree = parse("(a\tb\nc d)").unwrap();
        assert_eq!(
            tree,
            Node::list(vec![Node::list(atoms(&["a", "b", "c", "d"]))])
        );
    }

    #[test]
    fn carriage_return_stays_inside_the_token() {
        let tree = parse("(go\r\n stop)").unwrap();
        assert_eq!(
            tree,
            Node::list(vec![Node::list(atoms(&["go\r", "stop"]))])
        );
    }

    #[test]
    fn multiple_top_level_forms() {
        let tree = parse("(a) (b c)").unwrap();
        assert_eq!(tree.children().map(<[Node]>::len), Some(2));
    }

    #[test]
    fn quoted_region_protects_special_characters() {
        let tree = parse("(name \"a (b) c\")").unwrap();
        let expected = Node::list(vec![Node::list(vec![
            Node::atom("name"),
            Node::atom("a (b) c"),
        ])]);
        assert_eq!(tree, expected);
    }

    #[test]
    fn unbalanced_close_reports_line() {
        match parse("(a)\n)") {
            Err(RecastError::UnbalancedClose { line }) => assert_eq!(line, 2),
            other => panic!("expected UnbalancedClose, got {:?}", other),
        }
    }

    #[test]
    fn unbalanced_open_counts_frames() {
        match parse("(a (b (c)") {
            Err(RecastError::UnbalancedOpen { open }) => assert_eq!(open, 2),
            other => panic!("expected UnbalancedOpen, got {:?}", other),
        }
    }

    #[test]
    fn empty_input_yields_empty_form_list() {
        assert_eq!(parse("").unwrap(), Node::list(vec![]));
    }
}
