//! The line-oriented front-end: reads input, drives the symbol table, feeds
//! the engine, and renders the resulting groups.
//!
//! Grounded on the original tool's `main` loop: read a line, tokenize head
//! and successors, intern each label, `add` the head's successor ids, then
//! after all input is consumed, seal and solve once.

mod parser;
mod render;

use std::io::{BufRead, Write};

use crate::engine::Engine;
use crate::error::FrontendError;
use crate::symtab::Symtab;
use render::Group;

/// Selects plain group listings or DOT-language output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Dot,
}

/// Reads `input` line by line, builds the graph, solves it, and writes the
/// condensation to `output` in the requested format.
pub fn run(
    input: impl BufRead,
    output: &mut impl Write,
    format: OutputFormat,
) -> Result<(), FrontendError> {
    let mut symtab = Symtab::new();
    let mut engine = Engine::new();

    for line in input.lines() {
        let line = line?;
        let Some(parsed) = parser::parse_line(&line) else {
            continue;
        };
        let (_, head_id) = symtab.intern(parsed.head)?;
        let mut succ_ids = Vec::with_capacity(parsed.successors.len());
        for label in &parsed.successors {
            let (_, id) = symtab.intern(label)?;
            succ_ids.push(id);
        }
        engine.add(head_id, &succ_ids)?;
    }

    engine.seal()?;

    let mut groups = Vec::new();
    engine.solve(0, |id, members| {
        groups.push(Group {
            id,
            members: members.to_vec(),
        })
    })?;

    if format == OutputFormat::Dot {
        render::write_dot_preamble(output)?;
        for group in &groups {
            render::write_dot_group(output, &symtab, group, |id| {
                engine.get_successors(id).map(<[u32]>::to_vec).unwrap_or_default()
            })?;
        }
        render::write_dot_trailer(output)?;
    } else {
        for group in &groups {
            render::write_plain_group(output, &symtab, group)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_str(input: &str, format: OutputFormat) -> String {
        let mut out = Vec::new();
        run(input.as_bytes(), &mut out, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn single_node_plain() {
        assert_eq!(run_str("a:\n", OutputFormat::Plain), "0: a \n");
    }

    #[test]
    fn pair_cycle_plain() {
        let input = "a: b\nb: a c\n";
        assert_eq!(run_str(input, OutputFormat::Plain), "0: c \n1: a b \n");
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let input = "# a graph\n\na: b\nb: a\n";
        assert_eq!(run_str(input, OutputFormat::Plain), "0: a b \n");
    }

    #[test]
    fn dot_output_wraps_in_digraph_block() {
        let text = run_str("a: b\nb: a\n", OutputFormat::Dot);
        assert!(text.starts_with("digraph {\n"));
        assert!(text.trim_end().ends_with('}'));
        assert!(text.contains("subgraph cluster_0"));
    }

    #[test]
    fn dot_edges_are_reversed_relative_to_input() {
        // a -> b, so the renderer emits n<b> -> n<a>
        let text = run_str("a: b\n", OutputFormat::Dot);
        assert!(text.contains("n1 -> n0"));
    }

    #[test]
    fn malformed_line_with_no_head_is_skipped() {
        let input = "   \na: b\nb: a\n";
        assert_eq!(run_str(input, OutputFormat::Plain), "0: a b \n");
    }
}
