//! Rendering emitted groups as plain text (spec.md §6.5) or DOT (§6.6).

use std::io::{self, Write};

use crate::symtab::Symtab;

/// One emitted group, carried from the engine's callback into the renderer.
pub struct Group {
    pub id: u32,
    pub members: Vec<u32>,
}

/// Writes `group` as `<group-id>: <label> <label> …\n`.
pub fn write_plain_group(out: &mut impl Write, symtab: &Symtab, group: &Group) -> io::Result<()> {
    write!(out, "{}: ", group.id)?;
    for &id in &group.members {
        let label = label_of(symtab, id);
        write!(out, "{label} ")?;
    }
    writeln!(out)
}

/// Writes the DOT preamble: the opening `digraph {` plus graph/node/edge
/// attribute lines sourced from environment variables.
pub fn write_dot_preamble(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "digraph {{")?;
    writeln!(out, "    graph [{}];", env_attr("HOPSCOTCH_DOT_GRAPH_ATTR"))?;
    writeln!(out, "    node [{}];", env_attr("HOPSCOTCH_DOT_NODE_ATTR"))?;
    writeln!(out, "    edge [{}];", env_attr("HOPSCOTCH_DOT_EDGE_ATTR"))
}

/// Writes the closing `}` of a DOT graph.
pub fn write_dot_trailer(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "}}")
}

/// Writes one group as DOT: node declarations (wrapped in a `cluster_<gid>`
/// subgraph when the group has more than one member), then edges.
///
/// Edges are deliberately rendered `n<successor> -> n<member>` — reversed
/// relative to the input direction. This mirrors the original renderer's
/// orientation; see `DESIGN.md` for why it is preserved rather than fixed.
pub fn write_dot_group(
    out: &mut impl Write,
    symtab: &Symtab,
    group: &Group,
    successors_of: impl Fn(u32) -> Vec<u32>,
) -> io::Result<()> {
    let clustered = group.members.len() > 1;
    let indent = if clustered { "        " } else { "    " };

    if clustered {
        writeln!(out, "    subgraph cluster_{} {{", group.id)?;
        writeln!(
            out,
            "{indent}graph [{}];",
            env_attr("HOPSCOTCH_DOT_CLUSTER_ATTR")
        )?;
    }

    for &id in &group.members {
        let label = label_of(symtab, id);
        writeln!(out, "{indent}n{id} [label=\"{label}\"];")?;
    }

    if clustered {
        writeln!(out, "    }}")?;
    }

    let indent = "    ";
    for &id in &group.members {
        for succ in successors_of(id) {
            writeln!(out, "{indent}n{succ} -> n{id}")?;
        }
    }
    writeln!(out)
}

fn env_attr(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

fn label_of(symtab: &Symtab, id: u32) -> &str {
    symtab
        .get(id)
        .map(|sym| sym.text.as_str())
        .unwrap_or("<unknown>")
}
