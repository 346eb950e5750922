//! Iterative, depth-capped Tarjan's algorithm.
//!
//! The classic presentation recurses into each successor; here recursion is
//! replaced with an explicit frame stack so a pathological chain cannot
//! exhaust the process stack. Each [`Frame`] tracks a node and a cursor into
//! its successor list: a cursor of `0` means "just entered" (assign `index`
//! and `low_link`, push onto the component stack), and any later visit to
//! the same frame is "post-child" work — advance the cursor, and if the
//! child just finished, fold its `low_link` into this node's.

use crate::engine::{IdIndex, NodeRecord};
use crate::error::EngineError;

struct Frame {
    node: usize,
    succ_cursor: usize,
}

/// Runs Tarjan's algorithm over `nodes`, visiting roots in the order given
/// by `order` (ids, not arena indices), and streams each SCC to `callback`
/// as soon as it closes.
///
/// `max_depth` of `0` means "use the caller's default"; the caller is
/// expected to have already resolved that before calling in, since this
/// function has no notion of a default depth of its own.
pub(crate) fn solve(
    nodes: &mut [NodeRecord],
    index: &IdIndex,
    order: &[u32],
    max_depth: usize,
    mut callback: impl FnMut(u32, &[u32]),
) -> Result<(), EngineError> {
    for n in nodes.iter_mut() {
        n.index = None;
        n.low_link = 0;
        n.on_stack = false;
    }

    let mut counter = 0usize;
    let mut group_id = 0u32;
    let mut component_stack: Vec<usize> = Vec::new();
    let mut work: Vec<Frame> = Vec::new();

    for &root_id in order {
        let root_ix = index
            .get(root_id)
            .expect("seal materializes every referenced id") as usize;
        if nodes[root_ix].index.is_some() {
            continue;
        }

        push_frame(&mut work, root_ix, max_depth)?;

        while let Some(top) = work.last().map(|f| f.node) {
            if work.last().unwrap().succ_cursor == 0 {
                nodes[top].index = Some(counter);
                nodes[top].low_link = counter;
                counter += 1;
                nodes[top].on_stack = true;
                component_stack.push(top);
            }

            let cursor = work.last().unwrap().succ_cursor;
            if cursor < nodes[top].successors.len() {
                let succ_id = nodes[top].successors[cursor];
                work.last_mut().unwrap().succ_cursor += 1;

                let succ_ix = index
                    .get(succ_id)
                    .expect("successor ids are materialized at add-time") as usize;

                if nodes[succ_ix].index.is_none() {
                    push_frame(&mut work, succ_ix, max_depth)?;
                } else if nodes[succ_ix].on_stack {
                    let succ_index = nodes[succ_ix].index.unwrap();
                    if succ_index < nodes[top].low_link {
                        nodes[top].low_link = succ_index;
                    }
                }
            } else {
                work.pop();
                let low = nodes[top].low_link;
                let own_index = nodes[top].index.unwrap();

                if low == own_index {
                    emit_component(&mut component_stack, nodes, top, group_id, &mut callback);
                    group_id += 1;
                }

                if let Some(parent) = work.last() {
                    let parent_ix = parent.node;
                    if low < nodes[parent_ix].low_link {
                        nodes[parent_ix].low_link = low;
                    }
                }
            }
        }
    }

    Ok(())
}

fn push_frame(work: &mut Vec<Frame>, node: usize, max_depth: usize) -> Result<(), EngineError> {
    if work.len() >= max_depth {
        return Err(EngineError::RecursionDepth);
    }
    work.push(Frame {
        node,
        succ_cursor: 0,
    });
    Ok(())
}

fn emit_component(
    component_stack: &mut Vec<usize>,
    nodes: &mut [NodeRecord],
    root: usize,
    group_id: u32,
    callback: &mut impl FnMut(u32, &[u32]),
) {
    let mut members = Vec::new();
    loop {
        let w = component_stack
            .pop()
            .expect("component stack cannot underflow while a root is unclosed");
        nodes[w].on_stack = false;
        members.push(nodes[w].id);
        if w == root {
            break;
        }
    }
    members.sort_unstable();
    callback(group_id, &members);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;

    fn run(edges: &[(u32, &[u32])], max_depth: usize) -> Result<Vec<(u32, Vec<u32>)>, EngineError> {
        let mut e = Engine::new();
        for &(head, succs) in edges {
            e.add(head, succs).unwrap();
        }
        e.seal().unwrap();
        let mut groups = Vec::new();
        e.solve(max_depth, |id, members| groups.push((id, members.to_vec())))?;
        Ok(groups)
    }

    #[test]
    fn classic_example_from_spec() {
        let edges: &[(u32, &[u32])] = &[
            (0, &[1]),       // a -> b
            (1, &[2, 4, 5]), // b -> c, e, f
            (2, &[3, 6]),    // c -> d, g
            (3, &[2, 7]),    // d -> c, h
            (4, &[0, 5]),    // e -> a, f
            (5, &[6]),       // f -> g
            (6, &[5]),       // g -> f
            (7, &[3, 6]),    // h -> d, g
        ];
        let groups = run(edges, 0).unwrap();
        assert_eq!(
            groups,
            vec![
                (0, vec![5, 6]),    // f, g
                (1, vec![2, 3, 7]), // c, d, h
                (2, vec![0, 1, 4]), // a, b, e
            ]
        );
    }

    #[test]
    fn disconnected_singleton_emitted_first() {
        let edges: &[(u32, &[u32])] = &[
            (1, &[2]),
            (2, &[3, 5, 6]),
            (3, &[4, 7]),
            (4, &[3, 8]),
            (5, &[1, 6]),
            (6, &[7]),
            (7, &[6]),
            (8, &[4, 7]),
            (0, &[]), // disconnected node with the smallest id
        ];
        let groups = run(edges, 0).unwrap();
        assert_eq!(groups[0], (0, vec![0]));
    }

    #[test]
    fn disconnected_self_loop_does_not_merge_with_main_graph() {
        let edges: &[(u32, &[u32])] = &[(0, &[1]), (1, &[0]), (2, &[2])];
        let groups = run(edges, 0).unwrap();
        assert_eq!(groups, vec![(0, vec![2]), (1, vec![0, 1])]);
    }
}
