//! The incremental graph builder and SCC solver.
//!
//! An [`Engine`] moves through two phases: *building*, during which [`add`]
//! registers nodes and their successor lists, and *sealed*, during which
//! [`solve`] and [`get_successors`] become available. The phase is tracked
//! at runtime (not in the type) because [`add`] after [`seal`] must be an
//! observable [`EngineError::Misuse`], not a compile error — see
//! `DESIGN.md`.
//!
//! [`add`]: Engine::add
//! [`seal`]: Engine::seal
//! [`solve`]: Engine::solve
//! [`get_successors`]: Engine::get_successors

use std::cell::Cell;
use std::collections::HashMap;

use crate::algo::tarjan;
use crate::error::EngineError;

/// Below this id, [`IdIndex`] indexes directly into a `Vec`; at or above it,
/// lookups fall back to a `HashMap`. Real-world inputs densify ids starting
/// from zero, so the common case never touches the map.
const DENSE_LIMIT: usize = 1 << 16;

/// Maps sparse `u32` node ids to dense arena indices.
///
/// A hybrid of direct vector indexing (fast, but wasteful for a few huge
/// ids) and a hash map (handles any id, a bit slower) — see `DESIGN.md`'s
/// "dense integer arena" note.
#[derive(Debug, Default)]
pub(crate) struct IdIndex {
    dense: Vec<Option<u32>>,
    sparse: HashMap<u32, u32>,
}

impl IdIndex {
    pub(crate) fn get(&self, id: u32) -> Option<u32> {
        let ix = id as usize;
        if ix < DENSE_LIMIT {
            self.dense.get(ix).copied().flatten()
        } else {
            self.sparse.get(&id).copied()
        }
    }

    fn insert(&mut self, id: u32, arena_ix: u32) {
        let ix = id as usize;
        if ix < DENSE_LIMIT {
            if self.dense.len() <= ix {
                self.dense.resize(ix + 1, None);
            }
            self.dense[ix] = Some(arena_ix);
        } else {
            self.sparse.insert(id, arena_ix);
        }
    }
}

/// One arena slot: a node's successor list plus the solver's private state.
#[derive(Debug, Clone)]
pub(crate) struct NodeRecord {
    pub(crate) id: u32,
    pub(crate) successors: Vec<u32>,
    pub(crate) index: Option<usize>,
    pub(crate) low_link: usize,
    pub(crate) on_stack: bool,
}

impl NodeRecord {
    fn new(id: u32) -> Self {
        Self {
            id,
            successors: Vec::new(),
            index: None,
            low_link: 0,
            on_stack: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Building,
    Sealed,
}

/// An incrementally-built directed graph and its SCC solver.
///
/// ```
/// use hopscotch::engine::Engine;
///
/// let mut engine = Engine::new();
/// engine.add(0, &[1]).unwrap();
/// engine.add(1, &[0]).unwrap();
/// engine.seal().unwrap();
///
/// let mut groups = Vec::new();
/// engine.solve(0, |id, members| groups.push((id, members.to_vec()))).unwrap();
/// assert_eq!(groups, vec![(0, vec![0, 1])]);
/// ```
#[derive(Debug)]
pub struct Engine {
    phase: Phase,
    index: IdIndex,
    nodes: Vec<NodeRecord>,
    sorted_ids: Vec<u32>,
    last_error: Cell<EngineError>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Used when `solve`'s `max_depth` argument is `0`. Large enough to
    /// accommodate chains of at least a few thousand nodes (spec.md §4.2)
    /// without masking a genuinely pathological input, since it still
    /// bounds the explicit work stack rather than leaving it unbounded.
    pub const DEFAULT_MAX_DEPTH: usize = 1 << 20;

    pub fn new() -> Self {
        Self {
            phase: Phase::Building,
            index: IdIndex::default(),
            nodes: Vec::new(),
            sorted_ids: Vec::new(),
            last_error: Cell::new(EngineError::None),
        }
    }

    fn fail(&self, kind: EngineError) -> EngineError {
        self.last_error.set(kind);
        kind
    }

    fn get_or_create(&mut self, id: u32) -> usize {
        if let Some(ix) = self.index.get(id) {
            return ix as usize;
        }
        let ix = self.nodes.len() as u32;
        self.nodes.push(NodeRecord::new(id));
        self.index.insert(id, ix);
        ix as usize
    }

    /// Appends `successors` to `id`'s successor list, registering `id` and
    /// any new successor id with an empty list on first sight.
    ///
    /// Calling `add` again for an id already seen appends rather than
    /// replaces; passing an empty slice is valid.
    pub fn add(&mut self, id: u32, successors: &[u32]) -> Result<(), EngineError> {
        if self.phase != Phase::Building {
            return Err(self.fail(EngineError::Misuse));
        }
        let ix = self.get_or_create(id);
        for &succ in successors {
            self.get_or_create(succ);
        }
        self.nodes[ix].successors.extend_from_slice(successors);
        tracing::debug!(id, successor_count = successors.len(), "node registered");
        Ok(())
    }

    /// Freezes the set of referenced ids and prepares solver-private state.
    /// No further `add` calls are accepted afterward.
    pub fn seal(&mut self) -> Result<(), EngineError> {
        if self.phase != Phase::Building {
            return Err(self.fail(EngineError::Misuse));
        }
        self.sorted_ids = self.nodes.iter().map(|n| n.id).collect();
        self.sorted_ids.sort_unstable();
        self.phase = Phase::Sealed;
        tracing::debug!(node_count = self.nodes.len(), "engine sealed");
        Ok(())
    }

    /// Computes the condensation and streams each SCC to `callback` in
    /// reverse topological order. `max_depth` bounds the explicit work
    /// stack; `0` selects [`Engine::DEFAULT_MAX_DEPTH`].
    pub fn solve(
        &mut self,
        max_depth: usize,
        callback: impl FnMut(u32, &[u32]),
    ) -> Result<(), EngineError> {
        if self.phase != Phase::Sealed {
            return Err(self.fail(EngineError::Misuse));
        }
        let max_depth = if max_depth == 0 { Self::DEFAULT_MAX_DEPTH } else { max_depth };
        match tarjan::solve(&mut self.nodes, &self.index, &self.sorted_ids, max_depth, callback) {
            Ok(()) => Ok(()),
            Err(kind) => Err(self.fail(kind)),
        }
    }

    /// Returns the raw, post-seal successor list for `id`, including
    /// duplicates and self-edges, in the order they were added.
    pub fn get_successors(&self, id: u32) -> Result<&[u32], EngineError> {
        if self.phase != Phase::Sealed {
            return Err(self.fail(EngineError::Misuse));
        }
        match self.index.get(id) {
            Some(ix) => Ok(&self.nodes[ix as usize].successors),
            None => Err(self.fail(EngineError::UnknownNode)),
        }
    }

    /// The kind of the most recent failure, or [`EngineError::None`] if
    /// nothing has failed yet. A later failure overwrites an earlier one.
    pub fn last_error(&self) -> EngineError {
        self.last_error.get()
    }
}
