//! Error taxonomy for the engine, symbol table, and front-end.
//!
//! Each layer gets its own enum rather than one crate-wide error, matching
//! how the layers are meant to be consumed independently (a caller that only
//! embeds the engine never needs to know about front-end-specific failures).

use thiserror::Error;

/// Failure kinds surfaced by [`crate::engine::Engine`].
///
/// `None` is a sentinel, not a real failure: [`Engine::last_error`] returns
/// it when nothing has gone wrong, mirroring the source library's
/// `HOPSCOTCH_ERROR_NONE`.
///
/// [`Engine::last_error`]: crate::engine::Engine::last_error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// No error has occurred.
    #[error("no error")]
    None,
    /// An internal allocation could not be grown.
    ///
    /// Rust's global allocator aborts the process on allocation failure
    /// rather than returning an error, so no code path in this crate
    /// constructs this variant today; it is kept for interface parity with
    /// the source taxonomy and for a future `try_reserve`-based path.
    #[error("allocation failed")]
    Allocation,
    /// `solve`'s explicit work stack would have exceeded the configured
    /// depth cap.
    #[error("recursion depth exceeded")]
    RecursionDepth,
    /// An operation was called in the wrong lifecycle phase (e.g. `add`
    /// after `seal`, or `solve` before `seal`).
    #[error("operation not valid in current engine phase")]
    Misuse,
    /// `get_successors` was called with an id that was never referenced by
    /// any `add` call, as either a head or a successor.
    #[error("unknown node id")]
    UnknownNode,
}

/// Failure kinds surfaced by [`crate::symtab::Symtab`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SymtabError {
    /// A label longer than [`crate::symtab::MAX_LABEL_LEN`] bytes was
    /// interned.
    #[error("label exceeds {} bytes", crate::symtab::MAX_LABEL_LEN)]
    LabelTooLong,
}

/// Failure kinds surfaced by the front-end (`hopscotch::frontend`).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FrontendError {
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
    #[error("symbol table error: {0}")]
    Symtab(#[from] SymtabError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid argument: {0}")]
    InvalidFlag(String),
}
