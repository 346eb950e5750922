#![doc = include_str!("../README.md")]

pub mod algo;
pub mod engine;
pub mod error;
pub mod frontend;
pub mod symtab;

pub use engine::Engine;
pub use error::{EngineError, FrontendError, SymtabError};
pub use symtab::Symtab;
