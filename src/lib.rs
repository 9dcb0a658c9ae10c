//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one name and adds the pieces the
//! terminal binary needs: environment configuration, JSON file stores, a file
//! logger and a bell audio sink.

pub mod bell;
pub mod config;
pub mod logger;
pub mod store;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use bell::BellAudio;
pub use config::RunConfig;
pub use logger::FileLogger;
pub use store::JsonFileStore;
