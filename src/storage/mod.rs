//! Storage layer for the persisted client settings.
//!
//! Configuration is a handful of flat values, stored as one TOML document. The
//! [`SettingsStore`] trait keeps the backend swappable.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction
//! - `file`: TOML file backend with atomic writes
//! - `memory`: In-process backend for tests

pub mod backend;
pub mod file;
pub mod memory;

pub use backend::SettingsStore;
pub use file::TomlFileStore;
pub use memory::MemoryStore;
