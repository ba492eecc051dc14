//! FFI boundary (PyO3)
//!
//! Python-facing wrappers around the simulation layer. Compiled only with the
//! `pyo3` feature; the boundary is kept minimal - one configured simulator
//! object, plain dict/list payloads, no Rust types crossing over.

pub mod simulator;
pub mod types;
