//! Shared test helpers
//!
//! In-memory collaborators, sample records and assertions used by the unit
//! tests and by the integration tests under `tests/`.

#[cfg(any(test, debug_assertions))]
pub mod mocks;

#[cfg(any(test, debug_assertions))]
pub mod fixtures;

#[cfg(any(test, debug_assertions))]
pub mod assertions;
