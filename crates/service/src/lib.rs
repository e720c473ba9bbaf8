//! Service layer for the loan-product catalog.
//! - Per-entity services enforcing lifecycle, closed-set and reference rules.
//! - Document-store abstraction with a JSON file-backed implementation.
//! - Composition helpers that embed related records with graceful degradation.

pub mod catalog;
pub mod clients;
pub mod errors;
pub mod storage;
#[cfg(test)]
pub mod test_support;
