//! Domain types and pure logic for the O-1A readiness analyzer.
//!
//! Everything in this crate is synchronous and free of I/O: the fixed
//! criterion catalog and its USCIS guidance bundles, the verdict and
//! assessment types, challenge chat sessions, and the scoring engine.
//! Network and storage concerns live in the `visaprep-oracle` and
//! `visaprep-store` crates.

pub mod assessment;
pub mod chat;
pub mod criteria;
pub mod error;
pub mod guidance;
pub mod scoring;
pub mod types;
