//! # rubli-core
//!
//! Core types shared across all RUBLI crates.
//!
//! This crate provides:
//! - Entity structs for the records the analytics API serves (contracts,
//!   vendors, institutions, sectors, money-flow edges, network graphs)
//! - Workflow entities the client mutates (price hypotheses, investigation
//!   cases, watchlist items, dossiers, risk feedback)
//! - Status enums with review lifecycle transitions
//! - Response envelopes (paginated lists, dashboard summaries)
//! - Cross-cutting error types
//! - Display formatting for currency amounts and risk percentages

pub mod entities;
pub mod enums;
pub mod errors;
pub mod format;
pub mod responses;
