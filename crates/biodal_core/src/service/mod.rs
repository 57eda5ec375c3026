//! Namespace use-case services.
//!
//! # Responsibility
//! - Expose typed operations per namespace on top of the generic DAL.
//! - Keep callers decoupled from column names and conflict keys.
//!
//! # Invariants
//! - Every operation takes an optional session and composes into a
//!   caller-owned transaction.

pub mod app_service;
pub mod literature_service;
pub mod topic_service;
pub mod trial_service;
