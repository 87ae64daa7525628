//! Core domain types and ports for Snapgate.
//!
//! This crate holds the archive-resolution domain (outcomes, gatekeeper,
//! retry policy), the lookup-history model, persisted settings, and the
//! port traits the use cases are written against. No I/O lives here.

pub mod archive;
pub mod failure;
pub mod history;
pub mod notice;
pub mod ports;
pub mod settings;

pub use archive::{
    classify, AbsenceReason, ArchiveService, Budgets, ProbeError, ResolutionOutcome,
    ResolutionRequest, RetryPolicy, UncertainCause, UrlClass,
};
pub use failure::FailureCode;
pub use history::HistoryEntry;
