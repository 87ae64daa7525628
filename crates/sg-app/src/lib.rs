//! Use cases for Snapgate.
//!
//! Each use case is a struct over `Arc<dyn Port>` collaborators with an
//! `execute` method; the shell wires adapters in and calls them.

pub mod usecases;

pub use usecases::perform_archive::{ArchiveSuccess, PerformArchiveUseCase};
pub use usecases::precheck::{PrecheckHint, WarmPrecheckUseCase};
