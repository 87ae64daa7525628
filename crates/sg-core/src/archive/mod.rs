//! Archive-resolution domain: services, probe outcomes, URL gatekeeping,
//! probe budgets and the bounded retry policy.

pub mod budgets;
pub mod gatekeeper;
pub mod outcome;
pub mod retry;
pub mod service;

pub use budgets::Budgets;
pub use gatekeeper::{classify, InvalidUrlReason, UrlClass, UNSUPPORTED_PREFIXES};
pub use outcome::{AbsenceReason, ProbeError, ResolutionOutcome, ResolutionRequest, UncertainCause};
pub use retry::RetryPolicy;
pub use service::ArchiveService;
