//! Service layer for subintel.
//!
//! Sits between the presentation surfaces (HTTP, CLI) and the synthesizer
//! and store.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Holds trait objects")]

mod error;
mod orchestrator;
mod outcome;

pub use error::ServiceError;
pub use orchestrator::Orchestrator;
pub use outcome::{QueryFailure, QueryOutcome, QueryStatus};
