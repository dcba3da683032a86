//! Municipal election council apportionment.
//!
//! Vote totals flow one way: quotient, then seat allocation, then candidate
//! resolution. See [`tabulator::apportion`].

pub mod commands;
pub mod formats;
pub mod model;
pub mod reports;
pub mod tabulator;
pub mod util;

pub use model::{CandidateEntry, CandidateRole, ElectionInput, PartyTally, SeatCount};
pub use tabulator::{apportion, ApportionmentResult, Provenance};
