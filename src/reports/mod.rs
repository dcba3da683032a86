use crate::tabulator::{AllocationItem, ElectedSeat, PartyDelegation, SeatAward, SeatShare, TicketMember};
use serde::Serialize;

pub mod console;
pub mod generator;

pub use generator::generate_report;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;

/// Full apportionment report, as handed to reporting and UI layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApportionmentReport {
    pub info: ElectionInfo,
    #[serde(rename = "totalValidVotes")]
    pub total_valid_votes: u64,
    /// Rounded for display; the allocation used full precision.
    #[serde(rename = "electoralQuotient")]
    pub electoral_quotient: f64,
    #[serde(rename = "winningParty")]
    pub winning_party: Option<String>,
    #[serde(rename = "winningTicket")]
    pub winning_ticket: Vec<TicketMember>,
    #[serde(rename = "seatCount")]
    pub seat_count: u32,
    #[serde(rename = "seatDistribution")]
    pub seat_distribution: Vec<SeatShare>,
    #[serde(rename = "calculationDetail")]
    pub calculation_detail: Vec<AllocationItem>,
    #[serde(rename = "seatAwards")]
    pub seat_awards: Vec<SeatAward>,
    pub delegations: Vec<PartyDelegation>,
    #[serde(rename = "electedSeats")]
    pub elected_seats: Vec<ElectedSeat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElectionInfo {
    pub name: Option<String>,
    pub jurisdiction: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "inputDigest")]
    pub input_digest: Option<String>,
}

impl ApportionmentReport {
    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
