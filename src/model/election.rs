use super::config::ElectionConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub type PartyId = u32;

/// Number of council seats to distribute. The mayoral seat is not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatCount(u32);

impl SeatCount {
    pub fn new(seats: u32) -> SeatCount {
        SeatCount(seats)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for SeatCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Aggregated vote total for one party in a single computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyTally {
    pub party_id: PartyId,
    pub party_name: String,
    pub total_votes: u64,
}

impl PartyTally {
    pub fn new(party_id: PartyId, party_name: &str, total_votes: u64) -> PartyTally {
        PartyTally {
            party_id,
            party_name: party_name.to_string(),
            total_votes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateRole {
    Mayoral,
    ViceMayoral,
    Council,
}

impl fmt::Display for CandidateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateRole::Mayoral => write!(f, "mayoral"),
            CandidateRole::ViceMayoral => write!(f, "vice-mayoral"),
            CandidateRole::Council => write!(f, "council"),
        }
    }
}

/// A registered candidate. `list_order` only matters for council candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateEntry {
    pub party_id: PartyId,
    pub name: String,
    pub role: CandidateRole,
    pub list_order: u32,
}

impl CandidateEntry {
    pub fn new(party_id: PartyId, name: &str, role: CandidateRole, list_order: u32) -> Self {
        CandidateEntry {
            party_id,
            name: name.to_string(),
            role,
            list_order,
        }
    }

    pub fn mayoral(party_id: PartyId, name: &str) -> Self {
        CandidateEntry::new(party_id, name, CandidateRole::Mayoral, 0)
    }

    pub fn council(party_id: PartyId, name: &str, list_order: u32) -> Self {
        CandidateEntry::new(party_id, name, CandidateRole::Council, list_order)
    }
}

/// Votes recorded in one ballot box, keyed by party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallotBoxCount {
    pub box_id: u32,
    pub place: Option<String>,
    pub box_name: Option<String>,
    pub counts: BTreeMap<PartyId, u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionMetadata {
    pub name: Option<String>,
    pub jurisdiction: Option<String>,
    pub date: Option<NaiveDate>,
}

/// A consistent snapshot of everything the engine consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectionInput {
    pub metadata: ElectionMetadata,
    pub config: ElectionConfig,
    pub seat_count: SeatCount,
    pub parties: Vec<PartyTally>,
    pub candidates: Vec<CandidateEntry>,
}

impl ElectionInput {
    pub fn new(seat_count: SeatCount, parties: Vec<PartyTally>, candidates: Vec<CandidateEntry>) -> Self {
        ElectionInput {
            metadata: ElectionMetadata::default(),
            config: ElectionConfig::default(),
            seat_count,
            parties,
            candidates,
        }
    }

    pub fn total_votes(&self) -> u64 {
        self.parties
            .iter()
            .fold(0u64, |total, p| total.saturating_add(p.total_votes))
    }
}
