//! Election snapshot loading.
//!
//! A snapshot is a JSON document (optionally `.json.gz`) holding parties,
//! candidates, optional per-ballot-box counts and the election config. The
//! loader normalizes it into an [`ElectionInput`] the engine can consume.

pub mod ballot_boxes;
pub mod common;

use crate::model::{
    BallotBoxCount, CandidateEntry, ElectionConfig, ElectionInput, ElectionMetadata, PartyId, PartyTally,
    MAX_SEAT_COUNT,
};
use crate::util::read_serialized;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::{debug, warn};

pub use ballot_boxes::sum_by_party;
pub use common::{classify_role, normalize_votes};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Seat count missing: set config.seatCount in the snapshot or pass --seats")]
    MissingSeatCount,
    #[error("Seat count {0} exceeds the supported maximum of {}", MAX_SEAT_COUNT)]
    SeatCountTooLarge(u32),
    #[error("Party id {0} appears more than once")]
    DuplicateParty(PartyId),
    #[error("Candidate {candidate:?} references unknown party id {party_id}")]
    UnknownParty { candidate: String, party_id: PartyId },
    #[error("Invalid election date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, InputError>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    jurisdiction: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    config: ElectionConfig,
    parties: Vec<RawParty>,
    #[serde(default)]
    candidates: Vec<RawCandidate>,
    #[serde(default)]
    ballot_boxes: Vec<RawBallotBox>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawParty {
    id: PartyId,
    name: String,
    #[serde(default)]
    total_votes: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCandidate {
    #[serde(default)]
    id: Option<u32>,
    party_id: PartyId,
    name: String,
    office: String,
    #[serde(default)]
    list_order: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawBallotBox {
    pub(crate) id: u32,
    #[serde(default)]
    pub(crate) place: Option<String>,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) counts: BTreeMap<PartyId, Option<f64>>,
}

/// A normalized snapshot plus what was read alongside it.
#[derive(Debug, Clone)]
pub struct LoadedElection {
    pub input: ElectionInput,
    pub ballot_boxes: Vec<BallotBoxCount>,
    pub skipped_candidates: usize,
}

pub fn load_election(path: &Path, seats_override: Option<u32>) -> Result<LoadedElection> {
    debug!(path = %path.display(), "reading election snapshot");
    let raw: RawSnapshot = read_serialized(path)?;
    normalize(raw, seats_override)
}

pub fn parse_election(json: &str, seats_override: Option<u32>) -> Result<LoadedElection> {
    let raw: RawSnapshot = serde_json::from_str(json)?;
    normalize(raw, seats_override)
}

fn normalize(raw: RawSnapshot, seats_override: Option<u32>) -> Result<LoadedElection> {
    let config = raw.config.with_overrides(seats_override);
    let seat_count = config.seat_count.ok_or(InputError::MissingSeatCount)?;
    if seat_count.get() > MAX_SEAT_COUNT {
        return Err(InputError::SeatCountTooLarge(seat_count.get()));
    }

    let date = match raw.date {
        Some(text) => Some(
            NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| InputError::InvalidDate(text))?,
        ),
        None => None,
    };

    let mut seen = BTreeSet::new();
    for party in &raw.parties {
        if !seen.insert(party.id) {
            return Err(InputError::DuplicateParty(party.id));
        }
    }

    let ballot_boxes = ballot_boxes::normalize_boxes(raw.ballot_boxes, &seen);
    let box_totals = sum_by_party(&ballot_boxes);

    let parties: Vec<PartyTally> = raw
        .parties
        .into_iter()
        .map(|p| {
            let total_votes = match p.total_votes {
                Some(votes) => normalize_votes(votes, &p.name),
                None => box_totals.get(&p.id).copied().unwrap_or(0),
            };
            PartyTally {
                party_id: p.id,
                party_name: p.name,
                total_votes,
            }
        })
        .collect();

    let mut candidates = Vec::with_capacity(raw.candidates.len());
    let mut skipped_candidates = 0;
    for (position, c) in raw.candidates.into_iter().enumerate() {
        if !seen.contains(&c.party_id) {
            return Err(InputError::UnknownParty {
                candidate: c.name,
                party_id: c.party_id,
            });
        }
        let role = match classify_role(&c.office) {
            Some(role) => role,
            None => {
                warn!(candidate = %c.name, office = %c.office, "unrecognized office, candidate skipped");
                skipped_candidates += 1;
                continue;
            }
        };
        let list_order = c.list_order.or(c.id).unwrap_or(position as u32);
        candidates.push(CandidateEntry {
            party_id: c.party_id,
            name: c.name.trim().to_string(),
            role,
            list_order,
        });
    }

    let input = ElectionInput {
        metadata: ElectionMetadata {
            name: raw.name,
            jurisdiction: raw.jurisdiction,
            date,
        },
        config,
        seat_count,
        parties,
        candidates,
    };

    Ok(LoadedElection {
        input,
        ballot_boxes,
        skipped_candidates,
    })
}
