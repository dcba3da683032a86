//! Maps the seat-award sequence onto named seat-holders.
//!
//! A losing party with a registered mayoral candidate gives its first
//! council seat to that candidate. All other seats are filled from the
//! party's council list in list order, and a position-labeled vacancy is
//! emitted once the list runs out.

use super::allocator::{Allocation, SeatAward};
use crate::model::{CandidateEntry, CandidateRole, ElectionConfig, PartyId};
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    List,
    PromotedMayor,
    Vacancy,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::List => write!(f, "list"),
            Provenance::PromotedMayor => write!(f, "promoted-mayor"),
            Provenance::Vacancy => write!(f, "vacancy"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectedSeat {
    pub global_seat_number: u32,
    pub name: String,
    pub party_id: PartyId,
    pub party_name: String,
    pub position_within_party: u32,
    pub provenance: Provenance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegationSeat {
    pub position: u32,
    pub name: String,
    pub provenance: Provenance,
}

/// Seats won by one party, in the order they were resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyDelegation {
    pub party_id: PartyId,
    pub party_name: String,
    pub total_seats: u32,
    pub elected: Vec<DelegationSeat>,
}

/// A party's candidates, split by role. Council names are in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartyRoster {
    pub mayoral: Option<String>,
    pub vice_mayoral: Option<String>,
    pub council: Vec<String>,
}

/// Candidate rosters for every party that registered at least one candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rosters {
    by_party: BTreeMap<PartyId, PartyRoster>,
}

impl Rosters {
    /// Group candidates per party. Council lists are ordered by `list_order`
    /// with input position breaking ties. When a party registers several
    /// candidates for an executive role, the one with the lowest `list_order`
    /// (then earliest in the input) is kept.
    pub fn from_candidates(candidates: &[CandidateEntry]) -> Rosters {
        let grouped = candidates
            .iter()
            .enumerate()
            .into_group_map_by(|(_, c)| c.party_id);

        let by_party = grouped
            .into_iter()
            .map(|(party_id, entries)| {
                let ordered: Vec<&CandidateEntry> = entries
                    .into_iter()
                    .sorted_by_key(|(position, c)| (c.list_order, *position))
                    .map(|(_, c)| c)
                    .collect();

                let roster = PartyRoster {
                    mayoral: single_for_role(party_id, &ordered, CandidateRole::Mayoral),
                    vice_mayoral: single_for_role(party_id, &ordered, CandidateRole::ViceMayoral),
                    council: ordered
                        .iter()
                        .filter(|c| c.role == CandidateRole::Council)
                        .map(|c| c.name.clone())
                        .collect(),
                };
                (party_id, roster)
            })
            .collect();

        Rosters { by_party }
    }

    pub fn get(&self, party_id: PartyId) -> Option<&PartyRoster> {
        self.by_party.get(&party_id)
    }

    pub fn mayoral(&self, party_id: PartyId) -> Option<&str> {
        self.get(party_id).and_then(|r| r.mayoral.as_deref())
    }

    pub fn council(&self, party_id: PartyId) -> &[String] {
        self.get(party_id).map(|r| r.council.as_slice()).unwrap_or(&[])
    }
}

fn single_for_role(party_id: PartyId, ordered: &[&CandidateEntry], role: CandidateRole) -> Option<String> {
    let mut matches = ordered.iter().filter(|c| c.role == role);
    let first = matches.next()?;
    let extra = matches.count();
    if extra > 0 {
        warn!(
            party_id,
            %role,
            kept = %first.name,
            ignored = extra,
            "party registers more than one candidate for this role"
        );
    }
    Some(first.name.clone())
}

/// Next-unread position in a party's council list, plus seats resolved so far.
#[derive(Debug, Clone, Copy, Default)]
struct RosterCursor {
    next: usize,
    resolved: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub seats: Vec<ElectedSeat>,
    pub delegations: Vec<PartyDelegation>,
}

pub struct CandidateResolver<'a> {
    rosters: &'a Rosters,
    winner: Option<PartyId>,
    config: &'a ElectionConfig,
}

impl<'a> CandidateResolver<'a> {
    pub fn new(rosters: &'a Rosters, winner: Option<PartyId>, config: &'a ElectionConfig) -> Self {
        CandidateResolver { rosters, winner, config }
    }

    pub fn resolve(&self, allocation: &Allocation) -> Resolution {
        let seat_limit = allocation.awards.len() as u32;

        let mut delegations: Vec<PartyDelegation> = allocation
            .detail
            .iter()
            .filter(|item| item.seats_won > 0)
            .map(|item| PartyDelegation {
                party_id: item.party_id,
                party_name: item.party_name.clone(),
                total_seats: item.seats_won,
                elected: Vec::new(),
            })
            .collect();

        let mut cursors: BTreeMap<PartyId, RosterCursor> = BTreeMap::new();
        let mut seats = Vec::new();

        for award in &allocation.awards {
            if seats.len() as u32 >= seat_limit {
                break;
            }

            let delegation = match delegations.iter_mut().find(|d| d.party_id == award.party_id) {
                Some(delegation) => delegation,
                None => continue,
            };
            if delegation.elected.len() as u32 >= delegation.total_seats {
                continue;
            }

            let cursor = cursors.entry(award.party_id).or_default();
            let (name, provenance, position) = self.fill_seat(award, cursor);

            debug!(
                seat = award.sequence,
                party = %award.party_name,
                position,
                %provenance,
                name = %name,
                "seat resolved"
            );

            delegation.elected.push(DelegationSeat {
                position,
                name: name.clone(),
                provenance,
            });
            seats.push(ElectedSeat {
                global_seat_number: seats.len() as u32 + 1,
                name,
                party_id: award.party_id,
                party_name: delegation.party_name.clone(),
                position_within_party: position,
                provenance,
            });
        }

        Resolution { seats, delegations }
    }

    fn fill_seat(&self, award: &SeatAward, cursor: &mut RosterCursor) -> (String, Provenance, u32) {
        let party_id = award.party_id;
        let position = cursor.resolved + 1;
        cursor.resolved = position;

        let mayoral = self.rosters.mayoral(party_id);

        if position == 1 && self.winner != Some(party_id) {
            if let Some(mayoral) = mayoral {
                return (mayoral.to_string(), Provenance::PromotedMayor, position);
            }
        }

        // The mayoral candidate already holds a seat (mayoralty or promotion)
        let list = self.rosters.council(party_id);
        while cursor.next < list.len() && Some(list[cursor.next].as_str()) == mayoral {
            cursor.next += 1;
        }

        match list.get(cursor.next) {
            Some(name) => {
                cursor.next += 1;
                (name.clone(), Provenance::List, position)
            }
            None => {
                warn!(
                    party = %award.party_name,
                    position,
                    "council list exhausted, seat left vacant"
                );
                (self.config.vacancy_name(position), Provenance::Vacancy, position)
            }
        }
    }
}
