//! Council apportionment engine: quotient, seat allocation, candidate resolution.
//!
//! Every run is a pure function of its [`ElectionInput`]; all working state
//! is built fresh and dropped when the result is returned.

pub mod allocator;
pub mod quotient;
pub mod resolver;

pub use allocator::{allocate, raw_winner, Allocation, AllocationItem, SeatAward};
pub use quotient::ElectoralQuotient;
pub use resolver::{
    CandidateResolver, DelegationSeat, ElectedSeat, PartyDelegation, PartyRoster, Provenance, Resolution,
    Rosters,
};

use crate::model::{CandidateRole, ElectionInput, PartyId, PartyTally, SeatCount};
use serde::Serialize;
use tracing::info;

/// Final seat count for one party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatShare {
    pub party_id: PartyId,
    pub party_name: String,
    pub seats: u32,
}

/// A member of the winning party's executive ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketMember {
    pub name: String,
    pub role: CandidateRole,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApportionmentResult {
    pub total_votes: u64,
    pub seat_count: SeatCount,
    pub quotient: ElectoralQuotient,
    pub winner: Option<PartyTally>,
    pub winning_ticket: Vec<TicketMember>,
    pub detail: Vec<AllocationItem>,
    pub distribution: Vec<SeatShare>,
    pub awards: Vec<SeatAward>,
    pub elected: Vec<ElectedSeat>,
    pub delegations: Vec<PartyDelegation>,
}

impl ApportionmentResult {
    /// No votes, no parties or no seats: everything is zero and nobody wins.
    pub fn is_degenerate(&self) -> bool {
        self.winner.is_none()
    }

    pub fn seats_for(&self, party_id: PartyId) -> u32 {
        self.distribution
            .iter()
            .find(|share| share.party_id == party_id)
            .map(|share| share.seats)
            .unwrap_or(0)
    }

    pub fn total_seats_awarded(&self) -> u32 {
        self.distribution.iter().map(|share| share.seats).sum()
    }
}

pub fn apportion(input: &ElectionInput) -> ApportionmentResult {
    let total_votes = input.total_votes();
    let seat_count = input.seat_count;
    let quotient = ElectoralQuotient::compute(total_votes, seat_count);

    let allocation = allocate(&input.parties, &quotient, seat_count);
    let winner_id = allocation.winner.as_ref().map(|w| w.party_id);

    let rosters = Rosters::from_candidates(&input.candidates);
    let resolution = CandidateResolver::new(&rosters, winner_id, &input.config).resolve(&allocation);

    let winning_ticket = winner_id
        .and_then(|id| rosters.get(id))
        .map(ticket_for)
        .unwrap_or_default();

    let distribution = allocation
        .detail
        .iter()
        .map(|item| SeatShare {
            party_id: item.party_id,
            party_name: item.party_name.clone(),
            seats: item.seats_won,
        })
        .collect();

    let result = ApportionmentResult {
        total_votes,
        seat_count,
        quotient,
        winner: allocation.winner,
        winning_ticket,
        detail: allocation.detail,
        distribution,
        awards: allocation.awards,
        elected: resolution.seats,
        delegations: resolution.delegations,
    };

    info!(
        total_votes,
        seats = %seat_count,
        quotient = result.quotient.value(),
        winner = result.winner.as_ref().map(|w| w.party_name.as_str()).unwrap_or("-"),
        elected = result.elected.len(),
        "apportionment complete"
    );

    result
}

fn ticket_for(roster: &PartyRoster) -> Vec<TicketMember> {
    let mayoral = roster.mayoral.as_ref().map(|name| TicketMember {
        name: name.clone(),
        role: CandidateRole::Mayoral,
    });
    let vice = roster.vice_mayoral.as_ref().map(|name| TicketMember {
        name: name.clone(),
        role: CandidateRole::ViceMayoral,
    });
    mayoral.into_iter().chain(vice).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CandidateEntry;

    fn abc_input() -> ElectionInput {
        ElectionInput::new(
            SeatCount::new(6),
            vec![
                PartyTally::new(1, "A", 600),
                PartyTally::new(2, "B", 300),
                PartyTally::new(3, "C", 100),
            ],
            vec![
                CandidateEntry::mayoral(1, "Ana"),
                CandidateEntry::new(1, "Vicky", CandidateRole::ViceMayoral, 0),
                CandidateEntry::council(1, "A1", 1),
                CandidateEntry::council(1, "A2", 2),
                CandidateEntry::council(1, "A3", 3),
                CandidateEntry::mayoral(2, "Beto"),
                CandidateEntry::council(2, "B1", 1),
                CandidateEntry::council(3, "C1", 1),
            ],
        )
    }

    #[test]
    fn full_run_matches_hand_computation() {
        let result = apportion(&abc_input());

        assert_eq!(result.total_votes, 1000);
        assert_eq!(result.winner.as_ref().map(|w| w.party_name.as_str()), Some("A"));
        assert_eq!(result.seats_for(1), 3);
        assert_eq!(result.seats_for(2), 2);
        assert_eq!(result.seats_for(3), 1);
        assert_eq!(result.total_seats_awarded(), 6);

        let elected: Vec<(&str, Provenance)> = result
            .elected
            .iter()
            .map(|s| (s.name.as_str(), s.provenance))
            .collect();
        assert_eq!(
            elected,
            vec![
                ("A1", Provenance::List),
                ("A2", Provenance::List),
                ("Beto", Provenance::PromotedMayor),
                ("A3", Provenance::List),
                ("B1", Provenance::List),
                ("C1", Provenance::List),
            ]
        );
    }

    #[test]
    fn winning_ticket_lists_mayor_then_vice() {
        let result = apportion(&abc_input());
        let ticket: Vec<(&str, CandidateRole)> = result
            .winning_ticket
            .iter()
            .map(|m| (m.name.as_str(), m.role))
            .collect();
        assert_eq!(
            ticket,
            vec![("Ana", CandidateRole::Mayoral), ("Vicky", CandidateRole::ViceMayoral)]
        );
    }

    #[test]
    fn winner_without_executive_candidates_has_empty_ticket() {
        let mut input = abc_input();
        input
            .candidates
            .retain(|c| !(c.party_id == 1 && c.role != CandidateRole::Council));
        let result = apportion(&input);
        assert!(result.winning_ticket.is_empty());
        assert_eq!(result.elected.len(), 6);
    }

    #[test]
    fn zero_votes_produce_zero_filled_result() {
        let mut input = abc_input();
        for party in &mut input.parties {
            party.total_votes = 0;
        }
        let result = apportion(&input);

        assert!(result.is_degenerate());
        assert!(result.winner.is_none());
        assert!(result.elected.is_empty());
        assert!(result.awards.is_empty());
        assert!(result.winning_ticket.is_empty());
        assert_eq!(result.quotient.value(), 0.0);
        assert_eq!(result.distribution.len(), 3);
        assert!(result.distribution.iter().all(|share| share.seats == 0));
    }

    #[test]
    fn zero_seats_produce_zero_filled_result() {
        let mut input = abc_input();
        input.seat_count = SeatCount::new(0);
        let result = apportion(&input);
        assert!(result.is_degenerate());
        assert_eq!(result.total_seats_awarded(), 0);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let input = abc_input();
        assert_eq!(apportion(&input), apportion(&input));
    }
}
