//! Sequential largest-remainder seat allocation.
//!
//! The raw winner starts with one quota already deducted (it holds the
//! mayoralty). Every seat then goes to the party with the largest current
//! remainder, and that party pays one more quota for it.

use super::quotient::ElectoralQuotient;
use crate::model::{PartyId, PartyTally, SeatCount};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// Working state for one party during a single allocation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationItem {
    pub party_id: PartyId,
    pub party_name: String,
    pub total_votes: u64,
    pub remainder: f64,
    pub seats_won: u32,
}

impl AllocationItem {
    fn from_tally(tally: &PartyTally, remainder: f64) -> AllocationItem {
        AllocationItem {
            party_id: tally.party_id,
            party_name: tally.party_name.clone(),
            total_votes: tally.total_votes,
            remainder,
            seats_won: 0,
        }
    }

    /// Selection order: larger remainder, then more votes, then lower name.
    /// Party id settles exact duplicates so the outcome never depends on
    /// input order.
    fn priority(&self, other: &AllocationItem) -> Ordering {
        self.remainder
            .total_cmp(&other.remainder)
            .then_with(|| self.total_votes.cmp(&other.total_votes))
            .then_with(|| other.party_name.cmp(&self.party_name))
            .then_with(|| other.party_id.cmp(&self.party_id))
    }
}

/// The k-th council seat and the party that won it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatAward {
    pub sequence: u32,
    pub party_id: PartyId,
    pub party_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub winner: Option<PartyTally>,
    pub awards: Vec<SeatAward>,
    /// Final working state, sorted by total votes descending.
    pub detail: Vec<AllocationItem>,
}

impl Allocation {
    pub fn seats_for(&self, party_id: PartyId) -> u32 {
        self.detail
            .iter()
            .find(|item| item.party_id == party_id)
            .map(|item| item.seats_won)
            .unwrap_or(0)
    }

    pub fn total_seats(&self) -> u32 {
        self.detail.iter().map(|item| item.seats_won).sum()
    }
}

/// The party with the most votes. Equal totals fall to the lower name, then
/// the lower party id.
pub fn raw_winner(parties: &[PartyTally]) -> Option<&PartyTally> {
    parties.iter().max_by(|a, b| {
        a.total_votes
            .cmp(&b.total_votes)
            .then_with(|| b.party_name.cmp(&a.party_name))
            .then_with(|| b.party_id.cmp(&a.party_id))
    })
}

pub fn allocate(parties: &[PartyTally], quotient: &ElectoralQuotient, seats: SeatCount) -> Allocation {
    if quotient.is_degenerate() || parties.is_empty() || seats.is_zero() {
        let detail = parties
            .iter()
            .map(|p| AllocationItem::from_tally(p, p.total_votes as f64))
            .collect();

        return Allocation {
            winner: None,
            awards: Vec::new(),
            detail: presentation_order(detail),
        };
    }

    let quota = quotient.value();
    let winner = raw_winner(parties).cloned();
    let winner_id = winner.as_ref().map(|w| w.party_id);

    let mut items: Vec<AllocationItem> = parties
        .iter()
        .map(|p| {
            let votes = p.total_votes as f64;
            let remainder = if Some(p.party_id) == winner_id {
                (votes - quota).max(0.0)
            } else {
                votes
            };
            AllocationItem::from_tally(p, remainder)
        })
        .collect();

    let mut awards = Vec::new();

    for sequence in 1..=seats.get() {
        let selected = match select_next(&items) {
            Some(index) => index,
            None => break,
        };

        let item = &mut items[selected];
        debug!(
            sequence,
            party = %item.party_name,
            remainder = item.remainder,
            "seat awarded"
        );

        awards.push(SeatAward {
            sequence,
            party_id: item.party_id,
            party_name: item.party_name.clone(),
        });
        item.seats_won += 1;
        item.remainder = (item.remainder - quota).max(0.0);
    }

    Allocation {
        winner,
        awards,
        detail: presentation_order(items),
    }
}

fn select_next(items: &[AllocationItem]) -> Option<usize> {
    items
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.priority(b))
        .map(|(index, _)| index)
}

fn presentation_order(mut items: Vec<AllocationItem>) -> Vec<AllocationItem> {
    items.sort_by(|a, b| {
        b.total_votes
            .cmp(&a.total_votes)
            .then_with(|| a.party_name.cmp(&b.party_name))
            .then_with(|| a.party_id.cmp(&b.party_id))
    });
    items
}
