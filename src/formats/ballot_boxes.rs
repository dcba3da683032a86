use super::common::normalize_votes;
use super::RawBallotBox;
use crate::model::{BallotBoxCount, PartyId};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

/// Normalize raw per-box counts. Counts for parties that are not registered
/// are dropped.
pub(crate) fn normalize_boxes(raw: Vec<RawBallotBox>, known_parties: &BTreeSet<PartyId>) -> Vec<BallotBoxCount> {
    raw.into_iter()
        .map(|b| {
            let context = format!("ballot box {}", b.id);
            let counts = b
                .counts
                .into_iter()
                .filter(|(party_id, _)| {
                    let known = known_parties.contains(party_id);
                    if !known {
                        warn!(box_id = b.id, party_id = *party_id, "count for unknown party ignored");
                    }
                    known
                })
                .map(|(party_id, votes)| (party_id, votes.map(|v| normalize_votes(v, &context)).unwrap_or(0)))
                .collect();

            BallotBoxCount {
                box_id: b.id,
                place: b.place,
                box_name: b.name,
                counts,
            }
        })
        .collect()
}

/// Total votes per party across every ballot box.
pub fn sum_by_party(boxes: &[BallotBoxCount]) -> BTreeMap<PartyId, u64> {
    let mut totals = BTreeMap::new();
    for ballot_box in boxes {
        for (&party_id, &votes) in &ballot_box.counts {
            let total: &mut u64 = totals.entry(party_id).or_insert(0);
            *total = total.saturating_add(votes);
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ballot_box(box_id: u32, counts: &[(PartyId, u64)]) -> BallotBoxCount {
        BallotBoxCount {
            box_id,
            place: None,
            box_name: None,
            counts: counts.iter().copied().collect(),
        }
    }

    #[test]
    fn sums_across_boxes() {
        let boxes = vec![ballot_box(1, &[(1, 10), (2, 5)]), ballot_box(2, &[(1, 3)])];
        let totals = sum_by_party(&boxes);
        assert_eq!(totals.get(&1), Some(&13));
        assert_eq!(totals.get(&2), Some(&5));
        assert_eq!(totals.get(&3), None);
    }

    #[test]
    fn drops_unknown_parties_and_null_counts() {
        let raw = vec![RawBallotBox {
            id: 7,
            place: Some("Centro".to_string()),
            name: Some("Urna 7".to_string()),
            counts: vec![(1, Some(4.0)), (2, None), (9, Some(100.0))].into_iter().collect(),
        }];
        let known: BTreeSet<PartyId> = vec![1, 2].into_iter().collect();
        let boxes = normalize_boxes(raw, &known);

        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].counts, vec![(1, 4), (2, 0)].into_iter().collect::<BTreeMap<_, _>>());
        assert_eq!(boxes[0].place.as_deref(), Some("Centro"));
    }
}
