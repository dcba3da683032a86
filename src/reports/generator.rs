use super::{ApportionmentReport, ElectionInfo};
use crate::model::ElectionInput;
use crate::tabulator::ApportionmentResult;

/// Build the report for a finished apportionment run.
pub fn generate_report(
    input: &ElectionInput,
    result: &ApportionmentResult,
    input_digest: Option<String>,
) -> ApportionmentReport {
    let info = ElectionInfo {
        name: input.metadata.name.clone(),
        jurisdiction: input.metadata.jurisdiction.clone(),
        date: input.metadata.date.map(|d| d.format("%Y-%m-%d").to_string()),
        input_digest,
    };

    ApportionmentReport {
        info,
        total_valid_votes: result.total_votes,
        electoral_quotient: result.quotient.rounded(input.config.quotient_precision),
        winning_party: result.winner.as_ref().map(|w| w.party_name.clone()),
        winning_ticket: result.winning_ticket.clone(),
        seat_count: result.seat_count.get(),
        seat_distribution: result.distribution.clone(),
        calculation_detail: result.detail.clone(),
        seat_awards: result.awards.clone(),
        delegations: result.delegations.clone(),
        elected_seats: result.elected.clone(),
    }
}
