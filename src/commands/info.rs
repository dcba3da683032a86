use crate::formats::{load_election, sum_by_party};
use crate::model::CandidateRole;
use crate::util::file_digest;
use colored::*;
use itertools::Itertools;
use std::error::Error;
use std::path::Path;

/// Validate a snapshot and dump what it contains.
pub fn info(input_path: &Path, seats: Option<u32>) -> Result<(), Box<dyn Error>> {
    let loaded = load_election(input_path, seats)?;
    let input = &loaded.input;

    println!("📋 {}", input_path.display().to_string().bright_cyan());
    if let Some(name) = &input.metadata.name {
        println!("Election: {}", name.bright_white());
    }
    if let Some(date) = input.metadata.date {
        println!("Date: {}", date.format("%Y-%m-%d"));
    }
    println!("Seats: {}", input.seat_count.to_string().bright_yellow());
    println!(
        "Total votes: {}",
        input.total_votes().to_string().bright_green()
    );

    let candidate_counts = input.candidates.iter().counts_by(|c| (c.party_id, c.role));
    let box_totals = sum_by_party(&loaded.ballot_boxes);

    println!("\n{}", "Parties".bright_cyan().bold());
    for party in &input.parties {
        let count = |role: CandidateRole| candidate_counts.get(&(party.party_id, role)).copied().unwrap_or(0);
        let from_boxes = box_totals
            .get(&party.party_id)
            .map(|v| format!(" ({} from ballot boxes)", v))
            .unwrap_or_default();
        println!(
            "  [{}] {:<24} {:>8} votes{}  mayoral: {}  vice: {}  council: {}",
            party.party_id,
            party.party_name,
            party.total_votes,
            from_boxes,
            count(CandidateRole::Mayoral),
            count(CandidateRole::ViceMayoral),
            count(CandidateRole::Council)
        );
        if count(CandidateRole::Mayoral) > 1 {
            println!(
                "    {}",
                "⚠️  more than one mayoral candidate, only the first in list order is used".yellow()
            );
        }
    }

    if !loaded.ballot_boxes.is_empty() {
        let places = loaded
            .ballot_boxes
            .iter()
            .filter_map(|b| b.place.as_deref())
            .unique()
            .count();
        println!(
            "\nBallot boxes: {} across {} places",
            loaded.ballot_boxes.len().to_string().bright_yellow(),
            places
        );
    }

    if loaded.skipped_candidates > 0 {
        println!(
            "{}",
            format!(
                "⚠️  {} candidates skipped (unrecognized office)",
                loaded.skipped_candidates
            )
            .yellow()
        );
    }

    println!("Input sha1: {}", file_digest(input_path)?.dimmed());
    println!("{}", "✅ Snapshot is valid".bright_green());

    Ok(())
}
