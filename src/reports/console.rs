use super::ApportionmentReport;
use crate::tabulator::Provenance;
use colored::*;

fn provenance_label(provenance: Provenance) -> ColoredString {
    match provenance {
        Provenance::List => "list".green(),
        Provenance::PromotedMayor => "promoted mayor".bright_yellow(),
        Provenance::Vacancy => "vacancy".red(),
    }
}

/// Print a human-readable summary of an apportionment report.
pub fn print_report(report: &ApportionmentReport, trace: bool) {
    let title = report.info.name.as_deref().unwrap_or("Council apportionment");
    println!("\n{}", title.bright_cyan().bold());
    if let Some(jurisdiction) = &report.info.jurisdiction {
        println!("{}: {}", "Jurisdiction".bright_white(), jurisdiction);
    }
    if let Some(date) = &report.info.date {
        println!("{}: {}", "Date".bright_white(), date);
    }
    println!("{}", "=".repeat(50).bright_cyan());

    println!(
        "{}: {}",
        "Valid votes".bright_white().bold(),
        report.total_valid_votes.to_string().bright_green()
    );
    println!(
        "{}: {:.2}",
        "Electoral quotient".bright_white().bold(),
        report.electoral_quotient
    );

    let winner = match &report.winning_party {
        Some(winner) => winner.bright_green().bold(),
        None => "—".dimmed(),
    };
    println!("{}: {}", "Winning party".bright_white().bold(), winner);

    if report.winning_party.is_none() {
        println!("{}", "No votes recorded yet, no seats allocated.".yellow());
    }

    if !report.winning_ticket.is_empty() {
        println!("\n{}", "Elected executive".bright_cyan().bold());
        for member in &report.winning_ticket {
            println!("  {} ({})", member.name.bright_white(), member.role);
        }
    }

    println!(
        "\n{}",
        format!("Seat distribution ({} seats)", report.seat_count)
            .bright_cyan()
            .bold()
    );
    for share in &report.seat_distribution {
        let votes = report
            .calculation_detail
            .iter()
            .find(|item| item.party_id == share.party_id)
            .map(|item| item.total_votes)
            .unwrap_or(0);
        println!(
            "  {:<24} {:>8} votes  {} seats",
            share.party_name,
            votes,
            share.seats.to_string().bright_yellow()
        );
    }

    if trace && !report.seat_awards.is_empty() {
        println!("\n{}", "Award order".bright_cyan().bold());
        for award in &report.seat_awards {
            println!("  #{:<3} {}", award.sequence, award.party_name);
        }
    }

    if !report.elected_seats.is_empty() {
        println!("\n{}", "Elected council".bright_cyan().bold());
        for seat in &report.elected_seats {
            println!(
                "  {:>2}. {:<28} {:<20} #{} {}",
                seat.global_seat_number,
                seat.name,
                seat.party_name,
                seat.position_within_party,
                provenance_label(seat.provenance)
            );
        }
    }

    if let Some(digest) = &report.info.input_digest {
        println!("\n{}: {}", "Input sha1".dimmed(), digest.dimmed());
    }
    println!();
}
