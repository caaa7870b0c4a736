//! Plain-text rendering of court configs and timetables for the chat.

use crate::scheduler::{CourtCatalog, CourtConfig, CourtId, Timetable};

/// Renders the accumulated court config, the message the config editor
/// keeps rewriting while bookings are added.
pub fn format_court_config(config: &CourtConfig, catalog: &CourtCatalog) -> String {
    let mut text = String::from("Current court config:\n\n");

    if config.is_empty() {
        text.push_str("No courts booked yet.");
        return text;
    }

    for (court, remaining) in config.iter() {
        let unit = if remaining == 1 { "booking" } else { "bookings" };
        text.push_str(&format!(
            "{}: {} {}\n",
            court_label(court, catalog),
            remaining,
            unit
        ));
    }
    text
}

/// Renders a finished timetable, one labelled section per quantum.
///
/// Blocks are labelled with the catalog's time slots while they last, then
/// with numbered blocks, so an unusually long session still renders.
pub fn format_timetable(
    timetable: &Timetable,
    catalog: &CourtCatalog,
    quantums_per_block: u32,
) -> String {
    if timetable.is_empty() {
        return "Nothing to schedule yet: book at least one court and wait for players to answer the poll.".to_string();
    }

    let per_block = quantums_per_block.max(1) as usize;
    let mut text = format!("Timetable ({} quantums):\n", timetable.len());

    for (index, quantum) in timetable.quantums.iter().enumerate() {
        let block = index / per_block;
        let round = index % per_block + 1;
        let slot = match catalog.time_slots.get(block) {
            Some(label) => label.clone(),
            None => format!("Block {}", block + 1),
        };
        text.push_str(&format!("\n🕐 {} · round {}/{}\n", slot, round, per_block));

        for assignment in &quantum.assignments {
            text.push_str(&format!(
                "{}: {} vs {}\n",
                court_label(assignment.court, catalog),
                assignment.pair[0].player.name,
                assignment.pair[1].player.name
            ));
        }

        if !quantum.relaxing.is_empty() {
            let resting: Vec<&str> = quantum
                .relaxing
                .iter()
                .map(|p| p.player.name.as_str())
                .collect();
            text.push_str(&format!("Resting: {}\n", resting.join(", ")));
        }
    }

    text
}

fn court_label(court: CourtId, catalog: &CourtCatalog) -> String {
    match catalog.court_name(court) {
        Some(name) => format!("Court {}", name),
        None => format!("Court #{}", court),
    }
}
