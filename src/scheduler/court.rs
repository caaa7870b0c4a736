use std::collections::BTreeMap;

/// Index of a court inside the configured [`CourtCatalog`].
pub type CourtId = usize;

/// The bookable courts and the time slot labels used when rendering
/// timetables.
///
/// Both lists are configuration rather than constants, so tests and other
/// deployments can run with arbitrary catalogs. The defaults match the club
/// the bot was written for: five courts and ten 45-minute slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourtCatalog {
    /// Court display names; a [`CourtId`] indexes into this list.
    pub courts: Vec<String>,
    /// Labels for consecutive booking blocks, in playing order.
    pub time_slots: Vec<String>,
}

impl CourtCatalog {
    /// Creates a catalog from explicit court names and slot labels.
    pub fn new(courts: Vec<String>, time_slots: Vec<String>) -> Self {
        Self { courts, time_slots }
    }

    /// Display name of a court, or `None` for an index outside the catalog.
    pub fn court_name(&self, court: CourtId) -> Option<&str> {
        self.courts.get(court).map(String::as_str)
    }
}

impl Default for CourtCatalog {
    fn default() -> Self {
        Self {
            courts: strings(&["1", "2", "3", "4", "5"]),
            time_slots: strings(&[
                "10:15", "11:00", "11:45", "12:30", "13:15", "14:00", "14:45", "15:30", "16:15",
                "17:00",
            ]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Remaining bookings per court, accumulated by the config editor for one
/// poll and consumed by a generation run.
///
/// Backed by a `BTreeMap` so every iteration walks courts in ascending id
/// order, which keeps quantum assignment deterministic. Courts without an
/// entry hold no bookings; [`CourtConfig::decay`] drops entries that reach
/// zero, so a court never comes back once its capacity is spent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourtConfig {
    bookings: BTreeMap<CourtId, u32>,
}

impl CourtConfig {
    /// Creates an empty config with no bookings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` bookings to `court`. The picker's double action adds 2,
    /// a plain pick adds 1; zero is a no-op so the map never holds dead
    /// entries.
    pub fn add_bookings(&mut self, court: CourtId, count: u32) {
        if count == 0 {
            return;
        }
        *self.bookings.entry(court).or_insert(0) += count;
    }

    /// Remaining bookings for `court`, zero when the court is not booked.
    pub fn remaining(&self, court: CourtId) -> u32 {
        self.bookings.get(&court).copied().unwrap_or(0)
    }

    /// Courts that still hold bookings, in ascending id order.
    pub fn active_courts(&self) -> Vec<CourtId> {
        self.bookings
            .iter()
            .filter(|(_, &remaining)| remaining > 0)
            .map(|(&court, _)| court)
            .collect()
    }

    /// Highest remaining booking count across all courts. This times the
    /// quantums per block is the length of the generated timetable.
    pub fn max_remaining(&self) -> u32 {
        self.bookings.values().copied().max().unwrap_or(0)
    }

    /// True when no court holds a booking.
    pub fn is_empty(&self) -> bool {
        !self.bookings.values().any(|&remaining| remaining > 0)
    }

    /// One decay step: every booked court loses one booking, and courts
    /// that hit zero leave the config for good.
    pub fn decay(&mut self) {
        for remaining in self.bookings.values_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        self.bookings.retain(|_, remaining| *remaining > 0);
    }

    /// `(court, remaining)` pairs in ascending id order, for rendering.
    pub fn iter(&self) -> impl Iterator<Item = (CourtId, u32)> + '_ {
        self.bookings.iter().map(|(&court, &remaining)| (court, remaining))
    }
}
