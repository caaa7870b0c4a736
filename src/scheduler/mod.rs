//! The timetable generation core.
//!
//! A poll produces a participant list, the config editor produces per-court
//! booking counts, and this module turns the two into a rotation timetable:
//! a sequence of quantums, each staffing every active court with exactly two
//! players while everyone else rests. Fairness comes from two rules applied
//! between quantums: nobody plays more than `max_consecutive` quantums in a
//! row, and whoever just rested gets first claim on the next free slot.
//! Court capacity decays after every block of quantums until all bookings
//! are spent.
//!
//! Generation is pure and deterministic. All Telegram plumbing lives
//! elsewhere; this module never touches the network.

/// Court catalog and per-poll booking counts
pub mod court;
/// The error a generation run can fail with
pub mod error;
/// Player identity and per-run play counters
pub mod participant;
/// One scheduling round and its court assignments
pub mod quantum;
mod rotation;
/// The sequencer driving rotation, assignment and capacity decay
pub mod timetable;

pub use court::{CourtCatalog, CourtConfig, CourtId};
pub use error::ScheduleError;
pub use participant::{Participant, Player};
pub use quantum::{CourtAssignment, Quantum};
pub use timetable::{generate_timetable, Timetable};

/// Tunables of a generation run.
///
/// The defaults are the deployed values; both knobs stay configurable so the
/// rotation can be exercised with other shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerSettings {
    /// Most quantums a player may play back to back before a forced rest.
    pub max_consecutive: u32,
    /// Quantums in one booking block; capacity decays after each block.
    pub quantums_per_booking_block: u32,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            max_consecutive: 2,
            quantums_per_booking_block: 3,
        }
    }
}
