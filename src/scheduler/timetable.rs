use tracing::debug;

use super::court::CourtConfig;
use super::error::ScheduleError;
use super::participant::Player;
use super::quantum::Quantum;
use super::rotation::RotationQueues;
use super::SchedulerSettings;

/// An ordered run of quantums produced by one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timetable {
    /// The quantums, in playing order.
    pub quantums: Vec<Quantum>,
}

impl Timetable {
    /// Number of quantums in the run.
    pub fn len(&self) -> usize {
        self.quantums.len()
    }

    /// True for the empty timetable produced by empty input.
    pub fn is_empty(&self) -> bool {
        self.quantums.is_empty()
    }
}

/// Generates the full timetable for one poll outcome.
///
/// The run owns `court_config`: capacity decay mutates this local copy only,
/// so callers hand in a snapshot and keep their live config untouched.
/// Identical inputs always produce identical output; there is no randomness
/// anywhere in the rotation.
///
/// The timetable is `max_remaining * quantums_per_booking_block` quantums
/// long. After each block of quantums every booked court loses one booking,
/// and courts that run out are retired for the rest of the run, with their
/// players folding back into the rotation.
///
/// # Errors
///
/// [`ScheduleError::InsufficientParticipants`] when some quantum cannot put
/// two players on every active court. No players or no bookings is not an
/// error; it yields an empty timetable.
pub fn generate_timetable(
    players: &[Player],
    mut court_config: CourtConfig,
    settings: &SchedulerSettings,
) -> Result<Timetable, ScheduleError> {
    let quantums_per_block = settings.quantums_per_booking_block as usize;
    let total_quantums = court_config.max_remaining() as usize * quantums_per_block;

    if total_quantums == 0 || players.is_empty() {
        debug!("Nothing to schedule: no court bookings or no players");
        return Ok(Timetable::default());
    }

    debug!(
        "Generating timetable: {} players, {} active courts, {} quantums",
        players.len(),
        court_config.active_courts().len(),
        total_quantums
    );

    let mut timetable = Timetable::default();
    let mut previous = Quantum::all_relaxing(players);

    for index in 0..total_quantums {
        let queues = RotationQueues::from_previous(&previous, settings.max_consecutive);
        let quantum = queues.assign(&court_config.active_courts())?;

        previous = quantum.clone();
        timetable.quantums.push(quantum);

        if (index + 1) % quantums_per_block == 0 {
            court_config.decay();
        }
    }

    Ok(timetable)
}
