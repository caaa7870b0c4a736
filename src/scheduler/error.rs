use thiserror::Error;

/// Failures that abort a timetable generation run.
///
/// Empty input is not an error: a poll with no players or no court bookings
/// yields an empty timetable. The only fatal condition is a court
/// configuration the participant pool cannot staff.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The pool ran dry while filling courts: every active court needs two
    /// players per quantum, and some quantum could not find them.
    #[error("not enough participants for the configured courts: {available} available, {required} required")]
    InsufficientParticipants {
        /// Players available to the quantum that failed.
        available: usize,
        /// Two per active court.
        required: usize,
    },
}
