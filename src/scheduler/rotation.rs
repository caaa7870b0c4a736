//! The working queues behind a single scheduling round.
//!
//! Between two quantums every participant flows through one of two deques:
//! `ready` for players eligible to be put on a court, `must_rest` for
//! players who just hit the consecutive-play limit. The front/back insertion
//! rules below are the fairness tie-break of the whole scheduler, so their
//! ordering is load-bearing and pinned by tests.

use std::collections::VecDeque;

use super::court::CourtId;
use super::error::ScheduleError;
use super::participant::Participant;
use super::quantum::{CourtAssignment, Quantum};

/// Queues feeding one quantum's court assignments.
#[derive(Debug)]
pub(crate) struct RotationQueues {
    ready: VecDeque<Participant>,
    must_rest: VecDeque<Participant>,
}

impl RotationQueues {
    /// Builds the queues for the upcoming quantum from the finished one.
    ///
    /// Players coming off a court join the back of `ready`, unless one more
    /// quantum would push them past `max_consecutive`, in which case they
    /// join the back of `must_rest`. Both groups keep the previous quantum's
    /// court-then-pair order. The previous relaxing collection is promoted
    /// afterwards: counters reset to zero, each player pushed to the front
    /// of `ready` in stored order, so the last stored rester ends up first
    /// in line for a slot.
    pub(crate) fn from_previous(previous: &Quantum, max_consecutive: u32) -> Self {
        let mut ready = VecDeque::new();
        let mut must_rest = VecDeque::new();

        for participant in previous.assigned() {
            if participant.consecutive_played + 1 > max_consecutive {
                must_rest.push_back(participant.clone());
            } else {
                ready.push_back(participant.clone());
            }
        }

        for rested in &previous.relaxing {
            let mut promoted = rested.clone();
            promoted.consecutive_played = 0;
            ready.push_front(promoted);
        }

        Self { ready, must_rest }
    }

    /// Pops the next player for a court slot, preferring `ready` and falling
    /// back to the front of `must_rest` when every eligible player is
    /// already placed. The consecutive-play counter is bumped here, at
    /// selection time, so it always counts the quantum being built.
    fn next_player(&mut self) -> Option<Participant> {
        let mut participant = self
            .ready
            .pop_front()
            .or_else(|| self.must_rest.pop_front())?;
        participant.consecutive_played += 1;
        Some(participant)
    }

    /// Fills every active court with a pair and returns the finished
    /// quantum.
    ///
    /// Courts are visited in the given (ascending) order, two pops per
    /// court. Whatever is left over becomes the new relaxing collection:
    /// the `must_rest` remainder in queue order, with the `ready` remainder
    /// front-inserted one by one from the back, which keeps ready leftovers
    /// ahead of resting players at the next promotion.
    ///
    /// Running out of players mid-fill is fatal. A quantum is never emitted
    /// with a half-staffed court.
    pub(crate) fn assign(mut self, active_courts: &[CourtId]) -> Result<Quantum, ScheduleError> {
        let available = self.ready.len() + self.must_rest.len();
        let required = active_courts.len() * 2;

        let mut assignments = Vec::with_capacity(active_courts.len());
        for &court in active_courts {
            let first = self
                .next_player()
                .ok_or(ScheduleError::InsufficientParticipants { available, required })?;
            let second = self
                .next_player()
                .ok_or(ScheduleError::InsufficientParticipants { available, required })?;
            assignments.push(CourtAssignment {
                court,
                pair: [first, second],
            });
        }

        let mut relaxing: VecDeque<Participant> = VecDeque::new();
        relaxing.extend(self.must_rest.drain(..));
        while let Some(leftover) = self.ready.pop_back() {
            relaxing.push_front(leftover);
        }

        Ok(Quantum {
            assignments,
            relaxing: relaxing.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::participant::Player;

    fn participant(id: i64, consecutive_played: u32) -> Participant {
        Participant {
            player: Player::new(id, format!("p{id}")),
            consecutive_played,
        }
    }

    fn quantum_with(assigned: &[(i64, u32)], relaxing: &[(i64, u32)]) -> Quantum {
        let mut assignments = Vec::new();
        for (court, pair) in assigned.chunks(2).enumerate() {
            assignments.push(CourtAssignment {
                court,
                pair: [
                    participant(pair[0].0, pair[0].1),
                    participant(pair[1].0, pair[1].1),
                ],
            });
        }
        Quantum {
            assignments,
            relaxing: relaxing.iter().map(|&(id, c)| participant(id, c)).collect(),
        }
    }

    fn ready_ids(queues: &RotationQueues) -> Vec<i64> {
        queues.ready.iter().map(|p| p.player.id).collect()
    }

    fn must_rest_ids(queues: &RotationQueues) -> Vec<i64> {
        queues.must_rest.iter().map(|p| p.player.id).collect()
    }

    #[test]
    fn test_players_under_the_limit_stay_ready() {
        let previous = quantum_with(&[(1, 1), (2, 1)], &[]);
        let queues = RotationQueues::from_previous(&previous, 2);

        assert_eq!(ready_ids(&queues), vec![1, 2]);
        assert!(must_rest_ids(&queues).is_empty());
    }

    #[test]
    fn test_players_at_the_limit_are_forced_to_rest() {
        let previous = quantum_with(&[(1, 2), (2, 1), (3, 2), (4, 1)], &[]);
        let queues = RotationQueues::from_previous(&previous, 2);

        assert_eq!(ready_ids(&queues), vec![2, 4]);
        assert_eq!(must_rest_ids(&queues), vec![1, 3]);
    }

    #[test]
    fn test_relaxed_players_are_promoted_to_the_front_reversed() {
        // Stored relaxing order [5, 6, 7]; each push_front puts the later
        // stored player ahead, so 7 claims the first slot.
        let previous = quantum_with(&[(1, 1), (2, 1)], &[(5, 0), (6, 0), (7, 0)]);
        let queues = RotationQueues::from_previous(&previous, 2);

        assert_eq!(ready_ids(&queues), vec![7, 6, 5, 1, 2]);
    }

    #[test]
    fn test_promotion_resets_the_counter() {
        let previous = quantum_with(&[], &[(5, 2)]);
        let queues = RotationQueues::from_previous(&previous, 2);

        assert_eq!(queues.ready[0].consecutive_played, 0);
    }

    #[test]
    fn test_assign_fills_courts_in_ascending_order() {
        let previous = quantum_with(&[], &[(1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]);
        let queues = RotationQueues::from_previous(&previous, 2);
        // Promotion reversed the list: ready is [5, 4, 3, 2, 1].
        let quantum = queues.assign(&[0, 1]).unwrap();

        assert_eq!(quantum.assignments.len(), 2);
        assert_eq!(quantum.assignments[0].court, 0);
        assert_eq!(quantum.assignments[0].pair[0].player.id, 5);
        assert_eq!(quantum.assignments[0].pair[1].player.id, 4);
        assert_eq!(quantum.assignments[1].court, 1);
        assert_eq!(quantum.assignments[1].pair[0].player.id, 3);
        assert_eq!(quantum.assignments[1].pair[1].player.id, 2);
        assert_eq!(quantum.relaxing.len(), 1);
        assert_eq!(quantum.relaxing[0].player.id, 1);
    }

    #[test]
    fn test_assign_bumps_counters_at_selection_time() {
        let previous = quantum_with(&[(1, 1), (2, 1)], &[(3, 0), (4, 0)]);
        let queues = RotationQueues::from_previous(&previous, 2);
        // ready is [4, 3, 1, 2]; everyone assigned gets their counter bumped.
        let quantum = queues.assign(&[0, 1]).unwrap();

        let counters: Vec<(i64, u32)> = quantum
            .assigned()
            .map(|p| (p.player.id, p.consecutive_played))
            .collect();
        assert_eq!(counters, vec![(4, 1), (3, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_assign_falls_back_to_resting_players_when_ready_runs_dry() {
        let previous = quantum_with(&[(1, 2), (2, 2), (3, 1), (4, 1)], &[]);
        let queues = RotationQueues::from_previous(&previous, 2);
        // ready [3, 4], must_rest [1, 2]: a two-court fill has to dip into
        // the resting queue, front first.
        let quantum = queues.assign(&[0, 1]).unwrap();

        let ids: Vec<i64> = quantum.assigned().map(|p| p.player.id).collect();
        assert_eq!(ids, vec![3, 4, 1, 2]);
        assert_eq!(quantum.assignments[1].pair[0].consecutive_played, 3);
    }

    #[test]
    fn test_leftovers_relax_with_ready_players_ahead() {
        let previous = quantum_with(
            &[(1, 2), (2, 2)],
            &[(3, 0), (4, 0), (5, 0), (6, 0)],
        );
        let queues = RotationQueues::from_previous(&previous, 2);
        // ready [6, 5, 4, 3], must_rest [1, 2]; one court consumes 6 and 5.
        let quantum = queues.assign(&[0]).unwrap();

        let relaxing_ids: Vec<i64> = quantum.relaxing.iter().map(|p| p.player.id).collect();
        assert_eq!(relaxing_ids, vec![4, 3, 1, 2]);
    }

    #[test]
    fn test_assign_fails_when_the_pool_runs_dry() {
        let previous = quantum_with(&[], &[(1, 0), (2, 0), (3, 0)]);
        let queues = RotationQueues::from_previous(&previous, 2);
        let err = queues.assign(&[0, 1]).unwrap_err();

        assert_eq!(
            err,
            ScheduleError::InsufficientParticipants {
                available: 3,
                required: 4,
            }
        );
    }

    #[test]
    fn test_assign_with_no_courts_relaxes_everyone() {
        let previous = quantum_with(&[(1, 1), (2, 1)], &[(3, 0)]);
        let queues = RotationQueues::from_previous(&previous, 2);
        // ready [3, 1, 2]; without courts the whole queue relaxes in order.
        let quantum = queues.assign(&[]).unwrap();

        assert!(quantum.assignments.is_empty());
        let relaxing_ids: Vec<i64> = quantum.relaxing.iter().map(|p| p.player.id).collect();
        assert_eq!(relaxing_ids, vec![3, 1, 2]);
    }
}
