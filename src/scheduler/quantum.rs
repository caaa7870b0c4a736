use super::court::CourtId;
use super::participant::{Participant, Player};

/// Two participants sharing one court for a single quantum, in the order
/// they were pulled from the queues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourtAssignment {
    /// The court being played on.
    pub court: CourtId,
    /// The pair on that court.
    pub pair: [Participant; 2],
}

/// One scheduling round: every active court staffed by a pair of players,
/// everyone else in the relaxing collection.
///
/// The relaxing collection is ordered, and its stored order is the promotion
/// order for the next quantum. Reordering it would change who gets the next
/// free slot, so it must be treated as part of the schedule itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quantum {
    /// Pair assignments in ascending court order.
    pub assignments: Vec<CourtAssignment>,
    /// Participants sitting this round out, in promotion order.
    pub relaxing: Vec<Participant>,
}

impl Quantum {
    /// The pseudo-quantum that seeds a generation run: no courts staffed,
    /// every player relaxing with a fresh counter.
    pub fn all_relaxing(players: &[Player]) -> Self {
        Self {
            assignments: Vec::new(),
            relaxing: players.iter().cloned().map(Participant::new).collect(),
        }
    }

    /// Participants on court this quantum, in ascending court order and
    /// within a court in pair order.
    pub fn assigned(&self) -> impl Iterator<Item = &Participant> + '_ {
        self.assignments.iter().flat_map(|assignment| assignment.pair.iter())
    }

    /// Total number of participants tracked by this quantum, on court or
    /// resting.
    pub fn participant_count(&self) -> usize {
        self.assignments.len() * 2 + self.relaxing.len()
    }
}
