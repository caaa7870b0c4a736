//! Attendance poll bookkeeping.
//!
//! Telegram delivers poll answers as separate updates, including a special
//! "no options selected" answer when a user retracts their vote. The tracker
//! here folds that stream into one latest choice per player, in the order
//! players first answered. That order matters: it is the participant order
//! handed to the scheduler, and the rotation's tie-breaks key off it.

use crate::scheduler::Player;

/// The options of the attendance poll, index-aligned with the option list
/// sent to Telegram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollChoice {
    /// Not coming.
    No,
    /// Coming for a 45 minute session.
    Yes45,
    /// Coming for a 90 minute session.
    Yes90,
}

impl PollChoice {
    /// The option labels sent with the poll.
    pub fn poll_options() -> Vec<String> {
        vec![
            "No".to_string(),
            "Yes, 45 min".to_string(),
            "Yes, 90 min".to_string(),
        ]
    }

    /// Maps a Telegram option index back to a choice.
    pub fn from_option_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::No),
            1 => Some(Self::Yes45),
            2 => Some(Self::Yes90),
            _ => None,
        }
    }

    /// True when the choice opts the player into the rotation.
    pub fn is_attending(self) -> bool {
        !matches!(self, Self::No)
    }
}

/// One tracked answer: a player and their latest choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedAnswer {
    /// Who answered.
    pub player: Player,
    /// Their latest choice; earlier ones are overwritten in place.
    pub choice: PollChoice,
}

/// Accumulated answers for a single poll, one entry per player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollTracker {
    answers: Vec<ReceivedAnswer>,
}

impl PollTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `player`'s latest choice. A player changing their vote keeps
    /// their original position in the answer order.
    pub fn record(&mut self, player: Player, choice: PollChoice) {
        match self.answers.iter_mut().find(|a| a.player.id == player.id) {
            Some(existing) => existing.choice = choice,
            None => self.answers.push(ReceivedAnswer { player, choice }),
        }
    }

    /// Drops `player_id`'s answer entirely (vote retraction).
    pub fn retract(&mut self, player_id: i64) {
        self.answers.retain(|a| a.player.id != player_id);
    }

    /// Players who picked a yes option, in first-answer order.
    pub fn attending(&self) -> Vec<Player> {
        self.answers
            .iter()
            .filter(|a| a.choice.is_attending())
            .map(|a| a.player.clone())
            .collect()
    }

    /// Number of tracked answers, regardless of choice.
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// All tracked answers, in first-answer order.
    pub fn answers(&self) -> &[ReceivedAnswer] {
        &self.answers
    }
}
