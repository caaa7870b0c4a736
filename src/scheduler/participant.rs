use std::fmt;

/// A player identity as collected from the attendance poll.
///
/// `id` is the Telegram user id and the only field the scheduler compares;
/// `name` is whatever display name the messaging layer resolved at answer
/// time and is carried along purely for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    /// Telegram user id.
    pub id: i64,
    /// Display name used in timetables.
    pub name: String,
}

impl Player {
    /// Creates a player from an id and a display name.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A player inside one generation run, together with the number of quantums
/// they have played without a rest.
///
/// The counter is owned by the scheduler: it is bumped when the player is
/// picked for a court and reset to zero when the player comes back from the
/// relaxing pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Who is playing.
    pub player: Player,
    /// Quantums played back to back, counting the current one.
    pub consecutive_played: u32,
}

impl Participant {
    /// Wraps a player entering the rotation fresh.
    pub fn new(player: Player) -> Self {
        Self {
            player,
            consecutive_played: 0,
        }
    }
}
