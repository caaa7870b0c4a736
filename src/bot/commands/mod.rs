/// The `/new_poll` command opening an attendance poll
pub mod new_poll;

use teloxide::utils::command::BotCommands;

/// Chat commands understood by the bot.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(
    rename_rule = "snake_case",
    description = "Squash scheduler commands:"
)]
pub enum Command {
    /// Show the command list.
    #[command(description = "Display this help message")]
    Help,
    /// Greet a new chat.
    #[command(description = "Start the bot")]
    Start,
    /// Open a fresh attendance poll.
    #[command(description = "Creates new attendance poll")]
    NewPoll,
}
