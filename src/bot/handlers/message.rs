use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::{new_poll, Command};
use crate::state::SharedState;

/// Dispatches parsed chat commands.
pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: SharedState,
) -> ResponseResult<()> {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Start => {
            bot.send_message(
                msg.chat.id,
                "🎾 Welcome to the Squash Scheduler Bot!\n\n\
                 Use /new_poll to ask who is in this week, then stop the poll, \
                 book courts and let me build the timetable.\n\
                 Use /help to see all commands.",
            )
            .await?;
        }
        Command::NewPoll => {
            new_poll::handle_new_poll(bot, msg, state).await?;
        }
    }

    Ok(())
}
