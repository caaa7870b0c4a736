use teloxide::prelude::*;

use crate::bot::keyboards;
use crate::poll::PollChoice;
use crate::state::SharedState;

/// Opens a non-anonymous attendance poll in the chat and registers it in
/// the session state so answers and config edits can find it later.
pub async fn handle_new_poll(bot: Bot, msg: Message, state: SharedState) -> ResponseResult<()> {
    let username = msg
        .from()
        .and_then(|user| user.username.as_ref())
        .map_or("unknown", |v| v);
    tracing::info!("New poll requested by {} in chat {}", username, msg.chat.id.0);

    let poll_message = bot
        .send_poll(msg.chat.id, "Squash this week?", PollChoice::poll_options())
        .is_anonymous(false)
        .reply_markup(keyboards::stop_poll_keyboard())
        .await?;

    match poll_message.poll() {
        Some(poll) => {
            state.register_poll(poll.id.clone()).await;
            tracing::info!("Poll {} opened in chat {}", poll.id, msg.chat.id.0);
        }
        None => {
            tracing::warn!("Telegram returned a poll message without a poll payload");
        }
    }

    Ok(())
}
