use std::sync::Arc;

use teloxide::prelude::*;

use crate::bot::keyboards;
use crate::config::Config;
use crate::scheduler::{generate_timetable, CourtId};
use crate::state::SharedState;
use crate::utils::render;
use crate::utils::validation::validate_court_index;

/// A parsed inline-button press.
///
/// Callback data is colon-separated: `stop`, `config:add`,
/// `config:add:<court>`, `config:add:<court>:x2`, `config:reset` and
/// `timetable:create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    /// Stop the poll and open the court configuration.
    StopPoll,
    /// Swap the config keyboard for the court picker.
    ShowCourtPicker,
    /// Book a court once, or twice for the double action.
    AddCourt {
        /// Catalog index of the picked court.
        court: CourtId,
        /// True for the ×2 picker button.
        double: bool,
    },
    /// Throw away the accumulated court config.
    ResetConfig,
    /// Generate and post the timetable.
    CreateTimetable,
}

impl CallbackAction {
    /// Parses button callback data; `None` for foreign or malformed
    /// payloads.
    pub fn parse(data: &str) -> Option<Self> {
        match data.split(':').collect::<Vec<_>>().as_slice() {
            ["stop"] => Some(Self::StopPoll),
            ["config", "add"] => Some(Self::ShowCourtPicker),
            ["config", "add", court] => court.parse().ok().map(|court| Self::AddCourt {
                court,
                double: false,
            }),
            ["config", "add", court, "x2"] => court.parse().ok().map(|court| Self::AddCourt {
                court,
                double: true,
            }),
            ["config", "reset"] => Some(Self::ResetConfig),
            ["timetable", "create"] => Some(Self::CreateTimetable),
            _ => None,
        }
    }

    /// Serializes the action into callback data for keyboard buttons.
    pub fn as_data(self) -> String {
        match self {
            Self::StopPoll => "stop".to_string(),
            Self::ShowCourtPicker => "config:add".to_string(),
            Self::AddCourt { court, double: false } => format!("config:add:{}", court),
            Self::AddCourt { court, double: true } => format!("config:add:{}:x2", court),
            Self::ResetConfig => "config:reset".to_string(),
            Self::CreateTimetable => "timetable:create".to_string(),
        }
    }
}

/// Routes inline-button presses to their handlers.
pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    state: SharedState,
    config: Arc<Config>,
) -> ResponseResult<()> {
    // Acknowledge right away so the button stops spinning even if the
    // action below takes a moment.
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(data) = q.data.as_deref() else {
        tracing::warn!("Callback query {} carried no data", q.id);
        return Ok(());
    };
    let Some(message) = q.message else {
        tracing::warn!("Callback '{}' arrived without a message context", data);
        return Ok(());
    };

    let username = q.from.username.as_ref().map_or("unknown", |v| v);
    tracing::info!(
        "Callback '{}' from {} in chat {}",
        data,
        username,
        message.chat.id.0
    );

    match CallbackAction::parse(data) {
        Some(CallbackAction::StopPoll) => handle_stop_poll(bot, message).await,
        Some(CallbackAction::ShowCourtPicker) => handle_show_picker(bot, message, config).await,
        Some(CallbackAction::AddCourt { court, double }) => {
            handle_add_court(bot, message, state, config, court, double).await
        }
        Some(CallbackAction::ResetConfig) => handle_reset_config(bot, message, state).await,
        Some(CallbackAction::CreateTimetable) => {
            handle_create_timetable(bot, message, state, config).await
        }
        None => {
            tracing::warn!("Unrecognized callback data: '{}'", data);
            Ok(())
        }
    }
}

/// Closes the poll and replies with the court config editor. The config
/// message replies to the poll message, which is how later callbacks find
/// the poll id again.
async fn handle_stop_poll(bot: Bot, msg: Message) -> ResponseResult<()> {
    let stopped = bot.stop_poll(msg.chat.id, msg.id).await?;
    tracing::info!(
        "Poll {} stopped with {} voters",
        stopped.id,
        stopped.total_voter_count
    );

    bot.send_message(msg.chat.id, "Court configuration needs to be configured")
        .reply_to_message_id(msg.id)
        .reply_markup(keyboards::config_keyboard())
        .await?;

    Ok(())
}

async fn handle_show_picker(bot: Bot, msg: Message, config: Arc<Config>) -> ResponseResult<()> {
    bot.edit_message_reply_markup(msg.chat.id, msg.id)
        .reply_markup(keyboards::court_picker_keyboard(&config.catalog))
        .await?;
    Ok(())
}

async fn handle_add_court(
    bot: Bot,
    msg: Message,
    state: SharedState,
    config: Arc<Config>,
    court: CourtId,
    double: bool,
) -> ResponseResult<()> {
    if let Err(e) = validate_court_index(court, &config.catalog) {
        tracing::warn!("Rejected court pick: {}", e);
        return Ok(());
    }
    let Some(poll_id) = poll_id_of(&msg) else {
        return missing_poll_reply(&bot, &msg).await;
    };

    let count = if double { 2 } else { 1 };
    let updated = state.add_court_bookings(&poll_id, court, count).await;
    tracing::info!(
        "Poll {}: court {} gained {} booking(s)",
        poll_id,
        court,
        count
    );

    bot.edit_message_text(
        msg.chat.id,
        msg.id,
        render::format_court_config(&updated, &config.catalog),
    )
    .reply_markup(keyboards::config_keyboard())
    .await?;

    Ok(())
}

async fn handle_reset_config(bot: Bot, msg: Message, state: SharedState) -> ResponseResult<()> {
    let Some(poll_id) = poll_id_of(&msg) else {
        return missing_poll_reply(&bot, &msg).await;
    };

    state.reset_config(&poll_id).await;
    tracing::info!("Poll {}: court config reset", poll_id);

    bot.edit_message_text(msg.chat.id, msg.id, "Config was reset.")
        .reply_markup(keyboards::config_keyboard())
        .await?;

    Ok(())
}

async fn handle_create_timetable(
    bot: Bot,
    msg: Message,
    state: SharedState,
    config: Arc<Config>,
) -> ResponseResult<()> {
    let Some(poll_id) = poll_id_of(&msg) else {
        return missing_poll_reply(&bot, &msg).await;
    };

    let (players, court_config) = state.snapshot(&poll_id).await;
    tracing::info!(
        "Poll {}: creating timetable for {} players on {} active courts",
        poll_id,
        players.len(),
        court_config.active_courts().len()
    );

    let text = match generate_timetable(&players, court_config, &config.scheduler) {
        Ok(timetable) => render::format_timetable(
            &timetable,
            &config.catalog,
            config.scheduler.quantums_per_booking_block,
        ),
        Err(e) => {
            tracing::warn!("Poll {}: {}", poll_id, e);
            format!("❌ {}.\nRemove a court or wait for more players, then try again.", e)
        }
    };

    bot.send_message(msg.chat.id, text)
        .reply_to_message_id(msg.id)
        .await?;

    Ok(())
}

/// The config message always replies to the poll message, so the poll id is
/// one hop up the reply chain.
fn poll_id_of(msg: &Message) -> Option<String> {
    msg.reply_to_message()
        .and_then(|replied| replied.poll())
        .map(|poll| poll.id.clone())
}

async fn missing_poll_reply(bot: &Bot, msg: &Message) -> ResponseResult<()> {
    bot.send_message(
        msg.chat.id,
        "❌ I can't find the poll this configuration belongs to. Start over with /new_poll.",
    )
    .await?;
    Ok(())
}
