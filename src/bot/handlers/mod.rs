/// Inline-button callbacks driving the config editor
pub mod callback;
/// Chat command dispatch
pub mod message;
/// Poll answer bookkeeping
pub mod poll_answer;

use std::sync::Arc;

use teloxide::dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;

use crate::bot::commands::Command;
use crate::config::Config;
use crate::state::SharedState;

/// Builds the dispatcher schema, wiring each update kind to its handler.
pub struct BotHandler {
    state: SharedState,
    config: Arc<Config>,
}

impl BotHandler {
    /// Creates a handler over the shared session state and configuration.
    pub fn new(state: SharedState, config: Arc<Config>) -> Self {
        Self { state, config }
    }

    /// The dptree schema handed to the dispatcher. Each branch clones its
    /// own handle on the state so the closures stay `'static`.
    pub fn schema(&self) -> UpdateHandler<teloxide::RequestError> {
        let command_state = self.state.clone();
        let callback_state = self.state.clone();
        let callback_config = self.config.clone();
        let answer_state = self.state.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(move |bot, msg, cmd| {
                        let state = command_state.clone();
                        async move { message::command_handler(bot, msg, cmd, state).await }
                    }),
            )
            .branch(Update::filter_callback_query().endpoint(move |bot, q| {
                let state = callback_state.clone();
                let config = callback_config.clone();
                async move { callback::callback_handler(bot, q, state, config).await }
            }))
            .branch(Update::filter_poll_answer().endpoint(move |answer| {
                let state = answer_state.clone();
                async move { poll_answer::poll_answer_handler(answer, state).await }
            }))
    }
}
