use teloxide::prelude::*;
use teloxide::types::PollAnswer;

use crate::poll::PollChoice;
use crate::scheduler::Player;
use crate::state::SharedState;

/// Folds a poll answer update into the session state.
///
/// Telegram reports a retracted vote as an answer with an empty option
/// list; multi-option polls are not used here, so only the first option id
/// matters.
pub async fn poll_answer_handler(answer: PollAnswer, state: SharedState) -> ResponseResult<()> {
    let player = Player::new(answer.user.id.0 as i64, answer.user.full_name());

    match answer.option_ids.first() {
        None => {
            tracing::info!(
                "Poll {}: {} retracted their vote",
                answer.poll_id,
                player.name
            );
            state.retract_answer(&answer.poll_id, player.id).await;
        }
        Some(&option) => match PollChoice::from_option_index(option) {
            Some(choice) => {
                tracing::info!(
                    "Poll {}: {} answered {:?}",
                    answer.poll_id,
                    player.name,
                    choice
                );
                state.record_answer(&answer.poll_id, player, choice).await;
            }
            None => {
                tracing::warn!(
                    "Poll {}: unknown option index {} from {}",
                    answer.poll_id,
                    option,
                    player.name
                );
            }
        },
    }

    Ok(())
}
