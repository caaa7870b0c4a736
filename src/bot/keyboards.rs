//! Inline keyboards for the poll and the court config editor.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::bot::handlers::callback::CallbackAction;
use crate::scheduler::CourtCatalog;

/// The single button attached to a live poll.
pub fn stop_poll_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "Stop poll and configure courts",
        CallbackAction::StopPoll.as_data(),
    )]])
}

/// The main configuration keyboard shown under the config message.
pub fn config_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            "Add court",
            CallbackAction::ShowCourtPicker.as_data(),
        )],
        vec![InlineKeyboardButton::callback(
            "Reset config",
            CallbackAction::ResetConfig.as_data(),
        )],
        vec![InlineKeyboardButton::callback(
            "Create timetable",
            CallbackAction::CreateTimetable.as_data(),
        )],
    ])
}

/// One row per catalog court: a single booking button and a double one.
pub fn court_picker_keyboard(catalog: &CourtCatalog) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = catalog
        .courts
        .iter()
        .enumerate()
        .map(|(court, name)| {
            vec![
                InlineKeyboardButton::callback(
                    format!("#{}", name),
                    CallbackAction::AddCourt {
                        court,
                        double: false,
                    }
                    .as_data(),
                ),
                InlineKeyboardButton::callback(
                    format!("#{} ×2", name),
                    CallbackAction::AddCourt { court, double: true }.as_data(),
                ),
            ]
        })
        .collect();

    InlineKeyboardMarkup::new(rows)
}
