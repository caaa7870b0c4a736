use squash_scheduler_bot::bot::handlers::callback::CallbackAction;
use squash_scheduler_bot::bot::keyboards;
use squash_scheduler_bot::scheduler::CourtCatalog;
use teloxide::types::InlineKeyboardButtonKind;

#[cfg(test)]
mod callback_data_tests {
    use super::*;

    #[test]
    fn test_parse_stop_poll() {
        assert_eq!(CallbackAction::parse("stop"), Some(CallbackAction::StopPoll));
    }

    #[test]
    fn test_parse_show_court_picker() {
        assert_eq!(
            CallbackAction::parse("config:add"),
            Some(CallbackAction::ShowCourtPicker)
        );
    }

    #[test]
    fn test_parse_add_court() {
        assert_eq!(
            CallbackAction::parse("config:add:3"),
            Some(CallbackAction::AddCourt {
                court: 3,
                double: false,
            })
        );
    }

    #[test]
    fn test_parse_add_court_double() {
        assert_eq!(
            CallbackAction::parse("config:add:0:x2"),
            Some(CallbackAction::AddCourt {
                court: 0,
                double: true,
            })
        );
    }

    #[test]
    fn test_parse_reset_and_create() {
        assert_eq!(
            CallbackAction::parse("config:reset"),
            Some(CallbackAction::ResetConfig)
        );
        assert_eq!(
            CallbackAction::parse("timetable:create"),
            Some(CallbackAction::CreateTimetable)
        );
    }

    #[test]
    fn test_parse_rejects_malformed_payloads() {
        assert_eq!(CallbackAction::parse(""), None);
        assert_eq!(CallbackAction::parse("foo"), None);
        assert_eq!(CallbackAction::parse("stop:now"), None);
        assert_eq!(CallbackAction::parse("config"), None);
        assert_eq!(CallbackAction::parse("config:add:abc"), None);
        assert_eq!(CallbackAction::parse("config:add:1:x3"), None);
        assert_eq!(CallbackAction::parse("config:add:1:x2:more"), None);
        assert_eq!(CallbackAction::parse("timetable"), None);
    }

    #[test]
    fn test_every_action_round_trips_through_its_data() {
        let actions = [
            CallbackAction::StopPoll,
            CallbackAction::ShowCourtPicker,
            CallbackAction::AddCourt {
                court: 2,
                double: false,
            },
            CallbackAction::AddCourt {
                court: 4,
                double: true,
            },
            CallbackAction::ResetConfig,
            CallbackAction::CreateTimetable,
        ];

        for action in actions {
            assert_eq!(CallbackAction::parse(&action.as_data()), Some(action));
        }
    }
}

fn button_data(button: &teloxide::types::InlineKeyboardButton) -> &str {
    match &button.kind {
        InlineKeyboardButtonKind::CallbackData(data) => data,
        other => panic!("expected a callback button, got {:?}", other),
    }
}

#[test]
fn test_stop_poll_keyboard_shape() {
    let keyboard = keyboards::stop_poll_keyboard();
    assert_eq!(keyboard.inline_keyboard.len(), 1);

    let button = &keyboard.inline_keyboard[0][0];
    assert_eq!(button.text, "Stop poll and configure courts");
    assert_eq!(
        CallbackAction::parse(button_data(button)),
        Some(CallbackAction::StopPoll)
    );
}

#[test]
fn test_config_keyboard_offers_the_three_actions() {
    let keyboard = keyboards::config_keyboard();
    let texts: Vec<&str> = keyboard
        .inline_keyboard
        .iter()
        .map(|row| row[0].text.as_str())
        .collect();
    assert_eq!(texts, vec!["Add court", "Reset config", "Create timetable"]);

    let actions: Vec<CallbackAction> = keyboard
        .inline_keyboard
        .iter()
        .map(|row| CallbackAction::parse(button_data(&row[0])).expect("button data should parse"))
        .collect();
    assert_eq!(
        actions,
        vec![
            CallbackAction::ShowCourtPicker,
            CallbackAction::ResetConfig,
            CallbackAction::CreateTimetable,
        ]
    );
}

#[test]
fn test_court_picker_has_single_and_double_buttons_per_court() {
    let catalog = CourtCatalog::default();
    let keyboard = keyboards::court_picker_keyboard(&catalog);
    assert_eq!(keyboard.inline_keyboard.len(), catalog.courts.len());

    for (court, row) in keyboard.inline_keyboard.iter().enumerate() {
        assert_eq!(row.len(), 2);
        assert_eq!(row[0].text, format!("#{}", catalog.courts[court]));
        assert_eq!(row[1].text, format!("#{} ×2", catalog.courts[court]));

        assert_eq!(
            CallbackAction::parse(button_data(&row[0])),
            Some(CallbackAction::AddCourt {
                court,
                double: false,
            })
        );
        assert_eq!(
            CallbackAction::parse(button_data(&row[1])),
            Some(CallbackAction::AddCourt {
                court,
                double: true,
            })
        );
    }
}

#[test]
fn test_court_picker_follows_a_custom_catalog() {
    let catalog = CourtCatalog::new(
        vec!["North".to_string(), "South".to_string()],
        vec!["18:00".to_string()],
    );
    let keyboard = keyboards::court_picker_keyboard(&catalog);

    assert_eq!(keyboard.inline_keyboard.len(), 2);
    assert_eq!(keyboard.inline_keyboard[0][0].text, "#North");
    assert_eq!(keyboard.inline_keyboard[1][1].text, "#South ×2");
}
