//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{App, FormField};
use crate::models::Unit;

/// 根据当前焦点和按键获取对应的 Action
pub fn get_action(focus: FormField, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // 所有字段通用
    match key.code {
        KeyCode::Tab | KeyCode::Down => return Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => return Some(Action::FocusPrev),
        KeyCode::Enter => return Some(Action::Submit),
        KeyCode::Esc => return Some(Action::Clear),
        _ => {}
    }

    match focus {
        FormField::Temperature => match key.code {
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        FormField::FromUnit | FormField::ToUnit => match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => Some(Action::NextUnit),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevUnit),
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::SelectUnit(Unit::Celsius)),
            KeyCode::Char('f') | KeyCode::Char('F') => Some(Action::SelectUnit(Unit::Fahrenheit)),
            KeyCode::Char('k') | KeyCode::Char('K') => Some(Action::SelectUnit(Unit::Kelvin)),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        FormField::ConvertButton => match key.code {
            KeyCode::Char(' ') => Some(Action::Submit),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match get_action(app.focus, key) {
        Some(action) => {
            tracing::trace!(?action, "dispatch");
            app.dispatch(action)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(get_action(FormField::Temperature, ctrl_c), Some(Action::Quit));
        assert_eq!(get_action(FormField::FromUnit, ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_q_is_text_in_temperature_field() {
        assert_eq!(
            get_action(FormField::Temperature, key(KeyCode::Char('q'))),
            Some(Action::Input('q'))
        );
        assert_eq!(
            get_action(FormField::ConvertButton, key(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_selector_keys() {
        assert_eq!(
            get_action(FormField::ToUnit, key(KeyCode::Char('k'))),
            Some(Action::SelectUnit(Unit::Kelvin))
        );
        assert_eq!(
            get_action(FormField::FromUnit, key(KeyCode::Left)),
            Some(Action::PrevUnit)
        );
        assert_eq!(get_action(FormField::FromUnit, key(KeyCode::Backspace)), None);
    }

    #[test]
    fn test_enter_submits_from_any_field() {
        assert_eq!(get_action(FormField::Temperature, key(KeyCode::Enter)), Some(Action::Submit));
        assert_eq!(get_action(FormField::ToUnit, key(KeyCode::Enter)), Some(Action::Submit));
    }

    #[test]
    fn test_full_form_flow() {
        let mut app = App::default();
        for code in [
            KeyCode::Char('3'),
            KeyCode::Char('2'),
            KeyCode::Tab,
            KeyCode::Char('f'),
            KeyCode::Tab,
            KeyCode::Char('c'),
            KeyCode::Tab,
        ] {
            assert!(!handle_key_event(&mut app, key(code)));
        }
        assert_eq!(app.focus, FormField::ConvertButton);

        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.conversion.converted_value, Some(0.0));
        assert_eq!(app.result_text(), "Converted Temperature: 0 Celsius");

        assert!(handle_key_event(&mut app, key(KeyCode::Char('q'))));
    }
}
