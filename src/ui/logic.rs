//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和表单处理方法

use super::actions::Action;
use super::state::{App, FormField};
use crate::models::{ConvertRequest, Unit, convert_temperature};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),

            Action::NextUnit => self.cycle_unit(Unit::next),
            Action::PrevUnit => self.cycle_unit(Unit::prev),
            Action::SelectUnit(unit) => self.select_unit(unit),

            Action::Clear => self.clear(),
            Action::Submit => self.submit(),

            Action::Input(c) => {
                if self.focus == FormField::Temperature && is_number_char(c) {
                    self.input_buffer.push(c);
                }
            }

            Action::DeleteChar => {
                if self.focus == FormField::Temperature {
                    self.input_buffer.pop();
                }
            }
        }
        false
    }

    // ============ 温标选择 ============

    fn focused_unit_mut(&mut self) -> Option<&mut Option<Unit>> {
        match self.focus {
            FormField::FromUnit => Some(&mut self.from_unit),
            FormField::ToUnit => Some(&mut self.to_unit),
            _ => None,
        }
    }

    /// 循环切换当前选择器，未选择时从摄氏度开始
    fn cycle_unit(&mut self, step: fn(&Unit) -> Unit) {
        if let Some(slot) = self.focused_unit_mut() {
            *slot = Some(slot.as_ref().map_or(Unit::Celsius, step));
        }
    }

    fn select_unit(&mut self, unit: Unit) {
        if let Some(slot) = self.focused_unit_mut() {
            *slot = Some(unit);
        }
    }

    // ============ 提交 ============

    /// 提交表单：构建请求并通过 reducer 替换换算状态
    pub fn submit(&mut self) {
        let (Some(from), Some(to)) = (self.from_unit, self.to_unit) else {
            self.message = Some("Select both units before converting".to_string());
            return;
        };
        if self.input_buffer.is_empty() {
            self.message = Some("Enter a temperature before converting".to_string());
            return;
        }

        let request = ConvertRequest::from_form(&self.input_buffer, from, to);
        self.conversion = convert_temperature(&self.conversion, &request);
        self.message = None;
    }

    /// 清空输入，保留上一次换算结果
    pub fn clear(&mut self) {
        self.input_buffer.clear();
        self.message = None;
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch(Action::Input(c));
        }
    }

    fn filled_app(text: &str, from: Unit, to: Unit) -> App {
        let mut app = App::default();
        type_text(&mut app, text);
        app.from_unit = Some(from);
        app.to_unit = Some(to);
        app
    }

    #[test]
    fn test_submit_disabled_until_complete() {
        let mut app = App::default();
        assert!(!app.can_convert());

        app.dispatch(Action::Submit);
        assert_eq!(app.conversion.converted_value, None);
        assert!(app.message.is_some());

        type_text(&mut app, "100");
        app.from_unit = Some(Unit::Celsius);
        assert!(!app.can_convert());
        app.dispatch(Action::Submit);
        assert_eq!(app.conversion.converted_value, None);

        app.to_unit = Some(Unit::Fahrenheit);
        assert!(app.can_convert());
    }

    #[test]
    fn test_submit_converts() {
        let mut app = filled_app("100", Unit::Celsius, Unit::Fahrenheit);
        assert!(!app.dispatch(Action::Submit));

        assert_eq!(app.conversion.converted_value, Some(212.0));
        assert_eq!(app.conversion.source_unit, Some(Unit::Celsius));
        assert_eq!(app.conversion.target_unit, Some(Unit::Fahrenheit));
        assert_eq!(app.conversion.raw_input, "100");
        assert_eq!(app.result_text(), "Converted Temperature: 212 Fahrenheit");
        assert_eq!(app.message, None);
    }

    #[test]
    fn test_unparseable_input_gives_nan() {
        let mut app = filled_app("1-2", Unit::Celsius, Unit::Kelvin);
        app.dispatch(Action::Submit);

        assert!(app.conversion.converted_value.is_some_and(f64::is_nan));
        assert_eq!(app.result_text(), "Converted Temperature: NaN Kelvin");
    }

    #[test]
    fn test_input_only_accepts_number_chars() {
        let mut app = App::default();
        type_text(&mut app, "-4x0.5q");
        assert_eq!(app.input_buffer, "-40.5");

        app.dispatch(Action::DeleteChar);
        assert_eq!(app.input_buffer, "-40.");
    }

    #[test]
    fn test_input_ignored_when_not_focused() {
        let mut app = App::default();
        app.dispatch(Action::FocusNext);
        type_text(&mut app, "12");
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn test_unit_cycling_follows_focus() {
        let mut app = App::default();
        app.dispatch(Action::NextUnit);
        assert_eq!(app.from_unit, None);

        app.dispatch(Action::FocusNext);
        app.dispatch(Action::NextUnit);
        assert_eq!(app.from_unit, Some(Unit::Celsius));
        app.dispatch(Action::NextUnit);
        assert_eq!(app.from_unit, Some(Unit::Fahrenheit));

        app.dispatch(Action::FocusNext);
        app.dispatch(Action::PrevUnit);
        assert_eq!(app.to_unit, Some(Unit::Celsius));
        app.dispatch(Action::PrevUnit);
        assert_eq!(app.to_unit, Some(Unit::Kelvin));
        app.dispatch(Action::SelectUnit(Unit::Celsius));
        assert_eq!(app.to_unit, Some(Unit::Celsius));
        assert_eq!(app.from_unit, Some(Unit::Fahrenheit));
    }

    #[test]
    fn test_focus_wraps() {
        let mut app = App::default();
        app.dispatch(Action::FocusPrev);
        assert_eq!(app.focus, FormField::ConvertButton);
        app.dispatch(Action::FocusNext);
        assert_eq!(app.focus, FormField::Temperature);
    }

    #[test]
    fn test_clear_keeps_result() {
        let mut app = filled_app("0", Unit::Celsius, Unit::Kelvin);
        app.dispatch(Action::Submit);
        app.dispatch(Action::Clear);

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.conversion.converted_value, Some(273.15));
        assert!(!app.can_convert());
    }

    #[test]
    fn test_precision_from_config() {
        let config = Config {
            default_from: Some(Unit::Fahrenheit),
            default_to: Some(Unit::Celsius),
            precision: Some(2),
            log_level: None,
        };
        let mut app = App::new(&config);
        type_text(&mut app, "100");
        app.dispatch(Action::Submit);

        assert_eq!(app.result_text(), "Converted Temperature: 37.78 Celsius");
    }

    #[test]
    fn test_quit() {
        let mut app = App::default();
        assert!(app.dispatch(Action::Quit));
    }
}
