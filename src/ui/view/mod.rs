//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, FormField};
use components::{render_button, render_input_widget, render_unit_selector};
use layouts::centered_columns;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // 标题
            Constraint::Length(15), // 表单
            Constraint::Length(3),  // 结果
            Constraint::Min(0),
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_form(frame, app, centered_columns(60, chunks[1]));
    render_result(frame, app, centered_columns(60, chunks[2]));
    render_help(frame, app, chunks[4]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Temperature Converter")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let temperature_focused = app.focus == FormField::Temperature;
    render_input_widget(
        frame,
        chunks[0],
        "Temperature",
        &app.input_buffer,
        "Enter temperature",
        temperature_focused,
    );
    if temperature_focused {
        let max_x = chunks[0].x + chunks[0].width.saturating_sub(2);
        let cursor_x = (chunks[0].x + app.input_buffer.len() as u16 + 1).min(max_x);
        frame.set_cursor_position(Position::new(cursor_x, chunks[0].y + 1));
    }

    render_unit_selector(
        frame,
        chunks[1],
        "From",
        app.from_unit,
        "Select from unit",
        app.focus == FormField::FromUnit,
    );
    render_unit_selector(
        frame,
        chunks[2],
        "To",
        app.to_unit,
        "Select to unit",
        app.focus == FormField::ToUnit,
    );
    render_button(
        frame,
        chunks[4],
        "Convert",
        app.focus == FormField::ConvertButton,
        app.can_convert(),
    );
}

fn render_result(frame: &mut Frame, app: &App, area: Rect) {
    let style = if app.conversion.has_result() {
        Style::default()
            .fg(Color::Indexed(62))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let result = Paragraph::new(app.result_text())
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(result, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        FormField::Temperature => "[0-9 . -] type  [Tab/↓] next  [Enter] convert  [Esc] clear  [Ctrl+C] quit",
        FormField::FromUnit | FormField::ToUnit => {
            "[←/→] cycle  [c/f/k] select  [Tab/↓] next  [Enter] convert  [q] quit"
        }
        FormField::ConvertButton => "[Enter/Space] convert  [Tab/↓] next  [q] quit",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_empty_form() {
        let text = screen_text(&App::default());
        assert!(text.contains("Temperature Converter"));
        assert!(text.contains("Enter temperature"));
        assert!(text.contains("Select from unit"));
        assert!(text.contains("No temperature converted yet"));
    }

    #[test]
    fn test_render_result() {
        let mut app = App::default();
        app.input_buffer = "100".to_string();
        app.from_unit = Some(Unit::Celsius);
        app.to_unit = Some(Unit::Fahrenheit);
        app.submit();

        let text = screen_text(&app);
        assert!(text.contains("Converted Temperature: 212 Fahrenheit"));
    }
}
