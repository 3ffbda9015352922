//! 通用 UI 组件
//!
//! 输入框、选择器、按钮等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::models::Unit;

fn field_style(is_focused: bool, active_color: Color) -> Style {
    if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// [组件] 带有标题和占位文本的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    is_focused: bool,
) {
    let line = if value.is_empty() {
        Line::from(Span::styled(placeholder, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(value)
    };

    let input = Paragraph::new(line)
        .style(field_style(is_focused, Color::Yellow))
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(input, area);
}

/// [组件] 温标选择器：未选择时显示占位文本，已选择时高亮当前项
pub fn render_unit_selector(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    selected: Option<Unit>,
    placeholder: &str,
    is_focused: bool,
) {
    let line = match selected {
        None => Line::from(Span::styled(placeholder, Style::default().fg(Color::DarkGray))),
        Some(current) => {
            let mut spans = Vec::new();
            for unit in Unit::ALL {
                let style = if unit == current {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                spans.push(Span::styled(format!(" {} ({}) ", unit, unit.symbol()), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        }
    };

    let selector = Paragraph::new(line)
        .style(field_style(is_focused, Color::Yellow))
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(selector, area);
}

/// [组件] 按钮，disabled 时变暗
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, is_focused: bool, enabled: bool) {
    let style = if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_focused {
        Style::default()
            .fg(Color::White)
            .bg(Color::Indexed(62))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Indexed(62))
    };

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}
