//! 布局辅助函数

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 水平居中，宽度按百分比，高度不变
pub fn centered_columns(percent_x: u16, r: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(r)[1]
}
