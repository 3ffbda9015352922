mod config;
mod models;
mod ui;

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::{config_path, data_dir, load_config};
use crate::ui::{App, handle_key_event, render};

/// 退出（包括出错）时恢复终端
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

fn main() -> Result<()> {
    // 配置 (~/.config/thermoform/config.toml)，在进入终端之前报告错误
    let config = load_config(&config_path()?)?;

    // 日志写入 ~/.local/share/thermoform/thermoform.log，stdout 归终端使用
    let file_appender = tracing_appender::rolling::never(data_dir()?, "thermoform.log");
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_max_level(config.tracing_level()?)
        .init();

    tracing::info!(?config, "starting thermoform");

    // 创建应用状态
    let mut app = App::new(&config);

    // 设置终端
    enable_raw_mode().context("failed to enable raw mode")?;
    let _guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    terminal.show_cursor()?;
    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop failed");
    }
    tracing::info!("exiting");

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && handle_key_event(app, key) {
                break;
            }
        }
    }
    Ok(())
}
