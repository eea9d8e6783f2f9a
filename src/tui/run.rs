use std::io;
use std::path::Path;

use crossterm::event::{poll, read, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Terminal;

use super::layout::chart_panels;
use super::state::TuiState;
use super::views::{draw_changes_panel, draw_help_overlay, draw_total_panel, ChartData};
use crate::model::CumulativeSeries;

/// Show the two-panel chart until the user quits.
pub fn run(series: &CumulativeSeries, repo_path: &Path, date_format: &str) -> io::Result<()> {
    if series.is_empty() {
        return Ok(());
    }

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let result = event_loop(series, repo_path, date_format);
    let restore = execute!(io::stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    result.and(restore)
}

fn event_loop(series: &CumulativeSeries, repo_path: &Path, date_format: &str) -> io::Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut state = TuiState::new(series.len());
    let repo_label = repo_path.display().to_string();
    terminal.clear()?;

    loop {
        let data = ChartData::new(series, state.viewport, date_format);
        terminal.draw(|f| {
            let size = f.size();
            let (top, bottom, footer) = chart_panels(size);

            draw_changes_panel(f, top, &data);
            draw_total_panel(f, bottom, &data);

            let window = if state.viewport.is_full() {
                format!("all {} commits", series.len())
            } else {
                format!(
                    "commits {}-{} of {}",
                    state.viewport.start + 1,
                    state.viewport.end(),
                    series.len()
                )
            };
            let status = Line::from(vec![
                Span::styled(repo_label.as_str(), Style::default().fg(Color::Cyan)),
                Span::raw(format!("  {window}  ")),
                Span::styled("h: help  q: quit", Style::default().fg(Color::Gray)),
            ]);
            f.render_widget(Paragraph::new(status), footer);

            if state.show_help {
                draw_help_overlay(f, size);
            }
        })?;

        if !poll(std::time::Duration::from_millis(200))? {
            continue;
        }
        let Event::Key(key_event) = read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        if state.show_help {
            if matches!(key_event.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::F(1)) {
                state.show_help = false;
            }
            continue;
        }

        let step = state.pan_step();
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => break,
            KeyCode::Char('h') | KeyCode::F(1) => state.show_help = true,
            KeyCode::Char('+') | KeyCode::Char('=') => state.viewport.zoom_in(),
            KeyCode::Char('-') => state.viewport.zoom_out(),
            KeyCode::Left | KeyCode::Char('j') => state.viewport.pan_left(step),
            KeyCode::Right | KeyCode::Char('k') => state.viewport.pan_right(step),
            KeyCode::Home | KeyCode::Char('0') => state.viewport.reset(),
            _ => {}
        }
    }

    terminal.clear()?;
    Ok(())
}
