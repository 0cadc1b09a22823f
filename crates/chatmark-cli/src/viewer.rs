//! Full-screen, scrollable view of a rendered message.

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};

const PAGE: u16 = 10;

struct Viewer {
    title: String,
    lines: Vec<Line<'static>>,
    wrap: bool,
    scroll: u16,
}

impl Viewer {
    fn new(title: String, lines: Vec<Line<'static>>, wrap: bool) -> Self {
        Self {
            title,
            lines,
            wrap,
            scroll: 0,
        }
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn scroll_down(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_add(by).min(self.max_scroll());
    }

    fn scroll_up(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_sub(by);
    }
}

pub fn run(lines: Vec<Line<'static>>, title: &str, wrap: bool) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut viewer = Viewer::new(title.to_string(), lines, wrap);

    // Main loop
    let res = run_viewer(&mut terminal, &mut viewer);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_viewer(terminal: &mut Terminal<CrosstermBackend<Stdout>>, viewer: &mut Viewer) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, viewer))?;

        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => viewer.scroll_down(1),
                KeyCode::Up | KeyCode::Char('k') => viewer.scroll_up(1),
                KeyCode::PageDown | KeyCode::Char(' ') => viewer.scroll_down(PAGE),
                KeyCode::PageUp => viewer.scroll_up(PAGE),
                KeyCode::Home | KeyCode::Char('g') => viewer.scroll = 0,
                KeyCode::End | KeyCode::Char('G') => viewer.scroll = viewer.max_scroll(),
                _ => {}
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => viewer.scroll_down(3),
                MouseEventKind::ScrollUp => viewer.scroll_up(3),
                _ => {}
            },
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, viewer: &Viewer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let mut content = Paragraph::new(viewer.lines.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(viewer.title.as_str()),
        )
        .scroll((viewer.scroll, 0));
    if viewer.wrap {
        content = content.wrap(Wrap { trim: false });
    }
    f.render_widget(content, chunks[0]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Scroll | "),
        Span::raw("PgUp/PgDn: Page | "),
        Span::raw("g/G: Top/Bottom"),
    ]);
    f.render_widget(Paragraph::new(help_text), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer_with(n: usize) -> Viewer {
        Viewer::new("t".into(), vec![Line::default(); n], true)
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut viewer = viewer_with(5);
        viewer.scroll_down(PAGE);
        assert_eq!(viewer.scroll, 4);
        viewer.scroll_up(PAGE);
        assert_eq!(viewer.scroll, 0);
    }

    #[test]
    fn empty_view_cannot_scroll() {
        let mut viewer = viewer_with(0);
        viewer.scroll_down(1);
        assert_eq!(viewer.scroll, 0);
    }
}
