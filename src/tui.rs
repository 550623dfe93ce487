//! TUI (Terminal User Interface) module for the hidden-letters game
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `Playing` → `RoundOver` when a guess wins or loses the round
//! - `RoundOver` → `Playing` once the game loop shows the next round
//!
//! A wrong guess flashes the word board red for a moment. The flash is purely
//! visual and is cleared by the next redraw after its deadline.

use crate::game_state::{GameInterface, SessionStats, UserAction};
use crate::round::{MAX_FAILURES, Outcome, Round};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::io;
use std::time::{Duration, Instant};

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const FLASH_DURATION_MS: u64 = 300;
const POPUP_WIDTH: u16 = 44;
const POPUP_HEIGHT: u16 = 7;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    Playing,
    RoundOver { won: bool },
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum SlotState {
    Revealed,
    Next,
    Hidden,
    Flashing,
}

impl SlotState {
    fn colors(self) -> (Color, Color) {
        match self {
            Self::Revealed => (Color::Green, Color::Black),
            Self::Next => (Color::Yellow, Color::Black),
            Self::Hidden => (Color::DarkGray, Color::White),
            Self::Flashing => (Color::Red, Color::White),
        }
    }
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    slots: &'a [Option<char>],
    word: &'a str,
    failures: u8,
    wrong_letters: &'a [char],
    stats: &'a SessionStats,
    state: TuiState,
    flashing: bool,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Keeps a copy of what the last displayed round looked like, so it can redraw
/// between game loop calls.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    slots: Vec<Option<char>>,
    word: String,
    failures: u8,
    wrong_letters: Vec<char>,
    stats: SessionStats,
    state: TuiState,
    flash_until: Option<Instant>,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            slots: Vec::new(),
            word: String::new(),
            failures: 0,
            wrong_letters: Vec::new(),
            stats: SessionStats::default(),
            state: TuiState::Playing,
            flash_until: None,
            message: String::new(),
            error_message: String::new(),
            status: "Ready".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn is_flashing(&self) -> bool {
        self.flash_until.is_some_and(|until| Instant::now() < until)
    }

    fn sync_round(&mut self, round: &Round, stats: &SessionStats) {
        self.slots = round.revealed().to_vec();
        self.word = round.word();
        self.failures = round.failures();
        self.wrong_letters = round.wrong_letters().to_vec();
        self.stats = *stats;
    }

    /// Draw the current UI state to the terminal.
    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            slots: &self.slots,
            word: &self.word,
            failures: self.failures,
            wrong_letters: &self.wrong_letters,
            stats: &self.stats,
            state: self.state,
            flashing: self.is_flashing(),
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(5), // Word board
                Constraint::Min(6),    // Info panel
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx.slots, ctx.flashing);
        Self::render_info(f, chunks[2], ctx);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);

        if let TuiState::RoundOver { won } = ctx.state {
            Self::render_popup(f, won, ctx.word);
        }
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HIDDEN LETTERS")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn slot_state(slots: &[Option<char>], index: usize, flashing: bool) -> SlotState {
        match slots[index] {
            Some(_) if flashing => SlotState::Flashing,
            Some(_) => SlotState::Revealed,
            None if flashing => SlotState::Flashing,
            None if slots.iter().position(Option::is_none) == Some(index) => SlotState::Next,
            None => SlotState::Hidden,
        }
    }

    fn render_board(f: &mut Frame, area: Rect, slots: &[Option<char>], flashing: bool) {
        let block = Block::default().title("Word").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut spans = vec![Span::raw("  ")];
        for (i, slot) in slots.iter().enumerate() {
            let (bg_color, fg_color) = Self::slot_state(slots, i, flashing).colors();
            let letter = slot.unwrap_or('_');
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(fg_color).bg(bg_color),
            ));
            spans.push(Span::raw(" "));
        }

        let paragraph = Paragraph::new(vec![Line::from(""), Line::from(spans)]);
        f.render_widget(paragraph, inner);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        let failure_style = if ctx.failures + 1 >= MAX_FAILURES {
            ERROR_STYLE
        } else {
            INFO_STYLE
        };
        lines.push(Line::from(vec![
            Span::styled("Failures: ", HEADER_STYLE),
            Span::styled(format!("{}/{}", ctx.failures, MAX_FAILURES), failure_style),
        ]));

        let wrong = ctx
            .wrong_letters
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(Line::from(vec![
            Span::styled("Wrong letters: ", HEADER_STYLE),
            Span::styled(wrong, ERROR_STYLE),
        ]));

        lines.push(Line::from(format!(
            "Won: {}  Lost: {}  Streak: {}",
            ctx.stats.won, ctx.stats.lost, ctx.stats.streak
        )));
        lines.push(Line::from(""));

        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.message, MESSAGE_STYLE)]));
        }
        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::Playing => "Type the next hidden letter | CTRL-R: New word | ESC: Quit",
            TuiState::RoundOver { .. } => "SPACE/ENTER: Next word | R: New word | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn popup_area(area: Rect) -> Rect {
        let width = POPUP_WIDTH.min(area.width);
        let height = POPUP_HEIGHT.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    fn render_popup(f: &mut Frame, won: bool, word: &str) {
        let (title, style, line) = if won {
            (" Solved! ", SUCCESS_STYLE, format!("The word was: {word}"))
        } else {
            (
                " Out of attempts ",
                ERROR_STYLE,
                format!("{MAX_FAILURES} failures. The word was: {word}"),
            )
        };

        let area = Self::popup_area(f.area());
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(line, style)),
            Line::from(""),
            Line::from("Press SPACE to continue"),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().title(title).borders(Borders::ALL).style(style));

        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            debug_log!("handle_input() - Ignoring non-key event");
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        debug_log!(
            "handle_input() - Key event received: code={:?}, modifiers={:?}",
            key.code,
            key.modifiers
        );
        Ok(match self.state {
            TuiState::Playing => self.handle_playing_input(key),
            TuiState::RoundOver { .. } => Self::handle_round_over_input(key),
        })
    }

    fn handle_playing_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();

        match key.code {
            KeyCode::Esc => {
                info_log!("handle_playing_input() - ESC pressed, returning Exit");
                Some(UserAction::Exit)
            }
            KeyCode::Char('r' | 'R') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(UserAction::Reset)
            }
            KeyCode::Char(_) if Self::has_modifier_keys(&key) => {
                debug_log!(
                    "handle_playing_input() - Ignoring character with modifier: {:?}",
                    key.modifiers
                );
                None
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(UserAction::Guess(c.to_string())),
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters count as guesses ('{c}' ignored)");
                None
            }
            _ => None,
        }
    }

    fn handle_round_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(UserAction::Continue),
            KeyCode::Char('r' | 'R') => Some(UserAction::Reset),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_round(&mut self, round: &Round, stats: &SessionStats) {
        self.sync_round(round, stats);
        self.state = TuiState::Playing;
        self.flash_until = None;
        self.error_message.clear();
        self.message = format!(
            "New word: {} letters, {} hidden",
            round.revealed().len(),
            round.hidden_positions().len()
        );
        self.status = "Guess the hidden letters from left to right".to_string();
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    debug_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_action() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_outcome(&mut self, round: &Round, outcome: &Outcome, stats: &SessionStats) {
        self.sync_round(round, stats);
        match outcome {
            Outcome::NoOp => {}
            Outcome::Correct { letter, .. } => {
                self.message = format!("Correct: {letter}");
            }
            Outcome::Incorrect { letter, failures } => {
                self.flash_until = Some(Instant::now() + Duration::from_millis(FLASH_DURATION_MS));
                self.message = format!("Wrong: {letter}");
                self.status = format!("{} attempts left", MAX_FAILURES - failures);
            }
            Outcome::Won { .. } => {
                self.state = TuiState::RoundOver { won: true };
                self.status = "Round won".to_string();
            }
            Outcome::Lost { .. } => {
                self.state = TuiState::RoundOver { won: false };
                self.status = "Round lost".to_string();
            }
        }
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_round_over_keys() {
        assert_eq!(
            TuiInterface::handle_round_over_input(key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(UserAction::Continue)
        );
        assert_eq!(
            TuiInterface::handle_round_over_input(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(UserAction::Continue)
        );
        assert_eq!(
            TuiInterface::handle_round_over_input(key(KeyCode::Char('r'), KeyModifiers::NONE)),
            Some(UserAction::Reset)
        );
        assert_eq!(
            TuiInterface::handle_round_over_input(key(KeyCode::Char('a'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_slot_state() {
        let slots = [Some('D'), None, Some('S'), None];
        assert_eq!(TuiInterface::slot_state(&slots, 0, false), SlotState::Revealed);
        assert_eq!(TuiInterface::slot_state(&slots, 1, false), SlotState::Next);
        assert_eq!(TuiInterface::slot_state(&slots, 3, false), SlotState::Hidden);
        assert_eq!(TuiInterface::slot_state(&slots, 2, true), SlotState::Flashing);
    }

    #[test]
    fn test_popup_area_is_centered_and_clamped() {
        let area = TuiInterface::popup_area(Rect::new(0, 0, 80, 24));
        assert_eq!(area, Rect::new(18, 8, POPUP_WIDTH, POPUP_HEIGHT));

        let small = TuiInterface::popup_area(Rect::new(0, 0, 20, 4));
        assert_eq!(small, Rect::new(0, 0, 20, 4));
    }
}
