//! TUI (Terminal User Interface) module for Wordle Helper
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `EnteringGuess` → `MarkingFeedback` → `ConfirmingFeedback` → back to `EnteringGuess`
//! - `Ctrl+N` starts a new game and `Esc` quits from any state.

use crate::cli::format_columns;
use crate::error::ParseError;
use crate::feedback::{FeedbackEvent, Mark};
use crate::game_state::{GameInterface, UserAction, WelcomeInfo};
use crate::{WORD_LENGTH, debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const MAX_CANDIDATE_ROWS: usize = 40;
const START_WORD_COLUMNS: usize = 5;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LetterState {
    Entered,
    Marked(Mark),
}

impl LetterState {
    fn colors(self) -> (Color, Color) {
        match self {
            Self::Entered => (Color::DarkGray, Color::White),
            Self::Marked(Mark::Correct) => (Color::Green, Color::Black),
            Self::Marked(Mark::Present) => (Color::Yellow, Color::Black),
            Self::Marked(Mark::Absent) => (Color::Gray, Color::White),
        }
    }

    fn mark(self) -> Option<Mark> {
        match self {
            Self::Entered => None,
            Self::Marked(mark) => Some(mark),
        }
    }
}

#[derive(Debug, Clone)]
struct GuessRow {
    letters: [char; WORD_LENGTH],
    states: [LetterState; WORD_LENGTH],
}

impl GuessRow {
    fn from_guess(guess: &str) -> Self {
        let mut letters = [' '; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(guess.chars()) {
            *slot = ch;
        }
        Self {
            letters,
            states: [LetterState::Entered; WORD_LENGTH],
        }
    }

    fn guess(&self) -> String {
        self.letters.iter().collect()
    }

    /// The finished event, once every letter carries a mark.
    fn to_event(&self) -> Option<Result<FeedbackEvent, ParseError>> {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (slot, state) in marks.iter_mut().zip(self.states) {
            *slot = state.mark()?;
        }
        Some(FeedbackEvent::from_guess(&self.guess(), marks))
    }
}

fn mark_for_key(c: char) -> Option<Mark> {
    Mark::from_char(c)
}

/// Candidate rows for the info panel, capped with an overflow line.
fn candidate_lines(candidates: &[String], columns: usize, max_rows: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut lines: Vec<String> = format_columns(candidates, columns)
        .lines()
        .take(max_rows)
        .map(|row| format!("  {row}"))
        .collect();
    let shown = (max_rows * columns).min(candidates.len());
    if candidates.len() > shown {
        lines.push(format!("  ... and {} more", candidates.len() - shown));
    }
    lines
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    MarkingFeedback { marking_index: usize },
    ConfirmingFeedback,
}

/// Groups everything the render functions read.
struct RenderContext<'a> {
    guesses: &'a [GuessRow],
    current_input: &'a str,
    state: TuiState,
    candidates: Option<&'a [String]>,
    start_words: &'a [String],
    columns: usize,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Screen contents and the key handling that edits them; no terminal involved.
#[derive(Debug)]
struct TuiModel {
    guesses: Vec<GuessRow>,
    current_input: String,
    state: TuiState,
    candidates: Option<Vec<String>>,
    start_words: Vec<String>,
    columns: usize,
    message: String,
    error_message: String,
    status: String,
}

impl TuiModel {
    fn new(columns: usize) -> Self {
        Self {
            guesses: Vec::new(),
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            candidates: None,
            start_words: Vec::new(),
            columns: columns.max(1),
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        }
    }

    fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            guesses: &self.guesses,
            current_input: &self.current_input,
            state: self.state,
            candidates: self.candidates.as_deref(),
            start_words: &self.start_words,
            columns: self.columns,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        debug_log!(
            "handle_key() - key code={:?}, modifiers={:?}, state={:?}",
            key.code,
            key.modifiers,
            self.state
        );

        if key.code == KeyCode::Esc {
            info_log!("handle_key() - ESC pressed, returning Exit");
            return Some(UserAction::Exit);
        }
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('n' | 'N'))
        {
            info_log!("handle_key() - CTRL+N pressed, returning NewGame");
            return Some(UserAction::NewGame);
        }

        match self.state {
            TuiState::EnteringGuess => {
                self.handle_guess_input(key);
                None
            }
            TuiState::MarkingFeedback { marking_index } => {
                self.handle_feedback_input(key, marking_index);
                None
            }
            TuiState::ConfirmingFeedback => self.handle_confirming_feedback_input(key),
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) {
        self.error_message.clear();
        if Self::has_modifier_keys(&key) {
            return;
        }

        match key.code {
            KeyCode::Char(c)
                if c.is_ascii_alphabetic() && self.current_input.len() < WORD_LENGTH =>
            {
                self.current_input.push(c.to_ascii_uppercase());
            }
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Enter if self.current_input.len() == WORD_LENGTH => {
                let guess = std::mem::take(&mut self.current_input);
                info_log!("handle_guess_input() - guess entered: '{}'", guess);
                self.guesses.push(GuessRow::from_guess(&guess));
                self.state = TuiState::MarkingFeedback { marking_index: 0 };
                self.status = format!("Guess entered: {guess} - Now mark feedback");
            }
            KeyCode::Enter => {
                self.error_message = "Guess must be exactly 5 letters!".to_string();
            }
            _ => {}
        }
    }

    fn handle_feedback_input(&mut self, key: KeyEvent, marking_index: usize) {
        self.error_message.clear();
        if Self::has_modifier_keys(&key) {
            return;
        }
        let Some(last_guess) = self.guesses.last_mut() else {
            self.state = TuiState::EnteringGuess;
            return;
        };

        match key.code {
            KeyCode::Char(c) => match mark_for_key(c) {
                Some(mark) => {
                    last_guess.states[marking_index] = LetterState::Marked(mark);
                    self.state = if marking_index + 1 < WORD_LENGTH {
                        TuiState::MarkingFeedback {
                            marking_index: marking_index + 1,
                        }
                    } else {
                        self.status = "Press ENTER to apply feedback".to_string();
                        TuiState::ConfirmingFeedback
                    };
                }
                None => {
                    self.error_message = format!(
                        "Invalid feedback! Use G (green), Y (yellow), or C (charcoal). ('{}' is not valid)",
                        c.to_ascii_uppercase()
                    );
                }
            },
            KeyCode::Backspace if marking_index > 0 => {
                last_guess.states[marking_index - 1] = LetterState::Entered;
                self.state = TuiState::MarkingFeedback {
                    marking_index: marking_index - 1,
                };
            }
            KeyCode::Backspace => {
                // Back out of the guess entirely and edit the word again.
                if let Some(row) = self.guesses.pop() {
                    self.current_input = row.guess();
                }
                self.state = TuiState::EnteringGuess;
            }
            _ => {}
        }
    }

    fn handle_confirming_feedback_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Enter => {
                let event = self.guesses.last().and_then(GuessRow::to_event)?;
                match event {
                    Ok(event) => {
                        self.state = TuiState::EnteringGuess;
                        info_log!("handle_confirming_feedback_input() - applying {}", event);
                        Some(UserAction::Feedback(event))
                    }
                    Err(e) => {
                        self.error_message = e.to_string();
                        None
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(last_guess) = self.guesses.last_mut() {
                    last_guess.states[WORD_LENGTH - 1] = LetterState::Entered;
                    self.state = TuiState::MarkingFeedback {
                        marking_index: WORD_LENGTH - 1,
                    };
                }
                None
            }
            _ => None,
        }
    }

    fn welcome(&mut self, info: &WelcomeInfo) {
        self.start_words.clone_from(&info.start_words);
        // A pending new-game notice already carries the word count.
        if self.message.is_empty() {
            self.message = format!("Loaded {} words.", info.word_count);
        }
        self.status = "Ready - Enter your first 5-letter guess".to_string();
    }

    fn new_game(&mut self, word_count: usize) {
        self.guesses.clear();
        self.current_input.clear();
        self.candidates = None;
        self.state = TuiState::EnteringGuess;
        self.error_message.clear();
        self.message = format!("New game started. Loaded {word_count} words.");
        self.status = "New game - Enter your first guess".to_string();
    }

    fn feedback_applied(&mut self, event: &FeedbackEvent) {
        self.status = format!("Applied {event}");
        self.error_message.clear();
    }

    fn show_candidates(&mut self, candidates: &[String]) {
        self.candidates = Some(candidates.to_vec());
        self.message.clear();
    }
}

/// Full-screen front end.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    model: TuiModel,
}

impl TuiInterface {
    pub fn new(columns: usize) -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            model: TuiModel::new(columns),
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

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = self.model.render_context();
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
                Constraint::Length(3),  // Title
                Constraint::Length(14), // Guess board
                Constraint::Min(8),     // Info panel
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx);
        Self::render_info(f, chunks[2], ctx);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORDLE HELPER")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default().title("Guesses").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let available_rows = (inner.height / ROW_SPACING) as usize;
        let showing_input = ctx.state == TuiState::EnteringGuess;
        let rows_needed = ctx.guesses.len() + usize::from(showing_input);

        // Older rounds scroll off the top.
        let skip_count = rows_needed.saturating_sub(available_rows);
        let visible = ctx.guesses.len().saturating_sub(skip_count);

        for (display_index, guess) in ctx.guesses.iter().skip(skip_count).enumerate() {
            let marking = match ctx.state {
                TuiState::MarkingFeedback { marking_index } if display_index + 1 == visible => {
                    Some(marking_index)
                }
                _ => None,
            };
            Self::render_guess_row(f, guess, display_index, inner, marking);
        }

        if showing_input && available_rows > 0 {
            let display_row = visible.min(available_rows - 1);
            Self::render_current_input(f, display_row, inner, ctx.current_input);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_guess_row(
        f: &mut Frame,
        guess: &GuessRow,
        row_index: usize,
        area: Rect,
        marking: Option<usize>,
    ) {
        let y = area.y + (row_index as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }

        let mut spans = vec![Span::raw("  ")];
        for (letter, state) in guess.letters.iter().zip(guess.states) {
            let (bg_color, fg_color) = state.colors();
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(fg_color).bg(bg_color),
            ));
            spans.push(Span::raw(" "));
        }

        if let Some(index) = marking {
            spans.push(Span::raw(format!(" <- Marking letter {} (G/Y/C)", index + 1)));
        }

        Self::render_line(f, area, y, spans);
    }

    fn render_line(f: &mut Frame, area: Rect, y: u16, spans: Vec<Span>) {
        let paragraph = Paragraph::new(Line::from(spans));
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_current_input(f: &mut Frame, row_index: usize, area: Rect, current_input: &str) {
        let y = area.y + (row_index as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }

        let mut spans = vec![Span::raw("  ")];
        for i in 0..WORD_LENGTH {
            let letter = current_input.chars().nth(i).unwrap_or(' ');
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            spans.push(Span::raw(" "));
        }

        Self::render_line(f, area, y, spans);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        match ctx.candidates {
            None if !ctx.start_words.is_empty() => {
                lines.push(Line::from(Span::styled("Best Starting Words:", HEADER_STYLE)));
                for row in format_columns(ctx.start_words, START_WORD_COLUMNS).lines() {
                    lines.push(Line::from(format!("  {row}")));
                }
                lines.push(Line::from(""));
            }
            None => {}
            Some(candidates) => {
                let style = if candidates.len() == 1 {
                    SUCCESS_STYLE
                } else {
                    INFO_STYLE
                };
                lines.push(Line::from(Span::styled(
                    format!("Valid Words ({}):", candidates.len()),
                    style,
                )));
                for row in candidate_lines(candidates, ctx.columns, MAX_CANDIDATE_ROWS) {
                    lines.push(Line::from(row));
                }
                lines.push(Line::from(""));
            }
        }

        if !ctx.message.is_empty() {
            lines.push(Line::from(Span::styled(ctx.message, MESSAGE_STYLE)));
        }
        if !ctx.error_message.is_empty() {
            lines.push(Line::from(Span::styled(ctx.error_message, ERROR_STYLE)));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringGuess => {
                "Type your 5-letter guess | ENTER: Submit | CTRL+N: New game | ESC: Quit"
            }
            TuiState::MarkingFeedback { .. } => {
                "G: Green (correct) | Y: Yellow (wrong position) | C: Charcoal (not in word) | BACKSPACE: Go back"
            }
            TuiState::ConfirmingFeedback => "ENTER: Apply feedback | BACKSPACE: Go back and edit",
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

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        // Only Press events, so Release/Repeat do not double the input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }
        Ok(self.model.handle_key(key))
    }
}

impl GameInterface for TuiInterface {
    fn display_welcome(&mut self, info: &WelcomeInfo) {
        self.model.welcome(info);
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Result<UserAction, ParseError> {
        loop {
            if let Err(e) = self.draw() {
                info_log!("read_action() - Draw failed ({}), returning Exit", e);
                return Ok(UserAction::Exit);
            }
            match self.handle_input() {
                Ok(Some(action)) => return Ok(action),
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Input error ({}), returning Exit", e);
                    return Ok(UserAction::Exit);
                }
            }
        }
    }

    fn display_parse_error(&mut self, error: &ParseError) {
        self.model.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_feedback(&mut self, event: &FeedbackEvent) {
        self.model.feedback_applied(event);
    }

    fn display_candidates(&mut self, candidates: &[String]) {
        self.model.show_candidates(candidates);
        self.draw_or_log();
    }

    fn display_no_candidates_message(&mut self) {
        self.model.message = "No candidates remain. Check your inputs or press CTRL+N.".to_string();
        self.draw_or_log();
    }

    fn display_solution_found(&mut self, solution: &str) {
        self.model.message = format!("✓ Solution found: {solution}");
        self.draw_or_log();
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        self.model.new_game(word_count);
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.model.status = "Exiting application...".to_string();
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

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_mark_keys() {
        assert_eq!(mark_for_key('g'), Some(Mark::Correct));
        assert_eq!(mark_for_key('Y'), Some(Mark::Present));
        assert_eq!(mark_for_key('c'), Some(Mark::Absent));
        assert_eq!(mark_for_key('x'), None);
    }

    #[test]
    fn test_guess_row_event_requires_every_mark() {
        let mut row = GuessRow::from_guess("CRANE");
        assert_eq!(row.guess(), "CRANE");
        assert!(row.to_event().is_none());

        row.states = [
            LetterState::Marked(Mark::Absent),
            LetterState::Marked(Mark::Correct),
            LetterState::Marked(Mark::Correct),
            LetterState::Marked(Mark::Absent),
            LetterState::Entered,
        ];
        assert!(row.to_event().is_none());

        row.states[4] = LetterState::Marked(Mark::Present);
        let event = row.to_event().unwrap().unwrap();
        assert_eq!(event.to_string(), "CRANE[CGGCY]");
    }

    #[test]
    fn test_letter_colors_follow_marks() {
        assert_eq!(
            LetterState::Marked(Mark::Correct).colors(),
            (Color::Green, Color::Black)
        );
        assert_eq!(
            LetterState::Marked(Mark::Present).colors(),
            (Color::Yellow, Color::Black)
        );
        assert_eq!(LetterState::Entered.mark(), None);
    }

    #[test]
    fn test_candidate_lines_fit() {
        let list = words(&["AAAAA", "BBBBB", "CCCCC"]);
        assert_eq!(candidate_lines(&list, 2, 10), vec!["  AAAAA BBBBB", "  CCCCC"]);
    }

    #[test]
    fn test_candidate_lines_overflow() {
        let list = words(&["AAAAA", "BBBBB", "CCCCC", "DDDDD", "EEEEE"]);
        assert_eq!(
            candidate_lines(&list, 2, 1),
            vec!["  AAAAA BBBBB", "  ... and 3 more"]
        );
        assert!(candidate_lines(&[], 3, 5).is_empty());
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_keys(model: &mut TuiModel, keys: &str) -> Option<UserAction> {
        let mut last = None;
        for c in keys.chars() {
            last = model.handle_key(key(KeyCode::Char(c)));
        }
        last
    }

    fn model_marking(guess: &str) -> TuiModel {
        let mut model = TuiModel::new(5);
        type_keys(&mut model, guess);
        model.handle_key(key(KeyCode::Enter));
        model
    }

    #[test]
    fn test_entering_guess_moves_to_marking() {
        let mut model = TuiModel::new(5);
        assert_eq!(type_keys(&mut model, "crane"), None);
        assert_eq!(model.current_input, "CRANE");

        // A sixth letter is ignored
        type_keys(&mut model, "s");
        assert_eq!(model.current_input, "CRANE");

        assert_eq!(model.handle_key(key(KeyCode::Enter)), None);
        assert_eq!(model.state, TuiState::MarkingFeedback { marking_index: 0 });
        assert!(model.current_input.is_empty());
        assert_eq!(model.guesses.len(), 1);
        assert_eq!(model.guesses[0].guess(), "CRANE");
    }

    #[test]
    fn test_guess_entry_rejects_short_words_and_non_letters() {
        let mut model = TuiModel::new(5);
        type_keys(&mut model, "cra");
        model.handle_key(key(KeyCode::Enter));
        assert_eq!(model.state, TuiState::EnteringGuess);
        assert_eq!(model.error_message, "Guess must be exactly 5 letters!");

        type_keys(&mut model, "1");
        assert!(model.error_message.contains("'1' is not a letter"));
        assert_eq!(model.current_input, "CRA");

        model.handle_key(key(KeyCode::Backspace));
        assert_eq!(model.current_input, "CR");
        assert!(model.error_message.is_empty());
    }

    #[test]
    fn test_modified_keys_do_not_type() {
        let mut model = TuiModel::new(5);
        let alt_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT);
        assert_eq!(model.handle_key(alt_a), None);
        assert!(model.current_input.is_empty());
    }

    #[test]
    fn test_marking_then_confirming_yields_feedback() {
        let mut model = model_marking("crane");
        assert_eq!(type_keys(&mut model, "cggc"), None);
        assert_eq!(model.state, TuiState::MarkingFeedback { marking_index: 4 });

        type_keys(&mut model, "y");
        assert_eq!(model.state, TuiState::ConfirmingFeedback);

        match model.handle_key(key(KeyCode::Enter)) {
            Some(UserAction::Feedback(event)) => assert_eq!(event.to_string(), "CRANE[CGGCY]"),
            other => panic!("Expected feedback, got {other:?}"),
        }
        assert_eq!(model.state, TuiState::EnteringGuess);
    }

    #[test]
    fn test_invalid_mark_keeps_position() {
        let mut model = model_marking("crane");
        type_keys(&mut model, "gx");
        assert_eq!(model.state, TuiState::MarkingFeedback { marking_index: 1 });
        assert!(model.error_message.contains("'X' is not valid"));
        assert_eq!(model.guesses[0].states[1], LetterState::Entered);
    }

    #[test]
    fn test_backspace_steps_back_through_marks() {
        let mut model = model_marking("crane");
        type_keys(&mut model, "gy");
        model.handle_key(key(KeyCode::Backspace));
        assert_eq!(model.state, TuiState::MarkingFeedback { marking_index: 1 });
        assert_eq!(model.guesses[0].states[1], LetterState::Entered);
        assert_eq!(model.guesses[0].states[0], LetterState::Marked(Mark::Correct));

        model.handle_key(key(KeyCode::Backspace));
        model.handle_key(key(KeyCode::Backspace));
        assert_eq!(model.state, TuiState::EnteringGuess);
        assert!(model.guesses.is_empty());
        assert_eq!(model.current_input, "CRANE");
    }

    #[test]
    fn test_backspace_from_confirmation_unmarks_last_letter() {
        let mut model = model_marking("crane");
        type_keys(&mut model, "cggcy");
        assert_eq!(model.handle_key(key(KeyCode::Backspace)), None);
        assert_eq!(
            model.state,
            TuiState::MarkingFeedback {
                marking_index: WORD_LENGTH - 1
            }
        );
        assert_eq!(model.guesses[0].states[WORD_LENGTH - 1], LetterState::Entered);
        // Unfinished rows cannot be confirmed
        assert!(model.guesses[0].to_event().is_none());
    }

    #[test]
    fn test_escape_and_ctrl_n_from_any_state() {
        let mut model = model_marking("crane");
        assert_eq!(model.handle_key(key(KeyCode::Esc)), Some(UserAction::Exit));
        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(model.handle_key(ctrl_n), Some(UserAction::NewGame));
        assert_eq!(model.state, TuiState::MarkingFeedback { marking_index: 0 });
    }

    #[test]
    fn test_welcome_after_new_game_keeps_notice() {
        let info = WelcomeInfo {
            start_words: words(&["SLATE"]),
            word_count: 3,
        };
        let mut model = model_marking("crane");
        model.show_candidates(&words(&["BRAKE"]));

        model.new_game(3);
        model.welcome(&info);
        assert_eq!(model.message, "New game started. Loaded 3 words.");
        assert!(model.guesses.is_empty());
        assert!(model.candidates.is_none());
        assert_eq!(model.state, TuiState::EnteringGuess);

        let mut fresh = TuiModel::new(5);
        fresh.welcome(&info);
        assert_eq!(fresh.message, "Loaded 3 words.");
        assert_eq!(fresh.start_words, words(&["SLATE"]));
    }
}
