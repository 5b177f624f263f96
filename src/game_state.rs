use crate::constraints::ConstraintState;
use crate::error::ParseError;
use crate::feedback::FeedbackEvent;
use crate::solver::CandidateFilter;
use crate::{debug_log, info_log};

/// Input token that throws away all feedback and starts over.
pub const NEW_GAME_COMMAND: &str = "ng";
const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

/// What the user asked for on one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Feedback(FeedbackEvent),
    NewGame,
    Exit,
}

/// Interprets one input line: a command, or five `<LETTER>:<MARK>` tokens.
///
/// # Errors
/// Returns the [`ParseError`] of the feedback grammar when the line is not a
/// command and not well-formed feedback.
pub fn parse_input(line: &str) -> Result<UserAction, ParseError> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case(NEW_GAME_COMMAND) {
        return Ok(UserAction::NewGame);
    }
    if EXIT_COMMANDS
        .iter()
        .any(|command| trimmed.eq_ignore_ascii_case(command))
    {
        return Ok(UserAction::Exit);
    }
    trimmed.parse().map(UserAction::Feedback)
}

/// What to show when a game starts.
#[derive(Debug, Clone)]
pub struct WelcomeInfo {
    pub start_words: Vec<String>,
    pub word_count: usize,
}

/// Front end driven by [`game_loop`].
///
/// Implemented by the line-based CLI and the full-screen TUI.
pub trait GameInterface {
    fn display_welcome(&mut self, info: &WelcomeInfo);
    /// Blocks for the next action. End of input should map to `Exit`.
    fn read_action(&mut self) -> Result<UserAction, ParseError>;
    fn display_parse_error(&mut self, error: &ParseError);
    fn display_feedback(&mut self, event: &FeedbackEvent);
    fn display_candidates(&mut self, candidates: &[String]);
    fn display_no_candidates_message(&mut self);
    fn display_solution_found(&mut self, solution: &str);
    fn display_new_game_message(&mut self, word_count: usize);
    fn display_exit_message(&mut self);
}

/// One game: the dictionary plus the constraint/candidate pair built from it.
#[derive(Debug, Clone)]
pub struct Session {
    dictionary: Vec<String>,
    constraints: ConstraintState,
    filter: CandidateFilter,
    history: Vec<FeedbackEvent>,
}

impl Session {
    #[must_use]
    pub fn new(dictionary: &[String]) -> Self {
        let filter = CandidateFilter::new(dictionary);
        Self {
            dictionary: filter.candidates().to_vec(),
            constraints: ConstraintState::new(),
            filter,
            history: Vec::new(),
        }
    }

    /// Folds `event` into the constraints, then narrows the candidates.
    pub fn apply(&mut self, event: FeedbackEvent) -> &[String] {
        debug_log!(
            "Session::apply() - {} against {} candidates",
            event,
            self.filter.len()
        );
        self.constraints.update(&event);
        self.filter.update(&self.constraints);
        debug_log!("Session::apply() - {} candidates remain", self.filter.len());
        self.history.push(event);
        self.filter.candidates()
    }

    /// Discards all feedback and restores the full dictionary.
    pub fn reset(&mut self) {
        info_log!("Session::reset() - discarding {} rounds", self.history.len());
        self.constraints = ConstraintState::new();
        self.filter = CandidateFilter::new(&self.dictionary);
        self.history.clear();
    }

    #[must_use]
    pub fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] {
        self.filter.candidates()
    }

    #[must_use]
    pub fn history(&self) -> &[FeedbackEvent] {
        &self.history
    }

    #[must_use]
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }
}

/// Runs the read-update-display cycle until the user exits.
pub fn game_loop<G: GameInterface + ?Sized>(
    session: &mut Session,
    start_words: &[String],
    interface: &mut G,
) {
    let welcome = WelcomeInfo {
        start_words: start_words.to_vec(),
        word_count: session.dictionary_len(),
    };
    interface.display_welcome(&welcome);

    loop {
        let action = match interface.read_action() {
            Ok(action) => action,
            Err(e) => {
                debug_log!("game_loop() - rejected input: {}", e);
                interface.display_parse_error(&e);
                continue;
            }
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                session.reset();
                interface.display_new_game_message(session.dictionary_len());
                interface.display_welcome(&welcome);
            }
            UserAction::Feedback(event) => {
                interface.display_feedback(&event);
                let candidates = session.apply(event);
                interface.display_candidates(candidates);
                match candidates {
                    [] => interface.display_no_candidates_message(),
                    [solution] => interface.display_solution_found(solution),
                    _ => {}
                }
            }
        }
    }
}
