// Library interface for wordle-helper
// This allows integration tests to access internal modules

pub mod cli;
pub mod constraints;
pub mod error;
pub mod feedback;
pub mod game_state;
pub mod logging;
pub mod solver;
pub mod tui;
pub mod wordbank;

/// Letters per word.
pub const WORD_LENGTH: usize = 5;

// Re-export commonly used items for easier testing
pub use constraints::{ConstraintState, LetterSet};
pub use error::{HelperError, ParseError};
pub use feedback::{FeedbackEvent, LetterFeedback, Mark};
pub use game_state::{GameInterface, Session, UserAction, game_loop, parse_input};
pub use solver::{CandidateFilter, filter_candidates, is_consistent};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str};
