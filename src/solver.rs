use crate::WORD_LENGTH;
use crate::constraints::ConstraintState;
use crate::wordbank::normalise;

/// Whether `word` satisfies every positional and existence constraint.
///
/// Required letters are only checked for presence: a word containing a
/// letter once passes even if feedback implied it appears twice.
#[must_use]
pub fn is_consistent(word: &str, state: &ConstraintState) -> bool {
    let has_required = state.required_chars().iter().all(|c| word.contains(c));
    has_required
        && word.chars().count() == WORD_LENGTH
        && word
            .chars()
            .enumerate()
            .all(|(position, c)| state.allows(position, c))
}

/// Keeps the words consistent with `state`, preserving order.
#[must_use]
pub fn filter_candidates(candidates: &[String], state: &ConstraintState) -> Vec<String> {
    candidates
        .iter()
        .filter(|word| is_consistent(word, state))
        .cloned()
        .collect()
}

/// The working list of words not yet ruled out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFilter {
    candidates: Vec<String>,
}

impl CandidateFilter {
    /// Starts from the full dictionary, uppercased, sorted and deduplicated.
    /// Entries that are not five ASCII letters are dropped.
    #[must_use]
    pub fn new(dictionary: &[String]) -> Self {
        let mut candidates: Vec<String> = dictionary.iter().filter_map(|w| normalise(w)).collect();
        candidates.sort();
        candidates.dedup();
        Self { candidates }
    }

    /// Narrows the list against `state`. Never adds words back.
    pub fn update(&mut self, state: &ConstraintState) {
        self.candidates = filter_candidates(&self.candidates, state);
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
