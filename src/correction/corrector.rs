//! High-level correction facade tying the model, dictionary, and search
//! together.

use std::sync::atomic::AtomicBool;

use serde::{Deserialize, Serialize};

use crate::correction::dictionary::Dictionary;
use crate::correction::search::{self, SearchConfig};
use crate::correction::transition::TransitionModel;
use crate::correction::word::Word;
use crate::error::Result;

pub use crate::correction::search::Correction;

/// Corrects single tokens against a fixed dictionary using a weighted
/// character-edit model.
///
/// The corrector itself is immutable and carries no per-query state; each
/// call to [`correct`](Corrector::correct) runs an independent search, so
/// one corrector can serve concurrent callers.
pub struct Corrector {
    dictionary: Dictionary,
    model: TransitionModel,
    config: SearchConfig,
}

impl Corrector {
    /// Create a corrector with the default search budgets.
    pub fn new(dictionary: Dictionary, model: TransitionModel) -> Self {
        Corrector {
            dictionary,
            model,
            config: SearchConfig::default(),
        }
    }

    /// Create a corrector with custom search budgets.
    pub fn with_config(dictionary: Dictionary, model: TransitionModel, config: SearchConfig) -> Self {
        Corrector {
            dictionary,
            model,
            config,
        }
    }

    /// Update the search budgets.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Correct a token given as a string.
    ///
    /// `Ok(Some(_))` carries every dictionary word tied at the minimal
    /// cumulative edit cost. `Ok(None)` means the reachable space was
    /// exhausted without finding a dictionary word — a recoverable outcome
    /// the caller may retry with a larger dictionary or a wider model.
    pub fn correct(&self, token: &str) -> Result<Option<Correction>> {
        self.correct_word(&Word::new(token))
    }

    /// Correct a token given as a [`Word`].
    pub fn correct_word(&self, word: &Word) -> Result<Option<Correction>> {
        search::closest_correct(&self.dictionary, &self.model, &self.config, word, None)
    }

    /// Correct a token, aborting with
    /// [`RespellError::OperationCancelled`](crate::error::RespellError::OperationCancelled)
    /// as soon as `cancel` is observed set.
    pub fn correct_with_cancel(
        &self,
        word: &Word,
        cancel: &AtomicBool,
    ) -> Result<Option<Correction>> {
        search::closest_correct(
            &self.dictionary,
            &self.model,
            &self.config,
            word,
            Some(cancel),
        )
    }

    /// Check if a token is already correctly spelled.
    pub fn is_correct(&self, token: &str) -> bool {
        self.dictionary.contains(&Word::new(token))
    }

    /// The dictionary this corrector accepts words from.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The edit model this corrector searches with.
    pub fn model(&self) -> &TransitionModel {
        &self.model
    }

    /// Get statistics about the corrector.
    pub fn stats(&self) -> CorrectorStats {
        CorrectorStats {
            dictionary_words: self.dictionary.len(),
            model_sources: self.model.source_count(),
            model_edges: self.model.edge_count(),
        }
    }
}

/// Statistics about a corrector's inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectorStats {
    /// Number of words in the dictionary.
    pub dictionary_words: usize,
    /// Number of sources with at least one usable edit.
    pub model_sources: usize,
    /// Total number of usable edits across all sources.
    pub model_edges: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correction::transition::Source;

    fn sample_corrector() -> Corrector {
        let dictionary = Dictionary::from_words(["facebook", "britney"]);
        let model = TransitionModel::from_triples(vec![
            (Source::Insertion, 'o', 0.5),
            (Source::Insertion, 'r', 0.6),
            (Source::Char('i'), 'y', 0.2),
            (Source::Char('y'), 'i', 0.2),
        ]);
        Corrector::new(dictionary, model)
    }

    #[test]
    fn test_correct_simple_typo() {
        let corrector = sample_corrector();

        let correction = corrector.correct("facebok").unwrap().unwrap();
        assert_eq!(correction.words, vec![Word::new("facebook")]);
        assert_eq!(correction.cost, 0.5);
    }

    #[test]
    fn test_is_correct() {
        let corrector = sample_corrector();
        assert!(corrector.is_correct("britney"));
        assert!(!corrector.is_correct("brittney"));
    }

    #[test]
    fn test_correct_word_in_dictionary_is_identity() {
        let corrector = sample_corrector();
        let correction = corrector.correct("britney").unwrap().unwrap();
        assert!(correction.is_identity());
        assert_eq!(correction.words, vec![Word::new("britney")]);
    }

    #[test]
    fn test_unreachable_token() {
        // None of the token's characters have a row and there are no
        // insertions, so the search dead-ends instead of looping.
        let dictionary = Dictionary::from_words(["zz"]);
        let model = TransitionModel::from_triples(vec![(Source::Char('q'), 'w', 1.0)]);
        let corrector = Corrector::new(dictionary, model);
        assert!(corrector.correct("ab").unwrap().is_none());
    }

    #[test]
    fn test_stats() {
        let corrector = sample_corrector();
        let stats = corrector.stats();
        assert_eq!(stats.dictionary_words, 2);
        assert_eq!(stats.model_sources, 3);
        assert_eq!(stats.model_edges, 4);
    }

    #[test]
    fn test_set_config() {
        let mut corrector = sample_corrector();
        corrector.set_config(SearchConfig {
            max_expansions: Some(0),
            ..Default::default()
        });

        // The identity short-circuit does not consume the budget.
        assert!(corrector.correct("facebook").unwrap().is_some());
        // Anything needing an expansion now fails.
        assert!(corrector.correct("facebok").is_err());
    }
}
