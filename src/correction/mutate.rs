//! Pure single-edit candidate generation.
//!
//! Given a word and one entry of the transition table, these functions
//! produce every word exactly one edit away. They are pure: no visited-set
//! bookkeeping, no weights — the search layer owns both.

use std::collections::HashSet;

use crate::correction::transition::Source;
use crate::correction::word::Word;

/// All words obtained by inserting `ch` at each position of `word`.
///
/// There are `len + 1` insertion positions; inserting into a run of equal
/// characters produces duplicate words, which the set collapses.
pub fn insertions(word: &Word, ch: char) -> HashSet<Word> {
    (0..=word.len())
        .map(|i| word.with_inserted(i, ch))
        .collect()
}

/// All words obtained by replacing one occurrence of `from` in `word`
/// with `to`.
///
/// One candidate per occurrence index, so structurally distinct results
/// stay distinct ("aa" with a→b yields both "ba" and "ab"). Empty when
/// `from` does not occur.
pub fn substitutions(word: &Word, from: char, to: char) -> HashSet<Word> {
    word.chars()
        .iter()
        .enumerate()
        .filter(|&(_, &ch)| ch == from)
        .map(|(i, _)| word.with_replaced(i, to))
        .collect()
}

/// All words one edit away from `word` under the given table entry.
pub fn mutations(word: &Word, source: Source, target: char) -> HashSet<Word> {
    match source {
        Source::Insertion => insertions(word, target),
        Source::Char(from) => substitutions(word, from, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> HashSet<Word> {
        items.iter().map(|s| Word::new(s)).collect()
    }

    #[test]
    fn test_insertions_every_position() {
        let result = insertions(&Word::new("ab"), 'x');
        assert_eq!(result, words(&["xab", "axb", "abx"]));
    }

    #[test]
    fn test_insertions_into_empty_word() {
        let result = insertions(&Word::new(""), 'a');
        assert_eq!(result, words(&["a"]));
    }

    #[test]
    fn test_insertions_collapse_duplicates() {
        // Inserting 'a' into "aa" gives "aaa" from all three positions.
        let result = insertions(&Word::new("aa"), 'a');
        assert_eq!(result, words(&["aaa"]));
    }

    #[test]
    fn test_substitutions_per_occurrence() {
        // Both occurrence indices must yield distinct words, not one merged
        // candidate.
        let result = substitutions(&Word::new("aa"), 'a', 'b');
        assert_eq!(result, words(&["ba", "ab"]));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_substitutions_absent_source() {
        let result = substitutions(&Word::new("cat"), 'z', 'b');
        assert!(result.is_empty());
    }

    #[test]
    fn test_substitutions_single_occurrence() {
        let result = substitutions(&Word::new("cat"), 'c', 'b');
        assert_eq!(result, words(&["bat"]));
    }

    #[test]
    fn test_mutations_dispatch() {
        let word = Word::new("ab");
        assert_eq!(
            mutations(&word, Source::Insertion, 'x'),
            insertions(&word, 'x')
        );
        assert_eq!(
            mutations(&word, Source::Char('a'), 'x'),
            substitutions(&word, 'a', 'x')
        );
    }

    #[test]
    fn test_mutations_are_pure() {
        let word = Word::new("abc");
        let first = mutations(&word, Source::Char('b'), 'z');
        let second = mutations(&word, Source::Char('b'), 'z');
        assert_eq!(first, second);
        assert_eq!(word, Word::new("abc"));
    }
}
