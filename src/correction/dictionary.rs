//! The acceptance set of known-correct words.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;

use crate::correction::word::Word;
use crate::error::Result;

/// A set of words considered correctly spelled.
///
/// Membership in the dictionary is what terminates the correction search,
/// so lookups must be cheap; words are stored in a hash set keyed by their
/// structural identity.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: AHashSet<Word>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Dictionary {
            words: AHashSet::new(),
        }
    }

    /// Build a dictionary from anything that yields words.
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<Word>,
    {
        Dictionary {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a word to the dictionary.
    pub fn add_word<W: Into<Word>>(&mut self, word: W) {
        self.words.insert(word.into());
    }

    /// Check if a word is in the dictionary.
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in the dictionary.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Merge another dictionary into this one.
    pub fn merge(&mut self, other: &Dictionary) {
        for word in &other.words {
            self.words.insert(word.clone());
        }
    }

    /// Load a dictionary from a text file with one word per line.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut dictionary = Dictionary::new();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                dictionary.add_word(word);
            }
        }

        Ok(dictionary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_dictionary_basic_operations() {
        let mut dict = Dictionary::new();

        assert!(dict.is_empty());
        assert!(!dict.contains(&Word::new("hello")));

        dict.add_word("hello");
        assert!(dict.contains(&Word::new("hello")));
        assert_eq!(dict.len(), 1);

        // Duplicate insert is a no-op
        dict.add_word("hello");
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_from_words() {
        let dict = Dictionary::from_words(["facebook", "britney"]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains(&Word::new("facebook")));
        assert!(dict.contains(&Word::new("britney")));
        assert!(!dict.contains(&Word::new("faceboook")));
    }

    #[test]
    fn test_merge_dictionaries() {
        let mut dict1 = Dictionary::from_words(["hello", "world"]);
        let dict2 = Dictionary::from_words(["hello", "test"]);

        dict1.merge(&dict2);
        assert_eq!(dict1.len(), 3);
        assert!(dict1.contains(&Word::new("test")));
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "hello").unwrap();
        writeln!(temp_file, "  world  ").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "hello").unwrap();
        temp_file.flush().unwrap();

        let dict = Dictionary::load_from_file(temp_file.path()).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains(&Word::new("hello")));
        assert!(dict.contains(&Word::new("world")));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Dictionary::load_from_file("/nonexistent/dictionary.txt");
        assert!(result.is_err());
    }
}
