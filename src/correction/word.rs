//! The word type used as node identity in the mutation graph.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered, immutable sequence of characters.
///
/// Equality and hashing are structural: two words are the same key iff
/// their character sequences match. `Ord` is derived so result sets can be
/// sorted deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(Vec<char>);

impl Word {
    /// Create a word from a string slice.
    pub fn new(s: &str) -> Self {
        Word(s.chars().collect())
    }

    /// The number of characters in the word.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the word has no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The characters of the word, in order.
    pub fn chars(&self) -> &[char] {
        &self.0
    }

    /// The distinct characters of the word, in first-occurrence order.
    pub fn distinct_chars(&self) -> Vec<char> {
        let mut seen = Vec::new();
        for &ch in &self.0 {
            if !seen.contains(&ch) {
                seen.push(ch);
            }
        }
        seen
    }

    /// A copy of this word with `ch` inserted before position `index`.
    /// `index == len()` appends.
    pub fn with_inserted(&self, index: usize, ch: char) -> Word {
        let mut chars = self.0.clone();
        chars.insert(index, ch);
        Word(chars)
    }

    /// A copy of this word with the character at `index` replaced by `ch`.
    pub fn with_replaced(&self, index: usize, ch: char) -> Word {
        let mut chars = self.0.clone();
        chars[index] = ch;
        Word(chars)
    }
}

impl From<&str> for Word {
    fn from(s: &str) -> Self {
        Word::new(s)
    }
}

impl From<String> for Word {
    fn from(s: String) -> Self {
        Word::new(&s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.0 {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

// Words serialize as plain strings so CLI JSON output stays readable.
impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Word {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Word::new(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_structural_equality() {
        let a = Word::new("hello");
        let b = Word::from("hello".to_string());
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_empty_word() {
        let empty = Word::new("");
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.to_string(), "");
    }

    #[test]
    fn test_distinct_chars() {
        let word = Word::new("banana");
        assert_eq!(word.distinct_chars(), vec!['b', 'a', 'n']);
    }

    #[test]
    fn test_with_inserted() {
        let word = Word::new("ab");
        assert_eq!(word.with_inserted(0, 'x'), Word::new("xab"));
        assert_eq!(word.with_inserted(1, 'x'), Word::new("axb"));
        assert_eq!(word.with_inserted(2, 'x'), Word::new("abx"));
        // Original is untouched
        assert_eq!(word, Word::new("ab"));
    }

    #[test]
    fn test_with_replaced() {
        let word = Word::new("cat");
        assert_eq!(word.with_replaced(0, 'b'), Word::new("bat"));
        assert_eq!(word.with_replaced(2, 'r'), Word::new("car"));
    }

    #[test]
    fn test_ordering_is_deterministic() {
        let mut words = vec![Word::new("ba"), Word::new("ab"), Word::new("a")];
        words.sort();
        assert_eq!(words, vec![Word::new("a"), Word::new("ab"), Word::new("ba")]);
    }

    #[test]
    fn test_serde_round_trip() {
        let word = Word::new("hello");
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(json, "\"hello\"");
        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back, word);
    }
}
