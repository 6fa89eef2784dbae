//! Weighted-edit correction of single tokens against a fixed dictionary.
//!
//! This module is the core of respell: a transition model indexing the
//! learned per-character edit weights, pure candidate generation for
//! single-character mutations, and a uniform-cost search that walks the
//! implicit mutation graph until it reaches a dictionary word.

pub mod corrector;
pub mod dictionary;
pub mod mutate;
pub mod search;
pub mod transition;
pub mod word;

pub use corrector::{Correction, Corrector, CorrectorStats};
pub use dictionary::Dictionary;
pub use search::SearchConfig;
pub use transition::{Source, TransitionModel};
pub use word::Word;
