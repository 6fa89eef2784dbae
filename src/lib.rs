//! # Respell
//!
//! Weighted-edit spelling correction for Rust.
//!
//! Given a dictionary of known-correct words and a table of per-character
//! edit weights (insertions and substitutions, learned elsewhere), respell
//! finds the dictionary word(s) reachable from a query token by the lowest
//! cumulative edit weight.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Uniform-cost search over the implicit graph of single-character edits
//! - Complete tie merging: every dictionary word at the minimal cost is returned
//! - Configurable cost / visited / expansion budgets and cooperative cancellation

pub mod cli;
pub mod correction;
pub mod error;

pub mod prelude {
    pub use crate::correction::{
        Correction, Corrector, CorrectorStats, Dictionary, SearchConfig, Source, TransitionModel,
        Word,
    };
    pub use crate::error::{RespellError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
