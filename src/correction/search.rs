//! Uniform-cost search over the implicit graph of single-character edits.
//!
//! Words are nodes; every transition-table entry applied at every position
//! is an edge weighted by the entry's weight. The search expands words in
//! ascending order of cumulative cost until it pops a dictionary word, then
//! drains every equal-cost dictionary word still on the frontier so that
//! ties are returned completely, no matter which parent word or source
//! character produced them.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::correction::dictionary::Dictionary;
use crate::correction::mutate;
use crate::correction::transition::{Source, TransitionModel};
use crate::correction::word::Word;
use crate::error::{RespellError, Result};

/// Budgets for one correction search.
///
/// The mutation graph is unbounded: a model with many low-weight edits and
/// a small dictionary can reach exponentially many words, so hardened
/// callers should keep at least one budget set. Exceeding a budget aborts
/// the search with [`RespellError::ResourceExhausted`]; genuinely running
/// out of reachable words is not an error (see
/// [`Corrector::correct`](crate::correction::corrector::Corrector::correct)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Abort once the cheapest unexpanded word costs more than this.
    pub max_cost: Option<f64>,
    /// Abort once the visited set grows beyond this many words.
    pub max_visited: Option<usize>,
    /// Abort once this many words have been expanded.
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_cost: None,
            max_visited: Some(1_000_000),
            max_expansions: None,
        }
    }
}

impl SearchConfig {
    /// A configuration with no budgets at all. The search then terminates
    /// only by reaching the dictionary or exhausting the reachable space.
    pub fn unbounded() -> Self {
        SearchConfig {
            max_cost: None,
            max_visited: None,
            max_expansions: None,
        }
    }
}

/// The outcome of a successful correction search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    /// Every dictionary word tied at the minimal cumulative cost, sorted.
    pub words: Vec<Word>,
    /// The minimal cumulative edit cost from the query.
    pub cost: f64,
    /// Number of words expanded before the dictionary was reached.
    pub expanded: usize,
}

impl Correction {
    /// Whether the query itself was already correct.
    pub fn is_identity(&self) -> bool {
        self.cost == 0.0
    }
}

/// Cumulative edit cost. Weights are finite and non-negative by
/// construction, so total ordering over the raw bits is safe.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A frontier entry: a word reachable at some cumulative cost. Ordered by
/// cost, then by word, so equal-cost pops are deterministic across runs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Frontier {
    cost: Cost,
    word: Word,
}

/// Find the dictionary word(s) reachable from `query` at the lowest
/// cumulative edit cost.
///
/// Returns `Ok(None)` when the reachable space is exhausted without
/// touching the dictionary. Budgets and cancellation abort with the
/// corresponding error instead.
pub(crate) fn closest_correct(
    dictionary: &Dictionary,
    model: &TransitionModel,
    config: &SearchConfig,
    query: &Word,
    cancel: Option<&AtomicBool>,
) -> Result<Option<Correction>> {
    // A query that is already correct is returned at cost zero without
    // entering the mutation search.
    if dictionary.contains(query) {
        return Ok(Some(Correction {
            words: vec![query.clone()],
            cost: 0.0,
            expanded: 0,
        }));
    }

    // Best known cumulative cost per word, seeded with the query. Scoped
    // to this invocation only.
    let mut visited: AHashMap<Word, f64> = AHashMap::new();
    visited.insert(query.clone(), 0.0);

    let mut heap = BinaryHeap::new();
    heap.push(Reverse(Frontier {
        cost: Cost(0.0),
        word: query.clone(),
    }));

    let mut expanded = 0usize;

    while let Some(Reverse(entry)) = heap.pop() {
        if let Some(flag) = cancel
            && flag.load(AtomicOrdering::Relaxed)
        {
            return Err(RespellError::cancelled("correction search cancelled"));
        }

        let Frontier {
            cost: Cost(cost),
            word,
        } = entry;

        // Stale entry: a cheaper path to this word was recorded after this
        // entry was pushed.
        if visited.get(&word).is_some_and(|&best| cost > best) {
            continue;
        }

        if let Some(max_cost) = config.max_cost
            && cost > max_cost
        {
            return Err(RespellError::resource_exhausted(format!(
                "cheapest unexpanded word costs {cost}, above the ceiling {max_cost}"
            )));
        }

        if dictionary.contains(&word) {
            return Ok(Some(drain_cost_ties(
                dictionary, &visited, &mut heap, word, cost, expanded,
            )));
        }

        if let Some(max_expansions) = config.max_expansions
            && expanded >= max_expansions
        {
            return Err(RespellError::resource_exhausted(format!(
                "expansion budget of {max_expansions} words used up"
            )));
        }
        expanded += 1;

        // Candidate sources: the insertion marker plus every distinct
        // character of the word. Sources without a row contribute nothing.
        let mut sources = vec![Source::Insertion];
        sources.extend(word.distinct_chars().into_iter().map(Source::Char));

        for source in sources {
            for &(target, weight) in model.row(source) {
                for candidate in mutate::mutations(&word, source, target) {
                    let next = cost + weight;
                    if visited.get(&candidate).is_some_and(|&best| best <= next) {
                        continue;
                    }
                    visited.insert(candidate.clone(), next);
                    if let Some(max_visited) = config.max_visited
                        && visited.len() > max_visited
                    {
                        return Err(RespellError::resource_exhausted(format!(
                            "visited-set budget of {max_visited} words used up"
                        )));
                    }
                    heap.push(Reverse(Frontier {
                        cost: Cost(next),
                        word: candidate,
                    }));
                }
            }
        }
    }

    // Every reachable word was expanded without touching the dictionary.
    Ok(None)
}

/// Collect every non-stale dictionary word still on the frontier at
/// exactly the accepted cost. Edge weights are strictly positive, so no
/// later expansion can produce another dictionary word at this cost.
fn drain_cost_ties(
    dictionary: &Dictionary,
    visited: &AHashMap<Word, f64>,
    heap: &mut BinaryHeap<Reverse<Frontier>>,
    first: Word,
    cost: f64,
    expanded: usize,
) -> Correction {
    let mut words = vec![first];

    while let Some(Reverse(entry)) = heap.pop() {
        if entry.cost != Cost(cost) {
            break;
        }
        let word = entry.word;
        if visited.get(&word).is_some_and(|&best| entry.cost.0 > best) {
            continue;
        }
        if dictionary.contains(&word) {
            words.push(word);
        }
    }

    words.sort();
    words.dedup();

    Correction {
        words,
        cost,
        expanded,
    }
}
