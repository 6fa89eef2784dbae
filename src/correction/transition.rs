//! The indexed table of weighted character edits.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;

use crate::error::{RespellError, Result};

/// Weights at or below this magnitude are treated as noise and dropped at
/// build time.
pub const MIN_WEIGHT: f64 = 1e-10;

/// The source side of an edit: either a concrete character to substitute,
/// or the insertion marker (no source character consumed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Source {
    /// Pure insertion of the target character.
    Insertion,
    /// Substitution of this character by the target character.
    Char(char),
}

/// An indexed, immutable table of weighted single-character edits.
///
/// Each source maps to its row: the `(target, weight)` pairs sorted
/// ascending by weight, ties broken by target character so that row order
/// (and therefore every downstream result) is reproducible. Weights are
/// stored as absolute values; the sign of the raw weight is discarded.
#[derive(Debug, Clone, Default)]
pub struct TransitionModel {
    rows: AHashMap<Source, Vec<(char, f64)>>,
}

impl TransitionModel {
    /// Build a model from raw `(source, target, weight)` triples.
    ///
    /// A duplicate `(source, target)` pair keeps the last weight seen.
    /// Entries whose absolute weight is at or below [`MIN_WEIGHT`] are
    /// dropped; a source whose entries are all dropped gets no row.
    pub fn from_triples<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = (Source, char, f64)>,
    {
        let mut raw: AHashMap<Source, AHashMap<char, f64>> = AHashMap::new();
        for (source, target, weight) in triples {
            raw.entry(source).or_default().insert(target, weight.abs());
        }

        let mut rows = AHashMap::new();
        for (source, entries) in raw {
            let mut row: Vec<(char, f64)> = entries
                .into_iter()
                .filter(|&(_, w)| w > MIN_WEIGHT)
                .collect();
            if row.is_empty() {
                continue;
            }
            row.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
            rows.insert(source, row);
        }

        TransitionModel { rows }
    }

    /// Parse a model from tab-separated lines: `source \t target \t weight`.
    ///
    /// An empty source field denotes insertion; source and target are
    /// otherwise exactly one character. Any malformed line aborts the whole
    /// load with [`RespellError::Format`].
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut triples = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != 3 {
                return Err(RespellError::format(
                    line_no,
                    format!("expected 3 tab-separated fields, got {}", fields.len()),
                ));
            }

            let source = parse_source(fields[0], line_no)?;
            let target = parse_single_char(fields[1], "target", line_no)?;
            let weight: f64 = fields[2].trim().parse().map_err(|_| {
                RespellError::format(line_no, format!("weight is not a number: {:?}", fields[2]))
            })?;
            if !weight.is_finite() {
                return Err(RespellError::format(
                    line_no,
                    format!("weight is not finite: {weight}"),
                ));
            }

            triples.push((source, target, weight));
        }

        Ok(Self::from_triples(triples))
    }

    /// Load a model from a tab-separated file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// The row for a source, or an empty slice if the source has never
    /// been observed.
    pub fn row(&self, source: Source) -> &[(char, f64)] {
        self.rows.get(&source).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of sources with a non-empty row.
    pub fn source_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of usable edits across all rows.
    pub fn edge_count(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }

    /// Check whether the model has no usable edits at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn parse_source(field: &str, line_no: usize) -> Result<Source> {
    if field.is_empty() {
        return Ok(Source::Insertion);
    }
    Ok(Source::Char(parse_single_char(field, "source", line_no)?))
}

fn parse_single_char(field: &str, name: &str, line_no: usize) -> Result<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(RespellError::format(
            line_no,
            format!("{name} must be a single character, got {field:?}"),
        )),
    }
}
