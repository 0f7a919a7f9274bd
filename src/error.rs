//! Crate-level error: every module's error converts into [`CatalogError`].

use thiserror::Error;

use crate::behavioral::chain_of_responsibility::ChainError;
use crate::behavioral::command::FileSystemError;
use crate::behavioral::interpreter::InterpretError;
use crate::behavioral::iterator::BagError;
use crate::behavioral::observer::EditorError;
use crate::behavioral::strategy::StrategyError;
use crate::config::ConfigError;
use crate::creational::FactoryError;
use crate::structural::facade::FacadeError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Interpret(#[from] InterpretError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    FileSystem(#[from] FileSystemError),

    #[error(transparent)]
    Bag(#[from] BagError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Strategy(#[from] StrategyError),

    #[error(transparent)]
    Factory(#[from] FactoryError),

    #[error(transparent)]
    Facade(#[from] FacadeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown pattern '{name}'{}", .suggestion.as_ref().map(|s| format!(", did you mean '{s}'?")).unwrap_or_default())]
    UnknownPattern {
        name: String,
        suggestion: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let mut matrix = vec![vec![0; b_chars.len() + 1]; a_chars.len() + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b_chars.len() {
        matrix[0][j] = j;
    }

    for i in 1..=a_chars.len() {
        for j in 1..=b_chars.len() {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a_chars.len()][b_chars.len()]
}

/// Closest candidate within edit distance 3, if any.
pub fn find_similar<'a>(typo: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<String> {
    const MAX_DISTANCE: usize = 3;
    candidates
        .into_iter()
        .map(|candidate| (levenshtein_distance(typo, candidate), candidate))
        .filter(|(distance, _)| *distance <= MAX_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.to_string())
}
