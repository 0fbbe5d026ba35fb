use std::io;

use thiserror::Error;

use crate::class::Class;

/// Everything that can abort a training or classification run.
#[derive(Error, Debug)]
pub enum BayesError {
    #[error("invalid class label {0:?}, expected 0 or 1")]
    InvalidLabel(String),

    #[error("malformed record on line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    #[error("word {0:?} appears more than once in the vocabulary")]
    DuplicateWord(String),

    #[error("document id {0:?} appears more than once in the test set")]
    DuplicateDocument(String),

    #[error("word {word:?} has no likelihood for class {class}")]
    OutOfVocabulary { word: String, class: Class },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, BayesError>;
