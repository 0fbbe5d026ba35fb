use std::collections::HashSet;

use crate::error::{BayesError, Result};

/// The closed, ordered set of words the classifier knows about.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<String>,
    lookup: HashSet<String>,
}

impl Vocabulary {
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lookup = HashSet::new();
        let mut ordered = Vec::new();
        for word in words {
            let word = word.into();
            if !lookup.insert(word.clone()) {
                return Err(BayesError::DuplicateWord(word));
            }
            ordered.push(word);
        }

        Ok(Vocabulary {
            words: ordered,
            lookup,
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }
}
