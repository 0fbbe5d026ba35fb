use crate::class::{Class, PerClass};

/// A sentence with its identifier and known label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledDocument {
    pub id: String,
    pub class: Class,
    pub text: String,
}

impl LabeledDocument {
    pub fn new<S: Into<String>, T: Into<String>>(id: S, class: Class, text: T) -> Self {
        LabeledDocument {
            id: id.into(),
            class,
            text: text.into().trim_end().to_string(),
        }
    }
}

/// Training sentences grouped by class, in load order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: PerClass<Vec<String>>,
}

impl Corpus {
    pub fn new<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a LabeledDocument>,
    {
        let mut grouped: PerClass<Vec<String>> = PerClass::default();
        for document in documents {
            grouped[document.class].push(document.text.clone());
        }

        Corpus { documents: grouped }
    }

    pub fn total_documents(&self) -> usize {
        self.documents.iter().map(|(_, docs)| docs.len()).sum()
    }

    pub fn document_count(&self, class: Class) -> usize {
        self.documents[class].len()
    }

    pub fn documents(&self, class: Class) -> &[String] {
        &self.documents[class]
    }

    /// Total number of single-space separated tokens across the class.
    pub fn word_count(&self, class: Class) -> usize {
        self.documents(class)
            .iter()
            .map(|sentence| sentence.split(' ').count())
            .sum()
    }

    /// Occurrences of `word` in the class, ignoring case.
    pub fn feature_count(&self, class: Class, word: &str) -> usize {
        let word = word.to_lowercase();
        self.documents(class)
            .iter()
            .map(|sentence| {
                sentence
                    .split_whitespace()
                    .filter(|token| token.to_lowercase() == word)
                    .count()
            })
            .sum()
    }
}
