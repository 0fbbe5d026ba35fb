use log::{debug, info, warn};
use std::collections::{hash_map::Entry, HashMap};

use crate::{
    class::{Class, PerClass},
    corpus::{Corpus, LabeledDocument},
    error::{BayesError, Result},
    vocab::Vocabulary,
};

pub type Priors = PerClass<f64>;
pub type Likelihoods = PerClass<HashMap<String, f64>>;

pub struct NaiveBayesClassifier {
    class_likelihoods: Likelihoods,
    class_priors: Priors,
}

/// Predicted class for each test document, in test-set order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predictions {
    entries: Vec<(String, Class)>,
    by_id: HashMap<String, usize>,
}

impl Predictions {
    pub fn get(&self, id: &str) -> Option<Class> {
        self.by_id.get(id).map(|&i| self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Class)> {
        self.entries.iter().map(|(id, class)| (id.as_str(), *class))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Share of the training documents that belong to `class`.
pub fn prior_probability(corpus: &Corpus, class: Class) -> f64 {
    let in_class = corpus.document_count(class);
    if in_class == 0 {
        return 0.0;
    }
    in_class as f64 / corpus.total_documents() as f64
}

pub fn prior_probabilities(corpus: &Corpus) -> Priors {
    PerClass::from_fn(|class| prior_probability(corpus, class))
}

/// Laplace smoothed P(word | class) for every class and vocabulary word.
pub fn feature_likelihoods(corpus: &Corpus, vocab: &Vocabulary) -> Likelihoods {
    let vocab_size = vocab.len() as f64;

    PerClass::from_fn(|class| {
        let words_in_class = corpus.word_count(class) as f64;
        debug!(
            "class {}: {} documents, {} words",
            class,
            corpus.document_count(class),
            words_in_class
        );

        vocab
            .iter()
            .map(|word| {
                let count = corpus.feature_count(class, word) as f64;
                let likelihood = (count + 1.0) / (words_in_class + vocab_size);
                (word.to_string(), likelihood)
            })
            .collect()
    })
}

impl NaiveBayesClassifier {
    pub fn new(corpus: &Corpus, vocab: &Vocabulary) -> Self {
        if vocab.is_empty() {
            warn!("vocabulary is empty, every sentence will fail to classify");
        }
        for class in Class::ALL {
            if corpus.document_count(class) == 0 {
                warn!("class {} has no training documents", class);
            }
        }

        let class_priors = prior_probabilities(corpus);
        for (class, prior) in class_priors.iter() {
            debug!("prior for class {} = {}", class, prior);
        }

        let class_likelihoods = feature_likelihoods(corpus, vocab);

        info!(
            "trained on {} documents with a vocabulary of {} words",
            corpus.total_documents(),
            vocab.len()
        );

        NaiveBayesClassifier {
            class_likelihoods,
            class_priors,
        }
    }

    pub fn priors(&self) -> &Priors {
        &self.class_priors
    }

    pub fn likelihoods(&self) -> &Likelihoods {
        &self.class_likelihoods
    }

    /// Prior times the product of every token's likelihood, per class.
    ///
    /// Tokens are looked up exactly as written; a token with no likelihood is an error.
    pub fn scores(&self, sentence: &str) -> Result<PerClass<f64>> {
        let mut scores = self.class_priors.clone();
        for word in sentence.trim_end().split(' ') {
            for class in Class::ALL {
                let &likelihood = self.class_likelihoods[class].get(word).ok_or_else(|| {
                    BayesError::OutOfVocabulary {
                        word: word.to_string(),
                        class,
                    }
                })?;
                scores[class] *= likelihood;
            }
        }

        Ok(scores)
    }

    /// Picks the class with the strictly higher score; ties go to `Class::One`.
    ///
    /// A class with a zero prior loses outright to a class with training data,
    /// even when both scores have underflowed to zero.
    pub fn predict_one(&self, sentence: &str) -> Result<Class> {
        let scores = self.scores(sentence)?;
        let zero_prior = |class: Class| self.class_priors[class] == 0.0;
        if zero_prior(Class::One) && !zero_prior(Class::Zero) {
            return Ok(Class::Zero);
        }
        if zero_prior(Class::Zero) && !zero_prior(Class::One) {
            return Ok(Class::One);
        }

        if scores[Class::Zero] > scores[Class::One] {
            Ok(Class::Zero)
        } else {
            Ok(Class::One)
        }
    }

    /// Classifies every test document, stopping at the first failure.
    pub fn predict_all(&self, documents: &[LabeledDocument]) -> Result<Predictions> {
        if documents.is_empty() {
            warn!("test set is empty, nothing to classify");
        }

        let mut by_id = HashMap::with_capacity(documents.len());
        let mut entries = Vec::with_capacity(documents.len());
        for document in documents {
            match by_id.entry(document.id.clone()) {
                Entry::Occupied(_) => {
                    return Err(BayesError::DuplicateDocument(document.id.clone()))
                }
                Entry::Vacant(entry) => entry.insert(entries.len()),
            };
            let class = self.predict_one(&document.text)?;
            debug!("{} -> {}", document.id, class);
            entries.push((document.id.clone(), class));
        }

        info!("classified {} test documents", entries.len());
        Ok(Predictions { entries, by_id })
    }
}
