use log::{info, warn};

use crate::{bayes::Predictions, corpus::LabeledDocument};

/// Percentage of test documents whose prediction matches their label.
///
/// An empty test set scores 0. A document without a prediction counts as wrong.
pub fn accuracy(documents: &[LabeledDocument], predictions: &Predictions) -> f64 {
    if documents.is_empty() {
        warn!("no test documents, reporting accuracy as 0");
        return 0.0;
    }

    let correct = documents
        .iter()
        .filter(|document| predictions.get(&document.id) == Some(document.class))
        .count();

    info!("{} of {} test documents classified correctly", correct, documents.len());
    100.0 * correct as f64 / documents.len() as f64
}
