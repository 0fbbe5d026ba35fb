use std::{io::Write, path::Path};

use crate::{
    bayes::{Likelihoods, Predictions, Priors},
    class::Class,
    error::Result,
    vocab::Vocabulary,
};

/// Everything a run produces, ready to be printed.
pub struct Report<'a> {
    pub priors: &'a Priors,
    pub likelihoods: &'a Likelihoods,
    pub vocab: &'a Vocabulary,
    pub predictions: &'a Predictions,
    pub accuracy: f64,
}

impl Report<'_> {
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Prior probabilities:")?;
        for (class, prior) in self.priors.iter() {
            writeln!(out, "class {} = {}", class, prior)?;
        }

        writeln!(out)?;
        writeln!(out, "Feature likelihoods:")?;
        for class in Class::ALL {
            writeln!(out, "class {}", class)?;
            for word in self.vocab.iter() {
                if let Some(likelihood) = self.likelihoods[class].get(word) {
                    writeln!(out, "{}  {}", word, likelihood)?;
                }
            }
            writeln!(out)?;
        }

        writeln!(out, "Predictions on test data:")?;
        if self.predictions.is_empty() {
            writeln!(out, "(none)")?;
        }
        for (id, class) in self.predictions.iter() {
            writeln!(out, "{} = {}", id, class)?;
        }

        writeln!(out)?;
        writeln!(out, "Accuracy on test data = {}", self.accuracy)?;

        Ok(())
    }
}

pub fn write_predictions<W: Write>(out: W, predictions: &Predictions) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);

    writer.write_record(["ID", "Class"])?;
    for (id, class) in predictions.iter() {
        writer.write_record([id, class.to_string().as_str()])?;
    }
    writer.flush()?;

    Ok(())
}

pub fn write_predictions_path<P: AsRef<Path>>(path: P, predictions: &Predictions) -> Result<()> {
    write_predictions(std::fs::File::create(path)?, predictions)
}
