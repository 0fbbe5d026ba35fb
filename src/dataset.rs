use csv::{ReaderBuilder, StringRecord};
use std::{fs::File, io::Read, path::Path};

use crate::{
    class::Class,
    corpus::LabeledDocument,
    error::{BayesError, Result},
    vocab::Vocabulary,
};

fn tab_reader<R: Read>(rdr: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(rdr)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |pos| pos.line())
}

/// Reads `id<TAB>label<TAB>sentence` lines.
pub fn read_labeled<R: Read>(rdr: R) -> Result<Vec<LabeledDocument>> {
    let mut reader = tab_reader(rdr);

    let mut documents = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != 3 {
            return Err(BayesError::Malformed {
                line: line_of(&record),
                reason: format!("expected 3 tab separated fields, found {}", record.len()),
            });
        }

        let class: Class = record[1].parse()?;
        documents.push(LabeledDocument::new(&record[0], class, &record[2]));
    }

    Ok(documents)
}

pub fn read_labeled_path<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledDocument>> {
    read_labeled(File::open(path)?)
}

/// Reads one word per line. Blank lines are skipped.
pub fn read_vocabulary<R: Read>(rdr: R) -> Result<Vocabulary> {
    let mut reader = tab_reader(rdr);

    let mut words = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != 1 {
            return Err(BayesError::Malformed {
                line: line_of(&record),
                reason: "vocabulary lines hold a single word".to_string(),
            });
        }

        let word = record[0].trim_end();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }

    Vocabulary::new(words)
}

pub fn read_vocabulary_path<P: AsRef<Path>>(path: P) -> Result<Vocabulary> {
    read_vocabulary(File::open(path)?)
}
