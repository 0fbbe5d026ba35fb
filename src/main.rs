mod bayes;
mod class;
mod corpus;
mod dataset;
mod error;
mod evaluate;
mod report;
mod vocab;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::{info, LevelFilter};
use std::{
    io::{self, Write},
    path::PathBuf,
    process,
};

/// Two-class multinomial naive Bayes over a fixed vocabulary
#[derive(Parser, Debug)]
#[command(name = "sentence_bayes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct Args {
    /// Training sentences: id<TAB>label<TAB>sentence
    #[arg(long, env = "BAYES_TRAIN", value_name = "FILE")]
    train: PathBuf,

    /// Vocabulary, one word per line
    #[arg(long, env = "BAYES_VOCAB", value_name = "FILE")]
    vocab: PathBuf,

    /// Test sentences: id<TAB>label<TAB>sentence
    #[arg(long, env = "BAYES_TEST", value_name = "FILE")]
    test: PathBuf,

    /// Also write predictions as CSV
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let training = dataset::read_labeled_path(&args.train)
        .with_context(|| format!("failed to read training set {}", args.train.display()))?;
    let vocab = dataset::read_vocabulary_path(&args.vocab)
        .with_context(|| format!("failed to read vocabulary {}", args.vocab.display()))?;
    let test = dataset::read_labeled_path(&args.test)
        .with_context(|| format!("failed to read test set {}", args.test.display()))?;

    let corpus = corpus::Corpus::new(&training);
    let classifier = bayes::NaiveBayesClassifier::new(&corpus, &vocab);
    let predictions = classifier
        .predict_all(&test)
        .context("failed to classify test set")?;
    let accuracy = evaluate::accuracy(&test, &predictions);

    let report = report::Report {
        priors: classifier.priors(),
        likelihoods: classifier.likelihoods(),
        vocab: &vocab,
        predictions: &predictions,
        accuracy,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write_to(&mut out)?;
    out.flush()?;

    if let Some(path) = &args.output {
        report::write_predictions_path(path, &predictions)
            .with_context(|| format!("failed to write predictions to {}", path.display()))?;
        info!("wrote {} predictions to {}", predictions.len(), path.display());
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    Builder::new()
        .filter_level(args.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
