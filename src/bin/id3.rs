//! id3: fit a decision tree on a training set and evaluate it on a test set.
use anyhow::{Context, Result};
use clap::Parser;
use id3_tree::io::load_dataset;
use id3_tree::{DecisionTree, TreeConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "id3")]
#[command(about = "Fit an ID3 decision tree and report its predictions on a test set")]
#[command(version)]
struct Cli {
    /// Training dataset (CSV, last column is the label)
    train: PathBuf,

    /// Test dataset (CSV, same columns as the training set)
    test: PathBuf,

    /// Maximum depth of the tree
    depth: Option<usize>,

    /// Number of threads used to grow the tree
    #[arg(short, long)]
    threads: Option<usize>,

    /// JSON configuration file, explicit arguments take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => TreeConfig::from_json_file(path)?,
        None => TreeConfig::default(),
    };
    if cli.depth.is_some() {
        cfg.max_depth = cli.depth;
    }
    if cli.threads.is_some() {
        cfg.num_threads = cli.threads;
    }

    let train = load_dataset(&cli.train).with_context(|| format!("loading {}", cli.train.display()))?;
    let test = load_dataset(&cli.test).with_context(|| format!("loading {}", cli.test.display()))?;

    let mut tree = DecisionTree::new(cfg);
    tree.fit(&train).context("fitting the decision tree")?;
    let prediction = tree.evaluate(&test).context("evaluating the decision tree")?;

    if cli.json {
        println!("{}", prediction.to_json()?);
    } else {
        println!("{}", prediction);
    }
    Ok(())
}
