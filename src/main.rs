//! CLI: печатает конфигурацию признаков в JSON для тренера

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use census_feat::{
    census, official_census_feature_columns_demo, BuilderConfig, DatasetSchema, FeatureColumnBuilder,
};

#[derive(Parser, Debug)]
#[command(name = "census-feat", about = "Wide & Deep feature column configuration for the census dataset")]
struct Args {
    /// Training data (CSV without header)
    #[arg(long, default_value = "data/census/adult.data", env = "CENSUS_FEAT_TRAIN")]
    train: PathBuf,

    /// Test data (CSV without header)
    #[arg(long, default_value = "data/census/adult.test", env = "CENSUS_FEAT_TEST")]
    test: PathBuf,

    /// Embedding dimension for the deep columns
    #[arg(long, default_value_t = 8, env = "CENSUS_FEAT_EMBEDDING_DIM")]
    embedding_dim: usize,

    /// JSON schema file; the built-in census schema is used when omitted
    #[arg(long, env = "CENSUS_FEAT_SCHEMA")]
    schema: Option<PathBuf>,

    /// Print column names and kinds only
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Print the hand-written reference columns and exit
    #[arg(long, default_value_t = false)]
    demo: bool,
}

fn main() -> Result<()> {
    // Логи в stderr, stdout только под JSON
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.demo {
        let demo = official_census_feature_columns_demo();
        println!("{}", serde_json::to_string_pretty(&demo)?);
        return Ok(());
    }

    if args.embedding_dim == 0 {
        bail!("--embedding-dim must be positive");
    }

    let custom_schema = match &args.schema {
        Some(path) => Some(
            DatasetSchema::from_json_file(path)
                .with_context(|| format!("Failed to load schema from {}", path.display()))?,
        ),
        None => None,
    };
    let schema = custom_schema.as_ref().unwrap_or_else(|| census());

    tracing::info!(
        "Building feature columns from {} and {}",
        args.train.display(),
        args.test.display()
    );

    let config = BuilderConfig::default()
        .with_data(args.train, args.test)
        .with_embedding_dim(args.embedding_dim);
    let feat_config = FeatureColumnBuilder::new(schema, config)
        .build()
        .context("Failed to build feature columns")?;

    let output = if args.summary {
        serde_json::to_string_pretty(&feat_config.summary())?
    } else {
        serde_json::to_string_pretty(&feat_config)?
    };
    println!("{}", output);

    Ok(())
}
