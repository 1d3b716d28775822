use anyhow::{Context, Result};
use til_snippets::config::{self, KeywordSearchConfig, OutputFormat};
use til_snippets::keywords::{KeywordSearch, load_records, sample_records};

fn main() -> Result<()> {
    config::load_dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = KeywordSearchConfig::from_env()?;
    let records = match &config.records_path {
        Some(path) => load_records(path)?,
        None => sample_records().context("built-in sample bookmarks are malformed")?,
    };

    let search = KeywordSearch::new(records, config.vectorizer, config.mode);
    log::info!("query: {:?}", config.query);
    let table = search.run(&config.query)?;

    match config.output {
        OutputFormat::Table => print!("{table}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&table)?),
    }
    Ok(())
}
