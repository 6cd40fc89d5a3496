use anyhow::{bail, Context, Result};
use clap::Parser;

use column_suggest::cli::{CliArgs, OutputMode, RunConfig};
use column_suggest::suggest::render_plain;
use column_suggest::{ColumnSuggest, Document, SuggestConfig, TextBuffer};

fn main() -> Result<()> {
    column_suggest::tracing::init();

    let args = CliArgs::parse();
    let run = args.into_config().map_err(anyhow::Error::msg)?;
    tracing::debug!(?run, "starting");

    let mut config = match &run.config_path {
        Some(path) => SuggestConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SuggestConfig::load(),
    };
    if let Some(limit) = run.limit {
        config.limit = limit;
    }

    run_once(&run, config)
}

fn run_once(run: &RunConfig, config: SuggestConfig) -> Result<()> {
    let mut document = Document::from_file(&run.path)
        .with_context(|| format!("Failed to read {}", run.path.display()))?;
    let cursor = run.cursor(document.line_length(run.line));

    let mut suggest = ColumnSuggest::new(config);
    let Some(context) = suggest.on_trigger(cursor, &document) else {
        tracing::info!(line = cursor.line, column = cursor.column, "autocomplete not active");
        return Ok(());
    };
    let candidates = suggest.get_suggestions(&context);
    let compact_symbol = suggest.config().compact_symbol;

    match run.mode {
        OutputMode::List => {
            for candidate in &candidates {
                println!("{}", render_plain(candidate, compact_symbol));
            }
        }
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&candidates)?);
        }
        OutputMode::Apply { index } | OutputMode::ApplyInPlace { index } => {
            let Some(candidate) = candidates.get(index) else {
                bail!(
                    "No candidate at index {} ({} available)",
                    index,
                    candidates.len()
                );
            };
            suggest.select_suggestion(candidate, &mut document);

            if matches!(run.mode, OutputMode::ApplyInPlace { .. }) {
                std::fs::write(&run.path, document.content())
                    .with_context(|| format!("Failed to write {}", run.path.display()))?;
                tracing::info!("Wrote {}", run.path.display());
            } else {
                print!("{}", document.content());
            }
        }
    }

    Ok(())
}
