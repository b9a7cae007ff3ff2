use anyhow::Result;
use clap::{Parser, Subcommand};
use searcher::{render_hits, render_json, run_interactive, run_query, EMPTY_QUERY};
use std::io::{self, Write};
use tracing_subscriber::{fmt, EnvFilter};
use vsm_core::{EngineConfig, SearchEngine};

#[derive(Parser)]
#[command(name = "searcher")]
#[command(about = "Ranked retrieval over a zipped text corpus (lnc.ltc cosine similarity)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index and run a single query
    Search {
        /// Corpus archive (zip of .txt files)
        #[arg(long, default_value = "corpus-1.zip")]
        corpus: String,
        /// Emit results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Query text
        query: Vec<String>,
    },
    /// Build the index once, then answer queries read from stdin
    Interactive {
        #[arg(long, default_value = "corpus-1.zip")]
        corpus: String,
    },
    /// Build the index and print its statistics
    Stats {
        #[arg(long, default_value = "corpus-1.zip")]
        corpus: String,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let engine = SearchEngine::new(EngineConfig::default());
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Search { corpus, json, query } => {
            engine.build_index(&corpus)?;
            let query = query.join(" ");
            match run_query(&engine, &query)? {
                Some(hits) if json => writeln!(stdout, "{}", render_json(&query, &hits)?)?,
                Some(hits) => stdout.write_all(render_hits(&hits).as_bytes())?,
                None => writeln!(stdout, "{EMPTY_QUERY}")?,
            }
        }
        Commands::Interactive { corpus } => {
            let stats = engine.build_index(&corpus)?;
            writeln!(stdout, "Index built: {} documents, {} terms", stats.num_docs, stats.num_terms)?;
            run_interactive(&engine, io::stdin().lock(), stdout)?;
        }
        Commands::Stats { corpus, json } => {
            let stats = engine.build_index(&corpus)?;
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&stats)?)?;
            } else {
                writeln!(stdout, "documents: {}", stats.num_docs)?;
                writeln!(stdout, "terms: {}", stats.num_terms)?;
                for skipped in &stats.skipped {
                    writeln!(stdout, "skipped: {} ({})", skipped.entry, skipped.reason)?;
                }
            }
        }
    }
    Ok(())
}
