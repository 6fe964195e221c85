//! # folio CLI
//!
//! Maps a JSON document template, generates it against a content file and
//! writes the resulting node tree as pretty-printed JSON.
//!
//! ```bash
//! folio invoice.json --content order.json --output tree.json
//! folio invoice.json --check
//! ```

use clap::Parser;
use folio::{Content, DocumentBuilder, ExecutionConfig, PipelineError};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// folio - maps JSON document templates into renderable node trees
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON document template
    template: PathBuf,

    /// JSON file holding the content map (empty content when omitted)
    #[arg(short, long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Write the generated tree to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// JSON file with mapping settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Default binding of the root page (overrides the config file)
    #[arg(long)]
    source_key: Option<String>,

    /// Maximum nesting depth accepted in the template (overrides the config file)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Only map the template and report its features
    #[arg(long)]
    check: bool,
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ExecutionConfig::from_file(path)?,
        None => ExecutionConfig::default(),
    };
    if let Some(source_key) = cli.source_key {
        config.source_key = Some(source_key);
    }
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
    }

    let document = DocumentBuilder::new()
        .with_config(config)
        .with_template_file(&cli.template)?
        .build()?;

    if cli.check {
        let features = document.features();
        println!(
            "{}: ok ({} leaf components, lists: {}, bindings: {})",
            cli.template.display(),
            features.leaf_count,
            features.has_lists,
            features.has_bindings
        );
        return Ok(());
    }

    let content = match &cli.content {
        Some(path) => read_content(path)?,
        None => Content::new(),
    };

    match &cli.output {
        Some(path) => {
            document.generate_to_file(&content, path)?;
            log::info!("Wrote {}", path.display());
        }
        None => document.generate_to_writer(&content, io::stdout().lock())?,
    }
    Ok(())
}

fn read_content(path: &Path) -> Result<Content, PipelineError> {
    match serde_json::from_str::<Value>(&fs::read_to_string(path)?)? {
        Value::Object(content) => Ok(content),
        _ => Err(PipelineError::InvalidContent(format!(
            "{} does not hold a map of content",
            path.display()
        ))),
    }
}
