//! The `mathdown` binary: parse Markdown from files or standard input and
//! print the emitted event stream, one event per line.

use std::error::Error;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use mathdown::{
    build_tree, emit_document, resolve, substitute, DefaultPlainParser, EventCollector, Options,
};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The Markdown file(s) to parse; or standard input if none passed.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Macro identifier to attach to emitted math events.
    #[arg(long, default_value = "mathjax")]
    macro_id: String,

    /// Use the pre-parse placeholder strategy instead of the tree walk.
    #[arg(long)]
    placeholders: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut source = String::new();
    if cli.files.is_empty() {
        std::io::stdin().read_to_string(&mut source)?;
    } else {
        for path in &cli.files {
            source.push_str(&fs::read_to_string(path)?);
        }
    }

    let options = Options {
        macro_id: cli.macro_id,
        ..Options::default()
    };

    let mut collector = EventCollector::new();
    let result = if cli.placeholders {
        let (rewritten, mut table) = substitute(&source);
        resolve(
            &rewritten,
            &mut table,
            &options,
            &mut collector,
            &DefaultPlainParser,
        )
    } else {
        let tree = build_tree(&source);
        emit_document(&tree, &options, &mut collector)
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        process::exit(1);
    }

    for event in collector.events() {
        println!("{}", event);
    }
    Ok(())
}
