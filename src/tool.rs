// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! CLI tool for answering gapped two-pattern queries over a text file

use clap::{ArgAction, Parser};
use gap_index::Index;
use std::io::BufRead;
use std::path::PathBuf;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    prelude::*,
    registry::Registry,
};

macro_rules! die {
    ($fmt:literal, $($arg:tt)*) => {{
        eprintln!($fmt, $($arg)*);
        std::process::exit(1);
    }};

    ($msg:literal) => {{
        eprintln!($msg);
        std::process::exit(1);
    }};
}

pub fn init_tracing(quiet: bool, verbose: u8) {
    let level_filter = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    // Bridge log crate macros to tracing (the library logs through log::*)
    tracing_log::LogTracer::init().expect("Failed to set log tracer");

    let registry = Registry::default();

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("GAP_LOG")
        .from_env_lossy();

    let subscriber = registry.with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .compact(),
    );

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        die!("INTERNAL ERROR: setting default tracing::subscriber failed");
    }

    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing_panic::panic_hook(info);
        prev_hook(info); // daisy-chain to old panic hook
    }));
}

/// CLI tool for answering gapped two-pattern queries over a text file
#[derive(Parser, Debug)]
#[command(name = "gap")]
#[command(about = "Answers gapped two-pattern queries over a text file")]
struct ToolArgs {
    /// Suppress all output except for errors. This overrides the -v flag.
    #[arg(short, long)]
    quiet: bool,

    /// Turn on verbose output. Supply -v multiple times to increase verbosity.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Path to the text file to index
    text_path: PathBuf,
}

// Matches spanning more bytes than this are printed as positions instead of
// being extracted
const EXTRACT_LIMIT: usize = 100;

fn print_match(text: &[u8], a: usize, b: usize) {
    if b - a > EXTRACT_LIMIT {
        println!("\t{a} {b}");
    } else if let Some(slice) = text.get(a..=b) {
        println!("\t{}", String::from_utf8_lossy(slice));
    }
}

fn main() {
    let args = ToolArgs::parse();

    init_tracing(args.quiet, args.verbose);

    let index = match Index::from_file(&args.text_path) {
        Ok(index) => index,
        Err(e) => die!("Failed to index {:?}: {e}", args.text_path),
    };

    println!("indexed {} bytes", index.len());

    // one query per line: s1 s2 min_gap max_gap
    for line in std::io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => die!("Failed to read query: {e}"),
        };

        let fields: Vec<&str> = line.split_whitespace().collect();

        let [s1, s2, min_gap, max_gap] = fields.as_slice() else {
            eprintln!("expected: s1 s2 min_gap max_gap");
            continue;
        };

        let (Ok(min_gap), Ok(max_gap)) = (min_gap.parse::<usize>(), max_gap.parse::<usize>())
        else {
            eprintln!("gap bounds need to be non-negative integers");
            continue;
        };

        let matches = match index.matches(s1.as_bytes(), s2.as_bytes(), min_gap, max_gap) {
            Ok(matches) => matches,
            Err(e) => {
                eprintln!("invalid query: {e}");
                continue;
            }
        };

        let mut count = 0;

        for (a, b) in matches {
            print_match(index.text(), a, b);
            count += 1;
        }

        println!("{count} matches found");
    }
}
