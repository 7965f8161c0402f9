//! # Carve - A Small Text Editor Core
//!
//! Headless driver for the carve editing engine: opens a file, runs the
//! syntax highlighter and find engine over it, and prints the resulting
//! spans. The interactive surface binds the same `Command` dispatch
//! this binary exercises.
//!
//! ```bash
//! # Highlight a file
//! cargo run -- src/main.c
//!
//! # Search it
//! cargo run -- src/main.c --find return
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carve_core::{dispatch, Command, EventLog, Session, Settings};

/// Carve - a small text editor core
#[derive(Parser, Debug)]
#[command(name = "carve")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Search the opened file for a literal needle
    #[arg(short, long, value_name = "TEXT")]
    find: Option<String>,

    /// Disable the session event log
    #[arg(long)]
    no_log: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting carve v{}", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load();
    let mut session = Session::new(settings);

    if !args.no_log {
        if let Some(data_dir) = dirs::data_local_dir() {
            let log = EventLog::create(data_dir.join("carve"))?;
            tracing::debug!("event log at {}", log.path().display());
            session.attach_event_log(log)?;
        }
    }

    if let Some(file) = &args.file {
        dispatch(&mut session, Command::OpenFile { path: file.clone() })?;

        let doc = session.document();
        println!(
            "{}: {} chars, {} lines",
            doc.name(),
            doc.buffer().len_chars(),
            doc.buffer().len_lines()
        );
        for span in session.syntax_spans() {
            println!(
                "{:<8} {:>5}..{:<5} {}",
                span.category.as_str(),
                span.start,
                span.end,
                span.color
            );
        }
    }

    if let Some(needle) = &args.find {
        dispatch(
            &mut session,
            Command::Find {
                needle: needle.clone(),
            },
        )?;
        println!("{} match(es) for {:?}", session.match_spans().len(), needle);
        for span in session.match_spans() {
            println!("match    {:>5}..{}", span.start, span.end);
        }
    }

    dispatch(&mut session, Command::Quit)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["carve"]);
        assert!(args.file.is_none());
        assert!(args.find.is_none());
        assert!(!args.no_log);
    }

    #[test]
    fn test_args_with_file_and_find() {
        let args = Args::parse_from(["carve", "test.c", "--find", "return"]);
        assert_eq!(args.file, Some(PathBuf::from("test.c")));
        assert_eq!(args.find.as_deref(), Some("return"));
    }
}
