//! `memoria race`: several threads evaluating one key on a shared engine.
//!
//! Threads that miss on the same key at the same time all run the
//! computation, so the reported computation count can exceed `key + 1`.

use anyhow::{Result, anyhow};
use console::style;
use serde::Serialize;
use tracing::{debug, warn};

use memoria_core::relations;
use memoria_types::Key;
use memoria_types::error::RelationError;
use memoria_types::relation::Relation;
use memoria_types::report::Outcome;

use super::Output;

#[derive(Debug, Serialize)]
struct RaceReport {
    relation: Relation,
    key: Key,
    threads: u16,
    results: Vec<Outcome<u64>>,
    agreed: bool,
    invocations: usize,
    cached_entries: usize,
}

pub fn race(relation: Relation, key: Key, threads: u16, output: Output) -> Result<bool> {
    let memo = relations::counted(relation);

    let results: Vec<Result<u64, RelationError>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|i| {
                let memo = &memo;
                s.spawn(move || {
                    debug!(thread = i, key, "racing");
                    memo.get(key)
                })
            })
            .collect();

        handles
            .into_iter()
            .enumerate()
            .map(|(i, handle)| {
                handle
                    .join()
                    .map_err(|_| anyhow!("worker thread {i} panicked"))
            })
            .collect::<Result<Vec<_>>>()
    })?;

    let agreed = results.windows(2).all(|pair| pair[0] == pair[1]);
    if !agreed {
        warn!(%relation, key, "racing callers returned different results");
    }

    let report = RaceReport {
        relation,
        key,
        threads,
        results: results.into_iter().map(Outcome::from).collect(),
        agreed,
        invocations: memo.invocations(),
        cached_entries: memo.len(),
    };
    let succeeded = agreed && !report.results.iter().any(Outcome::is_error);

    match output {
        Output::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(succeeded);
        }
        Output::Quiet => {
            for (i, outcome) in report.results.iter().enumerate() {
                if let Outcome::Error(err) = outcome {
                    eprintln!("thread {i}: {err}");
                }
            }
            if !agreed {
                eprintln!("racing callers returned different results");
            }
            return Ok(succeeded);
        }
        Output::Text => {}
    }

    println!();
    println!(
        "  {} {}({}) from {} threads",
        style("⚡").bold(),
        style(relation).cyan(),
        key,
        threads
    );
    println!();
    for (i, outcome) in report.results.iter().enumerate() {
        match outcome {
            Outcome::Value(value) => println!("  thread {i:>3}: {value}"),
            Outcome::Error(err) => println!("  thread {i:>3}: {}", style(err).red()),
        }
    }
    println!();

    let mark = if agreed {
        style("✓").green()
    } else {
        style("✗").red()
    };
    println!("  {mark} All results agree: {agreed}");
    println!(
        "  Computations: {} for {} cached entries",
        style(report.invocations).bold(),
        report.cached_entries
    );
    println!();

    Ok(succeeded)
}
